//! Lexical coercion of attribute strings.
//!
//! Attribute values always arrive as strings. Boolean and numeric props
//! would otherwise behave as truthy text, so string values are coerced by
//! lexical shape before they reach the component. Coercion never fails:
//! anything that is not exactly a boolean literal or a finite number falls
//! through as text.

use crate::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A coerced attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Number(f64),
    Text(CompactString),
}

impl AttrValue {
    /// Coerce a raw attribute string into a typed value.
    ///
    /// Exactly `"true"`/`"false"` become booleans; a string whose trimmed
    /// form parses as a finite number becomes a number; everything else is
    /// returned unchanged as text.
    ///
    /// # Examples
    /// ```
    /// use socle_carton::AttrValue;
    ///
    /// assert_eq!(AttrValue::coerce("true"), AttrValue::Bool(true));
    /// assert_eq!(AttrValue::coerce("42"), AttrValue::Number(42.0));
    /// assert_eq!(AttrValue::coerce("hello"), AttrValue::Text("hello".into()));
    /// ```
    pub fn coerce(raw: &str) -> AttrValue {
        match raw {
            "true" => return AttrValue::Bool(true),
            "false" => return AttrValue::Bool(false),
            _ => {}
        }

        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            if let Ok(n) = trimmed.parse::<f64>() {
                if n.is_finite() {
                    return AttrValue::Number(n);
                }
            }
        }

        AttrValue::Text(CompactString::new(raw))
    }

    /// Whether this value is the text form (no coercion applied).
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, AttrValue::Text(_))
    }
}

/// Best-effort serialization back onto an attribute.
///
/// Inverse of [`AttrValue::coerce`] for booleans and text; numbers print
/// without a trailing `.0` for integral values, matching how they would
/// have been written in markup.
impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(b) => write!(f, "{b}"),
            AttrValue::Number(n) => write!(f, "{n}"),
            AttrValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(CompactString::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_booleans() {
        assert_eq!(AttrValue::coerce("true"), AttrValue::Bool(true));
        assert_eq!(AttrValue::coerce("false"), AttrValue::Bool(false));
        // Not exact literals
        assert_eq!(AttrValue::coerce("True"), AttrValue::Text("True".into()));
        assert_eq!(
            AttrValue::coerce(" true"),
            AttrValue::Text(" true".into())
        );
    }

    #[test]
    fn test_coerce_numbers() {
        assert_eq!(AttrValue::coerce("42"), AttrValue::Number(42.0));
        assert_eq!(AttrValue::coerce("-3.5"), AttrValue::Number(-3.5));
        assert_eq!(AttrValue::coerce("1e3"), AttrValue::Number(1000.0));
        assert_eq!(AttrValue::coerce(" 42 "), AttrValue::Number(42.0));
    }

    #[test]
    fn test_coerce_text_fallthrough() {
        assert_eq!(AttrValue::coerce("hello"), AttrValue::Text("hello".into()));
        assert_eq!(AttrValue::coerce("42px"), AttrValue::Text("42px".into()));
        assert_eq!(AttrValue::coerce(""), AttrValue::Text("".into()));
        // Non-finite parses are not numbers
        assert_eq!(AttrValue::coerce("inf"), AttrValue::Text("inf".into()));
        assert_eq!(AttrValue::coerce("NaN"), AttrValue::Text("NaN".into()));
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(AttrValue::Bool(true).to_string(), "true");
        assert_eq!(AttrValue::Number(42.0).to_string(), "42");
        assert_eq!(AttrValue::Number(-3.5).to_string(), "-3.5");
        assert_eq!(AttrValue::Text("hello".into()).to_string(), "hello");

        // Serialize then coerce yields the same value back
        for v in [
            AttrValue::Bool(false),
            AttrValue::Number(7.25),
            AttrValue::Text("widget".into()),
        ] {
            assert_eq!(AttrValue::coerce(&v.to_string()), v);
        }
    }
}
