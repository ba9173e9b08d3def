//! Naming conversions between attribute and property forms.
//!
//! Attributes live in the document as hyphenated names (`user-name`),
//! properties live on the component as camelCase names (`userName`). The
//! two conversions here are inverses for names that are well-formed in
//! either convention.

use crate::CompactString;

/// Convert a hyphenated attribute name to camelCase.
///
/// # Examples
/// ```
/// use socle_carton::camelize;
///
/// assert_eq!(camelize("user-name"), "userName");
/// assert_eq!(camelize("is-active"), "isActive");
/// assert_eq!(camelize("plain"), "plain");
/// ```
pub fn camelize(s: &str) -> CompactString {
    let mut result = String::with_capacity(s.len());
    let mut uppercase_next = false;

    for c in s.chars() {
        if c == '-' {
            uppercase_next = true;
        } else if uppercase_next {
            result.push(c.to_ascii_uppercase());
            uppercase_next = false;
        } else {
            result.push(c);
        }
    }

    CompactString::new(&result)
}

/// Convert a camelCase property name to its hyphenated attribute form.
///
/// Uppercase letters after the first character are lowered and prefixed
/// with a hyphen; a leading uppercase letter is lowered in place.
///
/// # Examples
/// ```
/// use socle_carton::hyphenate;
///
/// assert_eq!(hyphenate("userName"), "user-name");
/// assert_eq!(hyphenate("isActive"), "is-active");
/// assert_eq!(hyphenate("plain"), "plain");
/// ```
pub fn hyphenate(s: &str) -> CompactString {
    let mut result = String::with_capacity(s.len() + 4);

    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                result.push('-');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }

    CompactString::new(&result)
}
