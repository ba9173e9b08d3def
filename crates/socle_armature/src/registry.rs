//! Explicit registration state.
//!
//! The native `customElements` registry throws on duplicate definitions
//! and offers no way to ask what a bridge already registered. The bridge
//! therefore keeps its own registry, created by `install` and threaded
//! through every registration call. Re-registering a tag is not an error;
//! it is reported as [`Registration::AlreadyRegistered`] and leaves the
//! existing entry untouched.

use crate::options::BridgeOptions;
use crate::props::PropertySet;
use socle_carton::{CompactString, FxHashMap};

/// Error type for registration.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Custom element tag names must be lowercase and contain a hyphen.
    #[error("invalid custom element tag name: {0:?}")]
    InvalidTag(String),
}

/// Result type for registration.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Everything recorded about one registered tag.
#[derive(Debug, Clone)]
pub struct RegisteredComponent {
    pub tag: CompactString,
    pub property_set: PropertySet,
    pub options: BridgeOptions,
}

/// Outcome of a registration call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// The tag was recorded; the caller should define the native element.
    Registered,
    /// The tag was already recorded; the native registry must not be
    /// touched again.
    AlreadyRegistered,
}

/// Registration state for one bridge installation.
#[derive(Debug, Default)]
pub struct BridgeRegistry {
    components: FxHashMap<CompactString, RegisteredComponent>,
}

impl BridgeRegistry {
    pub fn new() -> BridgeRegistry {
        BridgeRegistry::default()
    }

    /// Record a tag. Idempotent: a second registration of the same tag is
    /// reported and skipped rather than treated as an error.
    pub fn register(
        &mut self,
        tag: &str,
        property_set: PropertySet,
        options: BridgeOptions,
    ) -> RegistryResult<Registration> {
        validate_tag(tag)?;

        let key = CompactString::new(tag);
        if self.components.contains_key(&key) {
            tracing::warn!(tag, "tag already registered, skipping");
            return Ok(Registration::AlreadyRegistered);
        }

        tracing::debug!(tag, props = property_set.len(), "registering component");
        self.components.insert(
            key.clone(),
            RegisteredComponent {
                tag: key,
                property_set,
                options,
            },
        );
        Ok(Registration::Registered)
    }

    /// Look up a registered tag.
    pub fn get(&self, tag: &str) -> Option<&RegisteredComponent> {
        self.components.get(tag)
    }

    pub fn is_registered(&self, tag: &str) -> bool {
        self.components.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Check the constraints the native registry enforces on tag names, so a
/// bad name fails here with a typed error instead of a DOM exception.
fn validate_tag(tag: &str) -> RegistryResult<()> {
    let well_formed = !tag.is_empty()
        && tag.contains('-')
        && !tag.starts_with('-')
        && tag.chars().next().is_some_and(|c| c.is_ascii_lowercase())
        && tag
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_' || c == '.');

    if well_formed {
        Ok(())
    } else {
        Err(RegistryError::InvalidTag(tag.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::ComponentSpec;

    fn props(names: &[&str]) -> PropertySet {
        PropertySet::from_spec(&ComponentSpec::with_props(names.iter().copied()))
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = BridgeRegistry::new();
        let outcome = registry
            .register("widget-vue", props(&["userName"]), BridgeOptions::default())
            .unwrap();
        assert_eq!(outcome, Registration::Registered);

        let entry = registry.get("widget-vue").unwrap();
        assert_eq!(entry.tag, "widget-vue");
        assert_eq!(entry.property_set.hyphenated(), ["user-name"]);
    }

    #[test]
    fn test_idempotent_register() {
        let mut registry = BridgeRegistry::new();
        registry
            .register("widget-vue", props(&["a"]), BridgeOptions::default())
            .unwrap();
        let outcome = registry
            .register("widget-vue", props(&["b"]), BridgeOptions::default())
            .unwrap();
        assert_eq!(outcome, Registration::AlreadyRegistered);

        // The original entry wins.
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("widget-vue").unwrap().property_set.camel(), ["a"]);
    }

    #[test]
    fn test_invalid_tags() {
        let mut registry = BridgeRegistry::new();
        for tag in ["widget", "Widget-Vue", "-widget", "", "1-widget"] {
            let err = registry
                .register(tag, props(&[]), BridgeOptions::default())
                .unwrap_err();
            assert!(matches!(err, RegistryError::InvalidTag(_)), "tag {tag:?}");
        }
        assert!(registry.is_empty());
    }
}
