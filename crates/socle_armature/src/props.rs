//! Prop extraction: from a [`ComponentSpec`] to the paired name lists.

use crate::spec::ComponentSpec;
use socle_carton::{camelize, hyphenate, CompactString, FxHashSet};

/// The paired camelCase/hyphenated prop name lists of one component type.
///
/// The two lists are index-aligned and unique by camel form. A set is
/// built once per registration and shared read-only across every host
/// element of that tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySet {
    camel: Vec<CompactString>,
    hyphenated: Vec<CompactString>,
}

impl PropertySet {
    /// Extract the declared props of a definition.
    ///
    /// Traversal order: mixins (recursively, in declared order), then the
    /// definition's own props, then the parent chain. A name already
    /// present by camel form is not re-added, so the first declaration
    /// wins the position. A definition with no declarable props yields an
    /// empty set; that is not an error.
    pub fn from_spec(spec: &ComponentSpec) -> PropertySet {
        let mut camel = Vec::new();
        let mut seen = FxHashSet::default();
        collect(spec, &mut camel, &mut seen);

        let hyphenated = camel.iter().map(|name| hyphenate(name)).collect();
        PropertySet { camel, hyphenated }
    }

    /// CamelCase names, in first-seen order.
    #[inline]
    pub fn camel(&self) -> &[CompactString] {
        &self.camel
    }

    /// Hyphenated attribute names, index-aligned with [`Self::camel`].
    #[inline]
    pub fn hyphenated(&self) -> &[CompactString] {
        &self.hyphenated
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.camel.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.camel.is_empty()
    }

    /// Iterate `(camel, hyphenated)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.camel
            .iter()
            .zip(self.hyphenated.iter())
            .map(|(c, h)| (c.as_str(), h.as_str()))
    }
}

fn collect(spec: &ComponentSpec, camel: &mut Vec<CompactString>, seen: &mut FxHashSet<CompactString>) {
    for mixin in &spec.mixins {
        collect(mixin, camel, seen);
    }

    for raw in &spec.props {
        let name = camelize(raw);
        if seen.insert(name.clone()) {
            camel.push(name);
        }
    }

    if let Some(parent) = &spec.parent {
        collect(parent, camel, seen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_and_hyphenation() {
        let set = PropertySet::from_spec(&ComponentSpec::with_props(["userName", "is-active"]));
        assert_eq!(set.camel(), ["userName", "isActive"]);
        assert_eq!(set.hyphenated(), ["user-name", "is-active"]);
        assert_eq!(set.len(), 2);

        for (camel, hyphenated) in set.pairs() {
            assert_eq!(socle_carton::hyphenate(camel).as_str(), hyphenated);
        }
    }

    #[test]
    fn test_dedupe_first_seen_order() {
        // Same prop declared in both naming forms counts once.
        let set =
            PropertySet::from_spec(&ComponentSpec::with_props(["userName", "user-name", "age"]));
        assert_eq!(set.camel(), ["userName", "age"]);
        assert_eq!(set.hyphenated(), ["user-name", "age"]);
    }

    #[test]
    fn test_mixins_scanned_before_own_props() {
        let spec = ComponentSpec {
            props: vec!["own".into(), "shared".into()],
            mixins: vec![
                ComponentSpec::with_props(["first"]),
                ComponentSpec::with_props(["shared", "second"]),
            ],
            parent: None,
        };
        let set = PropertySet::from_spec(&spec);
        assert_eq!(set.camel(), ["first", "shared", "second", "own"]);
    }

    #[test]
    fn test_parent_chain_scanned_last() {
        let spec = ComponentSpec {
            props: vec!["own".into()],
            mixins: vec![],
            parent: Some(Box::new(ComponentSpec {
                props: vec!["inherited".into(), "own".into()],
                mixins: vec![],
                parent: Some(Box::new(ComponentSpec::with_props(["grand"]))),
            })),
        };
        let set = PropertySet::from_spec(&spec);
        assert_eq!(set.camel(), ["own", "inherited", "grand"]);
    }

    #[test]
    fn test_nested_mixins() {
        let spec = ComponentSpec {
            props: vec![],
            mixins: vec![ComponentSpec {
                props: vec!["outer".into()],
                mixins: vec![ComponentSpec::with_props(["inner"])],
                parent: None,
            }],
            parent: None,
        };
        let set = PropertySet::from_spec(&spec);
        assert_eq!(set.camel(), ["inner", "outer"]);
    }

    #[test]
    fn test_empty_definition() {
        let set = PropertySet::from_spec(&ComponentSpec::default());
        assert!(set.is_empty());
        assert!(set.camel().is_empty());
        assert!(set.hyphenated().is_empty());
    }
}
