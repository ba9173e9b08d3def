//! Composition model of a component definition.
//!
//! Vue definitions declare props in several shapes (array or map) and
//! compose further definitions through mixins and `extend` chains. Rather
//! than walking any inheritance mechanism, the bridge normalizes whatever
//! it is handed into this explicit model once, at registration time.

use socle_carton::CompactString;

/// A normalized component definition: the declared prop names plus the
/// definitions it composes.
///
/// Prop names may be declared in either camelCase or hyphenated form;
/// normalization happens during extraction, not here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentSpec {
    /// Props declared directly on this definition, in declaration order.
    pub props: Vec<CompactString>,
    /// Mixed-in definitions, in declaration order. Scanned before `props`.
    pub mixins: Vec<ComponentSpec>,
    /// The definition this one extends, scanned after `props`.
    pub parent: Option<Box<ComponentSpec>>,
}

impl ComponentSpec {
    /// A definition declaring only its own props.
    pub fn with_props<I, S>(props: I) -> ComponentSpec
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ComponentSpec {
            props: props
                .into_iter()
                .map(|p| CompactString::new(p.as_ref()))
                .collect(),
            ..ComponentSpec::default()
        }
    }
}
