//! Walk a JS component definition into a [`ComponentSpec`].
//!
//! Definitions arrive in two shapes: a Vue constructor (its options live
//! under `.options`, its parent under `.super`) or a plain options object.
//! Declared props may be an array of names or a map keyed by name; any
//! other shape is ignored, not an error.

use js_sys::{Array, Object, Reflect};
use socle_armature::ComponentSpec;
use socle_carton::CompactString;
use wasm_bindgen::{JsCast, JsValue};

/// Guard against accidental cycles in the `super` chain.
const MAX_SUPER_DEPTH: usize = 32;

/// Normalize a component definition (constructor or options object).
pub fn component_spec_from_js(component: &JsValue) -> ComponentSpec {
    build(component, MAX_SUPER_DEPTH)
}

/// The options object of a definition: `.options` for a constructor, the
/// value itself for a plain object.
pub fn options_of(component: &JsValue) -> JsValue {
    if component.is_function() {
        Reflect::get(component, &JsValue::from_str("options")).unwrap_or(JsValue::UNDEFINED)
    } else {
        component.clone()
    }
}

fn build(component: &JsValue, depth: usize) -> ComponentSpec {
    if depth == 0 {
        return ComponentSpec::default();
    }

    let options = options_of(component);
    if !options.is_object() {
        return ComponentSpec::default();
    }

    let props = declared_props(&options);

    let mixins = Reflect::get(&options, &JsValue::from_str("mixins"))
        .ok()
        .filter(|v| Array::is_array(v))
        .map(|v| {
            Array::from(&v)
                .iter()
                .map(|mixin| build(&mixin, depth - 1))
                .collect()
        })
        .unwrap_or_default();

    let parent = Reflect::get(component, &JsValue::from_str("super"))
        .ok()
        .filter(|v| v.is_function() || (v.is_object() && !v.is_null()))
        .map(|v| Box::new(build(&v, depth - 1)));

    ComponentSpec {
        props,
        mixins,
        parent,
    }
}

fn declared_props(options: &JsValue) -> Vec<CompactString> {
    let Ok(props) = Reflect::get(options, &JsValue::from_str("props")) else {
        return Vec::new();
    };

    if Array::is_array(&props) {
        Array::from(&props)
            .iter()
            .filter_map(|entry| entry.as_string())
            .map(CompactString::from)
            .collect()
    } else if props.is_object() {
        Object::keys::<JsValue>(props.unchecked_ref())
            .iter()
            .filter_map(|key| key.as_string())
            .map(CompactString::from)
            .collect()
    } else {
        Vec::new()
    }
}
