//! Property binding layer.
//!
//! One accessor per declared prop is installed on the host element.
//! Reads go straight to the live Vue instance (`undefined` before one
//! exists). Writes of objects and functions go straight to the instance
//! too, since they cannot round-trip through a string attribute; every
//! other write is serialized onto the hyphenated attribute and flows back
//! into the instance through `attributeChangedCallback`.

use js_sys::{Object, Reflect, JSON};
use socle_armature::PropertySet;
use socle_carton::AttrValue;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use crate::host::HostHandle;

/// Install the accessor pair for every prop in the set.
pub fn install_accessors(host: &HostHandle, props: &Rc<PropertySet>) -> Result<(), JsValue> {
    for index in 0..props.len() {
        define_accessor(host, props, index)?;
    }
    Ok(())
}

fn define_accessor(host: &HostHandle, props: &Rc<PropertySet>, index: usize) -> Result<(), JsValue> {
    let camel = props.camel()[index].clone();
    let hyphenated = props.hyphenated()[index].clone();

    let get_element = host.element().clone();
    let get_name = camel.clone();
    let getter = Closure::<dyn Fn() -> JsValue>::new(move || {
        let handle = HostHandle::new(get_element.clone());
        match handle.instance() {
            Some(instance) => Reflect::get(&instance, &JsValue::from_str(&get_name))
                .unwrap_or(JsValue::UNDEFINED),
            None => JsValue::UNDEFINED,
        }
    });

    let set_element = host.element().clone();
    let set_name = camel.clone();
    let setter = Closure::<dyn Fn(JsValue)>::new(move |value: JsValue| {
        let handle = HostHandle::new(set_element.clone());
        let rich = value.is_object() || value.is_function();
        match handle.instance() {
            Some(instance) if rich => {
                if let Err(err) = Reflect::set(&instance, &JsValue::from_str(&set_name), &value) {
                    wasm_bindgen::throw_val(err);
                }
            }
            _ => {
                if let Err(err) = set_element.set_attribute(&hyphenated, &serialize_attr(&value)) {
                    wasm_bindgen::throw_val(err);
                }
            }
        }
    });

    let descriptor = Object::new();
    Reflect::set(
        &descriptor,
        &JsValue::from_str("get"),
        getter.as_ref().unchecked_ref(),
    )?;
    Reflect::set(
        &descriptor,
        &JsValue::from_str("set"),
        setter.as_ref().unchecked_ref(),
    )?;
    // Remounting after a confirmed destroy redefines the accessor.
    Reflect::set(
        &descriptor,
        &JsValue::from_str("configurable"),
        &JsValue::TRUE,
    )?;

    Object::<JsValue>::define_property(
        host.element().unchecked_ref(),
        &JsValue::from_str(&camel),
        &descriptor,
    );

    // The accessors live as long as the element.
    getter.forget();
    setter.forget();
    Ok(())
}

/// Best-effort attribute serialization of a written value.
///
/// Strings pass through verbatim (coercion happens on the way back in);
/// booleans and numbers use their coerced attribute form; anything else
/// that reaches this path is stringified as JSON.
pub fn serialize_attr(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(b) = value.as_bool() {
        return AttrValue::Bool(b).to_string();
    }
    if let Some(n) = value.as_f64() {
        return AttrValue::Number(n).to_string();
    }
    JSON::stringify(value)
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or_default()
}

/// Build the constructor `propsData` for one mount: the definition's own
/// `propsData` (if any) overlaid with every present, non-empty attribute,
/// coerced and keyed by camel name.
pub fn props_data(
    element: &HtmlElement,
    component_options: &JsValue,
    props: &PropertySet,
) -> Result<Object, JsValue> {
    let data = Object::new();

    if component_options.is_object() {
        if let Ok(base) = Reflect::get(component_options, &JsValue::from_str("propsData")) {
            if base.is_object() {
                Object::assign(&data, base.unchecked_ref());
            }
        }
    }

    for (camel, hyphenated) in props.pairs() {
        if let Some(raw) = element.get_attribute(hyphenated) {
            if raw.is_empty() {
                continue;
            }
            Reflect::set(
                &data,
                &JsValue::from_str(camel),
                &attr_value_to_js(&AttrValue::coerce(&raw)),
            )?;
        }
    }

    Ok(data)
}

/// A coerced value as the JS value handed to Vue.
pub fn attr_value_to_js(value: &AttrValue) -> JsValue {
    match value {
        AttrValue::Bool(b) => JsValue::from_bool(*b),
        AttrValue::Number(n) => JsValue::from_f64(*n),
        AttrValue::Text(s) => JsValue::from_str(s),
    }
}
