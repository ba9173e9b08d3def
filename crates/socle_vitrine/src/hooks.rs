//! User-supplied lifecycle hooks.
//!
//! The options object may carry a callback per native transition. Each is
//! type-checked once at registration; a missing or non-function entry is
//! simply absent. Hooks run synchronously alongside every native
//! transition, whether or not the bridge's own logic ran, with the host
//! element as `this`. An error raised by a hook propagates to the native
//! lifecycle invoker.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

/// The recognized lifecycle hook entries.
#[derive(Default, Clone)]
pub struct LifecycleHooks {
    pub constructor_callback: Option<Function>,
    pub connected_callback: Option<Function>,
    pub disconnected_callback: Option<Function>,
    pub attribute_changed_callback: Option<Function>,
}

impl LifecycleHooks {
    /// Read the hook entries from a registration options object.
    pub fn from_options(options: &JsValue) -> LifecycleHooks {
        LifecycleHooks {
            constructor_callback: hook(options, "constructorCallback"),
            connected_callback: hook(options, "connectedCallback"),
            disconnected_callback: hook(options, "disconnectedCallback"),
            attribute_changed_callback: hook(options, "attributeChangedCallback"),
        }
    }

    pub fn invoke_constructor(&self, element: &HtmlElement) {
        invoke0(&self.constructor_callback, element);
    }

    pub fn invoke_connected(&self, element: &HtmlElement) {
        invoke0(&self.connected_callback, element);
    }

    pub fn invoke_disconnected(&self, element: &HtmlElement) {
        invoke0(&self.disconnected_callback, element);
    }

    pub fn invoke_attribute_changed(
        &self,
        element: &HtmlElement,
        name: &str,
        old_value: &JsValue,
        new_value: &JsValue,
    ) {
        if let Some(hook) = &self.attribute_changed_callback {
            if let Err(err) = hook.call3(
                element.as_ref(),
                &JsValue::from_str(name),
                old_value,
                new_value,
            ) {
                wasm_bindgen::throw_val(err);
            }
        }
    }
}

fn hook(options: &JsValue, name: &str) -> Option<Function> {
    if !options.is_object() {
        return None;
    }
    Reflect::get(options, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn invoke0(hook: &Option<Function>, element: &HtmlElement) {
    if let Some(hook) = hook {
        if let Err(err) = hook.call0(element.as_ref()) {
            wasm_bindgen::throw_val(err);
        }
    }
}
