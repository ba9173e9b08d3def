//! Bindings to the JS shim.

use js_sys::{Array, Function, Object};
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen(module = "/src/shim.js")]
extern "C" {
    /// Build the class extending `HTMLElement` whose lifecycle callbacks
    /// delegate to the closures carried by `hooks`.
    #[wasm_bindgen(js_name = makeHostClass)]
    pub fn make_host_class(hooks: &Object) -> Function;

    /// Build the Vue root options for one mount: `{el, propsData, props,
    /// computed, render}` around the extended component, with the
    /// beforeCreate trampoline handing the fresh instance back to
    /// `intercept` for emit interception.
    #[wasm_bindgen(js_name = makeRootOptions)]
    pub fn make_root_options(
        vue: &Function,
        component: &JsValue,
        camel_props: &Array,
        props_data: &Object,
        el: &Element,
        slot_nodes: &Array,
        intercept_emit: &Function,
    ) -> Object;

    /// Compose an emit function: `notify(name, args)` first, then forward
    /// to the original implementation with the arguments untouched.
    #[wasm_bindgen(js_name = composeEmit)]
    pub fn compose_emit(notify: &Function, forward: &Function) -> Function;
}
