//! Vitrine - The display case for Socle.
//!
//! This crate is the DOM-facing half of the bridge: it registers a Vue
//! component definition as a native custom element and keeps the host
//! element and the Vue instance in sync for the element's lifetime.
//!
//! ```js
//! import init, { install } from 'socle_vitrine';
//!
//! await init();
//! const bridge = install(Vue);
//! bridge.register('widget-vue', WidgetComponent, { shadow: true });
//! ```
//!
//! The host element then behaves like any other tag: declared props are
//! readable/writable as element properties, attribute changes flow into
//! the instance, internal `$emit` calls surface as native `CustomEvent`s,
//! and a detached element keeps its instance alive for a grace period in
//! case it is re-attached.

pub mod binding;
pub mod definition;
pub mod events;
pub mod host;
pub mod hooks;
mod mount;
mod register;
mod shim;

pub use host::{HostHandle, CLOAK_ATTR, READY_ATTR, READY_EVENT};
pub use hooks::LifecycleHooks;
pub use register::register_component;

use js_sys::Function;
use socle_armature::BridgeRegistry;
use wasm_bindgen::prelude::*;

/// One bridge installation: a Vue constructor plus the registration state
/// threaded through every `register` call.
#[wasm_bindgen]
pub struct VueBridge {
    vue: Function,
    registry: BridgeRegistry,
}

#[wasm_bindgen]
impl VueBridge {
    #[wasm_bindgen(constructor)]
    pub fn new(vue: Function) -> VueBridge {
        VueBridge {
            vue,
            registry: BridgeRegistry::new(),
        }
    }

    /// Register `component` as the custom element `tag`.
    ///
    /// `options` recognizes `shadow`, `shadowCss`, `destroyTimeout` and
    /// the four lifecycle hooks. Registering the same tag twice is a
    /// warned no-op.
    #[wasm_bindgen]
    pub fn register(
        &mut self,
        tag: &str,
        component: JsValue,
        options: JsValue,
    ) -> Result<(), JsValue> {
        register_component(&mut self.registry, &self.vue, tag, &component, &options)
    }

    /// Whether `tag` has been registered through this bridge.
    #[wasm_bindgen(js_name = "isRegistered")]
    pub fn is_registered(&self, tag: &str) -> bool {
        self.registry.is_registered(tag)
    }
}

/// Install the bridge for a Vue constructor.
#[wasm_bindgen]
pub fn install(vue: Function) -> VueBridge {
    VueBridge::new(vue)
}
