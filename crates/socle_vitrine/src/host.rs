//! Typed handle over a host element's bridge state.
//!
//! The bridge keeps its per-element state (the Vue instance and the
//! pending-detach flag) in expando properties on the element itself, the
//! way the wider custom-element ecosystem does, so the state survives the
//! element moving through the document and is visible from devtools. This
//! wrapper is the only place those keys appear.

use js_sys::Reflect;
use socle_armature::HostSnapshot;
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

const INSTANCE_KEY: &str = "__socle_instance__";
const DETACHED_KEY: &str = "__socle_detached__";

/// Marker attribute removed once the component has mounted.
pub const CLOAK_ATTR: &str = "vce-cloak";
/// Marker attribute set once the component has mounted.
pub const READY_ATTR: &str = "vce-ready";
/// Event emitted on the host once the component has mounted.
pub const READY_EVENT: &str = "vce-ready";

/// A host element plus accessors for the bridge's expando state.
#[derive(Clone)]
pub struct HostHandle {
    element: HtmlElement,
}

impl HostHandle {
    pub fn new(element: HtmlElement) -> HostHandle {
        HostHandle { element }
    }

    #[inline]
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    /// The Vue instance currently bound to this host, if any.
    pub fn instance(&self) -> Option<JsValue> {
        Reflect::get(self.element.as_ref(), &JsValue::from_str(INSTANCE_KEY))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
    }

    pub fn set_instance(&self, instance: &JsValue) {
        let _ = Reflect::set(
            self.element.as_ref(),
            &JsValue::from_str(INSTANCE_KEY),
            instance,
        );
    }

    pub fn clear_instance(&self) {
        let _ = Reflect::set(
            self.element.as_ref(),
            &JsValue::from_str(INSTANCE_KEY),
            &JsValue::UNDEFINED,
        );
    }

    /// Whether a detach is in flight (no re-attach seen yet).
    pub fn pending_detach(&self) -> bool {
        Reflect::get(self.element.as_ref(), &JsValue::from_str(DETACHED_KEY))
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }

    pub fn set_pending_detach(&self, pending: bool) {
        let _ = Reflect::set(
            self.element.as_ref(),
            &JsValue::from_str(DETACHED_KEY),
            &JsValue::from_bool(pending),
        );
    }

    /// The flags as they are right now, for a lifecycle decision.
    pub fn snapshot(&self) -> HostSnapshot {
        HostSnapshot {
            has_instance: self.instance().is_some(),
            pending_detach: self.pending_detach(),
        }
    }

    /// Swap the cloak marker for the ready marker.
    pub fn mark_ready(&self) {
        let _ = self.element.remove_attribute(CLOAK_ATTR);
        let _ = self.element.set_attribute(READY_ATTR, "");
    }
}
