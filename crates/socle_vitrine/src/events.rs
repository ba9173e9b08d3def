//! Native event surface.
//!
//! Every internal `$emit` on the Vue instance also dispatches a
//! same-named `CustomEvent` on the host element, so plain DOM listeners
//! observe component events without knowing Vue exists. Interception is
//! composition, not prototype surgery: a notify function runs first, then
//! the original bound `$emit` receives the untouched arguments.

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit, HtmlElement};

use crate::shim;

/// Dispatch a non-bubbling, non-cancelable `CustomEvent` on the host.
pub fn custom_emit(element: &HtmlElement, name: &str, detail: &JsValue) -> Result<(), JsValue> {
    let init = CustomEventInit::new();
    init.set_bubbles(false);
    init.set_cancelable(false);
    init.set_detail(detail);

    let event = CustomEvent::new_with_event_init_dict(name, &init)?;
    element.dispatch_event(&event)?;
    Ok(())
}

/// Replace the instance's `$emit` with notify-then-forward.
///
/// The event payload carried on `detail` is the single emit argument when
/// there is exactly one, otherwise the argument array.
pub fn intercept_emit(element: &HtmlElement, instance: &JsValue) -> Result<(), JsValue> {
    let original: Function =
        Reflect::get(instance, &JsValue::from_str("$emit"))?.dyn_into()?;
    let forward = original.bind(instance);

    let host = element.clone();
    let notify = Closure::<dyn FnMut(JsValue, Array)>::new(move |name: JsValue, args: Array| {
        let name = name.as_string().unwrap_or_default();
        let detail = if args.length() == 1 {
            args.get(0)
        } else {
            args.clone().into()
        };
        if let Err(err) = custom_emit(&host, &name, &detail) {
            wasm_bindgen::throw_val(err);
        }
    });

    let composed = shim::compose_emit(notify.as_ref().unchecked_ref(), &forward);
    // The notify closure lives as long as the instance's $emit does.
    notify.forget();

    Reflect::set(instance, &JsValue::from_str("$emit"), &composed)?;
    Ok(())
}
