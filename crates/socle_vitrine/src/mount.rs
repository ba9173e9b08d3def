//! The instance lifecycle controller.
//!
//! Drives the pure decisions from `socle_armature::lifecycle` against the
//! real DOM: constructs the Vue instance on a first real attach, skips
//! reconstruction on transient re-attaches, and schedules the deferred
//! forced destroy on detach. Construction failures propagate uncaught to
//! the native lifecycle invoker; nothing here retries.

use js_sys::{Array, Function, Reflect};
use socle_armature::{decide_connect, decide_deadline, ConnectAction, DeadlineAction};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Node, Window};

use crate::host::{HostHandle, READY_EVENT};
use crate::register::BridgedComponent;
use crate::{binding, definition, events, shim};

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))
}

fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document available"))
}

/// Native `connectedCallback`.
pub(crate) fn on_connected(ctx: &Rc<BridgedComponent>, element: &HtmlElement) {
    let host = HostHandle::new(element.clone());

    if let ConnectAction::Mount = decide_connect(host.snapshot()) {
        if let Err(err) = mount(ctx, &host) {
            wasm_bindgen::throw_val(err);
        }
    }

    ctx.hooks.invoke_connected(element);
    host.set_pending_detach(false);
}

/// Native `disconnectedCallback`: mark the detach and schedule the
/// deadline check. The timer is never cancelled; the flags decide when it
/// fires.
pub(crate) fn on_disconnected(ctx: &Rc<BridgedComponent>, element: &HtmlElement) {
    let host = HostHandle::new(element.clone());
    host.set_pending_detach(true);

    ctx.hooks.invoke_disconnected(element);

    if let Err(err) = schedule_destroy_deadline(&host, ctx.options.destroy_timeout) {
        wasm_bindgen::throw_val(err);
    }
}

/// Native `attributeChangedCallback`: the user hook runs on every
/// invocation; the value only propagates once an instance exists and the
/// attribute was not removed.
pub(crate) fn on_attribute_changed(
    ctx: &Rc<BridgedComponent>,
    element: &HtmlElement,
    name: &str,
    old_value: &JsValue,
    new_value: &JsValue,
) {
    ctx.hooks
        .invoke_attribute_changed(element, name, old_value, new_value);

    let host = HostHandle::new(element.clone());
    let (Some(instance), Some(value)) = (host.instance(), new_value.as_string()) else {
        return;
    };

    let camel = socle_carton::camelize(name);
    let coerced = binding::attr_value_to_js(&socle_carton::AttrValue::coerce(&value));
    if let Err(err) = Reflect::set(&instance, &JsValue::from_str(&camel), &coerced) {
        wasm_bindgen::throw_val(err);
    }
}

/// First real attach: build propsData, snapshot the original children for
/// slot projection, replace the host's markup with a single mount point,
/// construct the Vue instance with emit interception, and mark the host
/// ready.
fn mount(ctx: &Rc<BridgedComponent>, host: &HostHandle) -> Result<(), JsValue> {
    let element = host.element();
    let component_options = definition::options_of(&ctx.component);
    let props_data = binding::props_data(element, &component_options, &ctx.props)?;

    // Snapshot before the subtree is replaced.
    let slot_nodes = Array::new();
    let children = element.child_nodes();
    for i in 0..children.length() {
        if let Some(node) = children.get(i) {
            slot_nodes.push(&node.clone_node_with_deep(true)?.into());
        }
    }

    let mount_point = document()?.create_element("div")?;
    let content_root: Node = match element.shadow_root() {
        Some(root) if ctx.shadow => root.into(),
        _ => element.clone().into(),
    };
    content_root.set_text_content(None);
    content_root.append_child(&mount_point)?;

    binding::install_accessors(host, &ctx.props)?;

    let camel_props = Array::new();
    for name in ctx.props.camel() {
        camel_props.push(&JsValue::from_str(name));
    }

    let intercept_element = element.clone();
    let intercept = Closure::<dyn FnMut(JsValue)>::new(move |instance: JsValue| {
        if let Err(err) = events::intercept_emit(&intercept_element, &instance) {
            wasm_bindgen::throw_val(err);
        }
    });

    let root_options = shim::make_root_options(
        &ctx.vue,
        &ctx.component,
        &camel_props,
        &props_data,
        &mount_point,
        &slot_nodes,
        intercept.as_ref().unchecked_ref(),
    );
    // beforeCreate fires inside the construct call; the trampoline is
    // handed to the JS GC with the wrapped component.
    intercept.forget();

    let instance = Reflect::construct(&ctx.vue, &Array::of1(&root_options.into()))?;
    host.set_instance(&instance);

    if ctx.shadow {
        if let (Some(css), Some(root)) = (&ctx.options.shadow_css, element.shadow_root()) {
            let style = document()?.create_element("style")?;
            style.set_text_content(Some(css));
            root.append_child(&style)?;
        }
    }

    host.mark_ready();
    events::custom_emit(element, READY_EVENT, &JsValue::NULL)?;
    Ok(())
}

fn schedule_destroy_deadline(host: &HostHandle, timeout_ms: u32) -> Result<(), JsValue> {
    let element = host.element().clone();
    let deadline = Closure::once_into_js(move || {
        let host = HostHandle::new(element);
        if let DeadlineAction::Destroy = decide_deadline(host.snapshot()) {
            if let Err(err) = destroy_instance(&host) {
                wasm_bindgen::throw_val(err);
            }
        }
    });

    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        deadline.unchecked_ref(),
        timeout_ms as i32,
    )?;
    Ok(())
}

/// Forced destroy: skip transitions, release the host's reference.
fn destroy_instance(host: &HostHandle) -> Result<(), JsValue> {
    let Some(instance) = host.instance() else {
        return Ok(());
    };

    let destroy: Function = Reflect::get(&instance, &JsValue::from_str("$destroy"))?.dyn_into()?;
    destroy.call1(&instance, &JsValue::TRUE)?;

    host.clear_instance();
    host.set_pending_detach(false);
    Ok(())
}
