//! Registration: from a component definition to a defined custom element.

use js_sys::{Array, Function, Object, Reflect};
use socle_armature::{BridgeOptions, BridgeRegistry, PropertySet, Registration};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, ShadowRootInit, ShadowRootMode};

use crate::hooks::LifecycleHooks;
use crate::{definition, mount, shim};

/// Everything the lifecycle closures of one registered tag share.
pub(crate) struct BridgedComponent {
    pub vue: Function,
    pub component: JsValue,
    pub props: Rc<PropertySet>,
    pub options: BridgeOptions,
    pub hooks: LifecycleHooks,
    /// `options.shadow` gated on platform support.
    pub shadow: bool,
}

/// Register `component` under `tag`.
///
/// Parses the recognized options, extracts the [`PropertySet`], records
/// the tag in the bridge registry and defines the native element with
/// `observedAttributes` set to the hyphenated prop list. Re-registering
/// an already-registered tag warns and returns without touching the
/// native registry.
pub fn register_component(
    registry: &mut BridgeRegistry,
    vue: &Function,
    tag: &str,
    component: &JsValue,
    options: &JsValue,
) -> Result<(), JsValue> {
    let bridge_options: BridgeOptions =
        serde_wasm_bindgen::from_value(options.clone()).unwrap_or_default();
    let hooks = LifecycleHooks::from_options(options);

    let spec = definition::component_spec_from_js(component);
    let property_set = PropertySet::from_spec(&spec);

    let outcome = registry
        .register(tag, property_set.clone(), bridge_options.clone())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    if outcome == Registration::AlreadyRegistered {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "socle: <{tag}> is already registered, skipping"
        )));
        return Ok(());
    }

    let ctx = Rc::new(BridgedComponent {
        vue: vue.clone(),
        component: component.clone(),
        props: Rc::new(property_set),
        options: bridge_options.clone(),
        hooks,
        shadow: bridge_options.shadow && platform_supports_shadow(),
    });

    let class = shim::make_host_class(&host_class_hooks(&ctx)?);
    mount::window()?.custom_elements().define(tag, &class)?;
    Ok(())
}

/// The callbacks object handed to the shim's class factory.
fn host_class_hooks(ctx: &Rc<BridgedComponent>) -> Result<Object, JsValue> {
    let hooks = Object::new();

    let observed = Array::new();
    for name in ctx.props.hyphenated() {
        observed.push(&JsValue::from_str(name));
    }
    Reflect::set(
        &hooks,
        &JsValue::from_str("observedAttributes"),
        &observed,
    )?;

    let construct_ctx = Rc::clone(ctx);
    let construct = Closure::<dyn FnMut(HtmlElement)>::new(move |element: HtmlElement| {
        if construct_ctx.shadow && element.shadow_root().is_none() {
            let init = ShadowRootInit::new(ShadowRootMode::Open);
            if let Err(err) = element.attach_shadow(&init) {
                wasm_bindgen::throw_val(err);
            }
        }
        construct_ctx.hooks.invoke_constructor(&element);
    });

    let connected_ctx = Rc::clone(ctx);
    let connected = Closure::<dyn FnMut(HtmlElement)>::new(move |element: HtmlElement| {
        mount::on_connected(&connected_ctx, &element);
    });

    let disconnected_ctx = Rc::clone(ctx);
    let disconnected = Closure::<dyn FnMut(HtmlElement)>::new(move |element: HtmlElement| {
        mount::on_disconnected(&disconnected_ctx, &element);
    });

    let attribute_ctx = Rc::clone(ctx);
    let attribute_changed = Closure::<dyn FnMut(HtmlElement, String, JsValue, JsValue)>::new(
        move |element: HtmlElement, name: String, old_value: JsValue, new_value: JsValue| {
            mount::on_attribute_changed(&attribute_ctx, &element, &name, &old_value, &new_value);
        },
    );

    Reflect::set(
        &hooks,
        &JsValue::from_str("construct"),
        construct.as_ref().unchecked_ref(),
    )?;
    Reflect::set(
        &hooks,
        &JsValue::from_str("connected"),
        connected.as_ref().unchecked_ref(),
    )?;
    Reflect::set(
        &hooks,
        &JsValue::from_str("disconnected"),
        disconnected.as_ref().unchecked_ref(),
    )?;
    Reflect::set(
        &hooks,
        &JsValue::from_str("attributeChanged"),
        attribute_changed.as_ref().unchecked_ref(),
    )?;

    // One set of callbacks per registered tag, alive for the page's
    // lifetime, exactly like the class they are attached to.
    construct.forget();
    connected.forget();
    disconnected.forget();
    attribute_changed.forget();

    Ok(hooks)
}

/// Shadow DOM opt-in is gated on the platform actually supporting it.
fn platform_supports_shadow() -> bool {
    let global = js_sys::global();
    Reflect::get(&global, &JsValue::from_str("HTMLElement"))
        .ok()
        .and_then(|ctor| Reflect::get(&ctor, &JsValue::from_str("prototype")).ok())
        .map(|proto| Reflect::has(&proto, &JsValue::from_str("attachShadow")).unwrap_or(false))
        .unwrap_or(false)
}
