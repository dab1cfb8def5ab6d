use crate::dom;
use crate::state::Shared;
use glass_core::OrientationSample;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Publish device tilt as two root style variables. Platforms without
/// orientation support never get the listener and keep the default tilt.
pub fn wire_orientation(window: &web::Window, state: Shared) {
    let supported = js_sys::Reflect::has(window, &JsValue::from_str("DeviceOrientationEvent"))
        .unwrap_or(false);
    if !supported {
        log::info!("[tilt] orientation unsupported");
        return;
    }
    let closure = Closure::wrap(Box::new(move |ev: web::DeviceOrientationEvent| {
        let tilt = state.borrow_mut().pointer.on_orientation(OrientationSample {
            beta: ev.beta(),
            gamma: ev.gamma(),
        });
        for (name, value) in tilt.style_variables() {
            dom::set_root_variable(name, &value);
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("deviceorientation", closure.as_ref().unchecked_ref());
    closure.forget();
}
