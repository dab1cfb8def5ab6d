use crate::dom;
use crate::motion;
use crate::state::Shared;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Passive scroll listener feeding the parallax drift. Bursts of scroll
/// events collapse into one update on the next animation frame.
pub fn wire_scroll(window: &web::Window, state: Shared) {
    let pending = Rc::new(Cell::new(false));
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        if pending.replace(true) {
            return;
        }
        let state = state.clone();
        let pending = pending.clone();
        dom::next_frame(move || {
            pending.set(false);
            let drifts: Vec<_> = {
                let mut st = state.borrow_mut();
                let st = &mut *st;
                let registry = &st.registry;
                st.parallax
                    .on_scroll(dom::scroll_y())
                    .into_iter()
                    .filter_map(|(id, pose)| registry.get(id).map(|el| (el.clone(), pose)))
                    .collect()
            };
            for (el, pose) in &drifts {
                motion::apply_parallax(el, pose);
            }
        });
    }) as Box<dyn FnMut(_)>);
    let options = dom::js_object(&[("passive", JsValue::TRUE)]);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        closure.as_ref().unchecked_ref(),
        options.unchecked_ref::<web::AddEventListenerOptions>(),
    );
    closure.forget();
}
