use crate::dom;
use crate::motion;
use crate::state::Shared;
use glass_core::{ElementId, ParallaxPose, SurfaceStyle};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Recompute every surface's distortion and every parallax item on each
/// pointer move. No throttling: the update runs at the event's natural rate.
pub fn wire_pointermove(document: &web::Document, state: Shared) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (surfaces, drifts): (
            Vec<(web::HtmlElement, SurfaceStyle)>,
            Vec<(web::HtmlElement, ParallaxPose)>,
        ) = {
            let mut st = state.borrow_mut();
            let Some(pointer) = st
                .pointer
                .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32)
            else {
                return;
            };
            let viewport = dom::viewport();
            let st = &mut *st;
            let registry = &st.registry;
            let surfaces = st
                .proximity
                .update(&pointer, viewport, |id: ElementId| {
                    registry.get(id).map(|el| dom::rect_of(el).center())
                })
                .into_iter()
                .filter_map(|(id, style)| registry.get(id).map(|el| (el.clone(), style)))
                .collect();
            let drifts = st
                .parallax
                .on_pointer(&pointer, viewport)
                .into_iter()
                .filter_map(|(id, pose)| registry.get(id).map(|el| (el.clone(), pose)))
                .collect();
            (surfaces, drifts)
        };
        for (el, style) in &surfaces {
            motion::apply_surface_style(el, style);
        }
        for (el, pose) in &drifts {
            motion::apply_parallax(el, pose);
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}
