use crate::constants::{BACK_BUTTON_ID, LINK_SELECTOR, RIPPLE_CLASS, RIPPLE_SELECTOR};
use crate::css;
use crate::dom;
use crate::pages;
use crate::state::Shared;
use glam::Vec2;
use glass_core::RippleVariant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Document-level click handling in the capture phase: ripples on
/// allow-listed hosts, then in-page link interception.
pub fn wire_clicks(document: &web::Document, state: Shared) {
    let state_click = state.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
            return;
        };
        if let Some(host) = target.closest(RIPPLE_SELECTOR).ok().flatten() {
            spawn_ripple(&state_click, &host, &ev);
        }
        if let Some(link) = target.closest(LINK_SELECTOR).ok().flatten() {
            ev.prevent_default();
            if let Some(href) = link.get_attribute("href") {
                pages::navigate(&state_click, &href);
            }
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback_and_bool(
        "click",
        closure.as_ref().unchecked_ref(),
        true,
    );
    closure.forget();

    dom::add_click_listener(document, BACK_BUTTON_ID, move || pages::go_back(&state));
}

fn spawn_ripple(state: &Shared, host: &web::Element, ev: &web::MouseEvent) {
    let classes = dom::class_names(host);
    let Some(variant) = RippleVariant::for_classes(classes.iter().map(String::as_str)) else {
        return;
    };
    let Some(document) = dom::window_document() else {
        return;
    };
    let Some(host) = host.dyn_ref::<web::HtmlElement>() else {
        return;
    };
    let Some(node) = document
        .create_element("span")
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };

    let point = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
    let ripple = state
        .borrow_mut()
        .ripples
        .spawn(point, dom::rect_of(host), variant, instant::now());

    node.set_class_name(RIPPLE_CLASS);
    node.style().set_css_text(&css::ripple_css(&ripple));
    dom::set_style(host, &[("position", "relative"), ("overflow", "hidden")]);
    if host.append_child(&node).is_err() {
        state.borrow_mut().ripples.remove(ripple.id);
        return;
    }
    let end = css::scale(variant.end_scale());
    _ = dom::animate(
        &node,
        &[
            &[("transform", "scale(0)"), ("opacity", "1")],
            &[("transform", end.as_str()), ("opacity", "0")],
        ],
        ripple.duration_ms,
        "linear",
        0.0,
    );

    // removal is timer based so it happens even if the animation never runs
    let state = state.clone();
    dom::set_timeout(ripple.duration_ms, move || {
        node.remove();
        state.borrow_mut().ripples.remove(ripple.id);
    });
}
