use glass_core::{Rect, Viewport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] #{element_id} not found");
    }
}

pub fn viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::new(1.0, 1.0);
    };
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0) as f32;
    Viewport::new(dim(w.inner_width()), dim(w.inner_height()))
}

#[inline]
pub fn rect_of(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
}

pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn query_one(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn class_names(el: &web::Element) -> Vec<String> {
    let list = el.class_list();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

pub fn set_style(el: &web::HtmlElement, props: &[(&str, &str)]) {
    let style = el.style();
    for (k, v) in props {
        _ = style.set_property(k, v);
    }
}

/// Write a custom property on the document element.
pub fn set_root_variable(name: &str, value: &str) {
    let root = window_document()
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    if let Some(root) = root {
        _ = root.style().set_property(name, value);
    }
}

pub fn scroll_y() -> f64 {
    web::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn scroll_to(y: f64) {
    if let Some(w) = web::window() {
        w.scroll_to_with_x_and_y(0.0, y);
    }
}

/// Fire `f` once after `delay_ms`. Not cancellable.
pub fn set_timeout(delay_ms: f64, f: impl FnOnce() + 'static) {
    let Some(w) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref(),
        delay_ms.round().max(0.0) as i32,
    );
}

pub fn next_frame(f: impl FnOnce() + 'static) {
    let Some(w) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    _ = w.request_animation_frame(cb.unchecked_ref());
}

/// Plain JS object from string keys.
pub fn js_object(entries: &[(&str, JsValue)]) -> js_sys::Object {
    let obj = js_sys::Object::new();
    for (k, v) in entries {
        _ = js_sys::Reflect::set(&obj, &JsValue::from_str(k), v);
    }
    obj
}

/// Run a Web Animations keyframe animation on `el`.
pub fn animate(
    el: &web::Element,
    frames: &[&[(&str, &str)]],
    duration_ms: f64,
    easing: &str,
    delay_ms: f64,
) -> web::Animation {
    let keyframes = js_sys::Array::new();
    for frame in frames {
        let entries: Vec<(&str, JsValue)> =
            frame.iter().map(|(k, v)| (*k, JsValue::from_str(v))).collect();
        keyframes.push(&js_object(&entries));
    }
    let options = js_object(&[
        ("duration", JsValue::from_f64(duration_ms)),
        ("delay", JsValue::from_f64(delay_ms)),
        ("easing", JsValue::from_str(easing)),
    ]);
    let keyframes: &js_sys::Object = keyframes.as_ref();
    el.animate_with_keyframe_animation_options(
        Some(keyframes),
        &options.unchecked_into::<web::KeyframeAnimationOptions>(),
    )
}
