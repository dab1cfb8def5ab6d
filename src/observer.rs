use crate::dom;
use crate::motion;
use crate::state::Shared;
use glass_core::constants::{VISIBILITY_ROOT_MARGIN_PX, VISIBILITY_THRESHOLD};
use glass_core::VisibilityCommand;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Intersection observer feeding the visibility animator. Callbacks arrive
/// asynchronously to the frame loop; each signal overwrites the element's
/// in-flight target.
pub fn create_observer(state: Shared) -> anyhow::Result<web::IntersectionObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            let commands: Vec<(web::HtmlElement, VisibilityCommand)> = {
                let mut st = state.borrow_mut();
                entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
                    .filter_map(|entry| {
                        let target = entry.target();
                        let id = st.registry.id_of(&target)?;
                        let el = st.registry.get(id)?.clone();
                        let cmd = st.visibility.on_intersection(id, entry.is_intersecting())?;
                        Some((el, cmd))
                    })
                    .collect()
            };
            for (el, cmd) in commands {
                motion::apply_command(el, cmd);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = dom::js_object(&[
        (
            "rootMargin",
            JsValue::from_str(&format!("{VISIBILITY_ROOT_MARGIN_PX}px")),
        ),
        ("threshold", JsValue::from_f64(VISIBILITY_THRESHOLD)),
    ]);
    let observer = web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options.unchecked_into::<web::IntersectionObserverInit>(),
    )
    .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();
    Ok(observer)
}
