#![cfg(target_arch = "wasm32")]
use glass_core::{dynamic_hue, PageId, DYNAMIC_HUE_VAR};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod css;
mod dom;
mod events;
mod frame;
mod motion;
mod observer;
mod pages;
mod registry;
mod state;

use constants::CONTENT_SELECTOR;
use state::{GlassState, Shared};

fn start_ambient(document: &web::Document) {
    let ctx = match frame::AmbientContext::mount(document) {
        Ok(ctx) => Rc::new(RefCell::new(ctx)),
        Err(e) => {
            log::warn!("[ambient] disabled: {e}");
            return;
        }
    };
    let frame_loop = frame::start_loop(ctx.clone());
    frame::wire_page_visibility(document, ctx, frame_loop);
}

fn build_state(document: &web::Document) -> anyhow::Result<Shared> {
    let state: Shared = Rc::new(RefCell::new(GlassState::new()));
    let observer = observer::create_observer(state.clone())?;
    let mut st = state.borrow_mut();
    st.observer = Some(observer);

    match dom::query_one(document, CONTENT_SELECTOR) {
        Some(content) => {
            let (surfaces, items) = st.register_page(PageId::ROOT, &content);
            log::info!("[nav] root page: {surfaces} surfaces, {items} items");
        }
        None => log::warn!("[nav] missing {CONTENT_SELECTOR}; navigation disabled"),
    }
    // chrome outside the content area (navbar, tab bar) stays with the root page
    if let Some(root) = document.document_element() {
        st.register_tree(PageId::ROOT, &root);
    }
    log::info!(
        "[init] {} surfaces, {} parallax items, {} visibility items, {} registered nodes",
        st.proximity.len(),
        st.parallax.len(),
        st.visibility.len(),
        st.registry.len()
    );
    drop(st);
    Ok(state)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("glass-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    dom::set_root_variable(
        DYNAMIC_HUE_VAR,
        &dynamic_hue(js_sys::Date::now()).to_string(),
    );
    start_ambient(&document);

    let state = build_state(&document)?;
    events::wire_input_handlers(events::InputWiring {
        window,
        document,
        state,
    });
    Ok(())
}
