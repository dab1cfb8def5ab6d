use crate::constants::{AMBIENT_CONTAINER_SELECTOR, AMBIENT_LAYER_CLASS};
use crate::css;
use crate::dom;
use glass_core::{AmbientAnimator, AmbientParams};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Ambient animator plus the layer nodes it paints.
pub struct AmbientContext {
    pub animator: AmbientAnimator<StdRng>,
    pub layers: Vec<web::HtmlElement>,
}

impl AmbientContext {
    /// Create one fixed layer per animator layer under the ambient container.
    pub fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let container = dom::query_one(document, AMBIENT_CONTAINER_SELECTOR)
            .ok_or_else(|| anyhow::anyhow!("missing {AMBIENT_CONTAINER_SELECTOR}"))?;
        let animator = AmbientAnimator::new(AmbientParams::default(), StdRng::from_entropy());
        let mut layers = Vec::with_capacity(animator.layers().len());
        for layer in animator.layers() {
            let el = document
                .create_element("div")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?
                .dyn_into::<web::HtmlElement>()
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            el.set_class_name(&format!("{AMBIENT_LAYER_CLASS} layer-{}", layer.index));
            el.style().set_css_text(&css::ambient_layer_css(layer));
            container
                .append_child(&el)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            layers.push(el);
        }
        log::info!("[ambient] mounted {} layers", layers.len());
        Ok(Self { animator, layers })
    }

    /// Advance one tick and repaint. Returns false once the loop is stopped.
    pub fn frame(&mut self) -> bool {
        if !self.animator.tick() {
            return false;
        }
        for (layer, el) in self.animator.layers().iter().zip(&self.layers) {
            _ = el
                .style()
                .set_property("background", &css::ambient_background(layer));
        }
        true
    }
}

/// requestAnimationFrame driver for the ambient context. The tick closure is
/// created once; stopping the animator simply ends the request chain and
/// `resume` restarts it.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    scheduled: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn resume(&self) {
        request(&self.tick, &self.scheduled);
    }
}

fn request(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>, scheduled: &Cell<bool>) {
    if scheduled.get() {
        return;
    }
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if w.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
            scheduled.set(true);
        }
    }
}

pub fn start_loop(ctx: Rc<RefCell<AmbientContext>>) -> Rc<FrameLoop> {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let scheduled = Rc::new(Cell::new(false));
    let tick_clone = tick.clone();
    let scheduled_tick = scheduled.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        scheduled_tick.set(false);
        if ctx.borrow_mut().frame() {
            request(&tick_clone, &scheduled_tick);
        }
    }) as Box<dyn FnMut()>));
    let frame_loop = Rc::new(FrameLoop { tick, scheduled });
    frame_loop.resume();
    frame_loop
}

/// Stop the ambient loop while the document is hidden.
pub fn wire_page_visibility(
    document: &web::Document,
    ctx: Rc<RefCell<AmbientContext>>,
    frame_loop: Rc<FrameLoop>,
) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        if doc.hidden() {
            ctx.borrow_mut().animator.stop();
        } else if ctx.borrow_mut().animator.start() {
            frame_loop.resume();
        }
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}
