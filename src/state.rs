use crate::constants::{
    DEPTH_ATTR, ORIGIN_ATTR, PARALLAX_SELECTOR, SURFACE_SELECTOR, VISIBILITY_SELECTOR,
};
use crate::dom;
use crate::registry::Registry;
use fnv::FnvHashMap;
use glass_core::{
    ElementConfig, PageId, PageTransitions, ParallaxEngine, PointerTracker, ProximityEngine,
    RippleSpawner, VisibilityAnimator,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything input handlers share. Each handler borrows it for the duration
/// of one event; DOM writes that can re-enter (timers, frames) happen after
/// the borrow is released.
pub struct GlassState {
    pub pointer: PointerTracker,
    pub proximity: ProximityEngine,
    pub parallax: ParallaxEngine,
    pub visibility: VisibilityAnimator,
    pub ripples: RippleSpawner,
    pub pages: PageTransitions,
    pub registry: Registry,
    pub page_roots: FnvHashMap<PageId, web::HtmlElement>,
    pub observer: Option<web::IntersectionObserver>,
}

pub type Shared = Rc<RefCell<GlassState>>;

impl GlassState {
    pub fn new() -> Self {
        Self {
            pointer: PointerTracker::new(),
            proximity: ProximityEngine::new(),
            parallax: ParallaxEngine::new(),
            visibility: VisibilityAnimator::new(),
            ripples: RippleSpawner::new(),
            pages: PageTransitions::new(),
            registry: Registry::default(),
            page_roots: FnvHashMap::default(),
            observer: None,
        }
    }

    /// Mount `root` as the node for `page` and register what it contains.
    pub fn register_page(&mut self, page: PageId, root: &web::HtmlElement) -> (usize, usize) {
        self.page_roots.insert(page, root.clone());
        self.register_tree(page, root)
    }

    /// Register the surfaces and visibility items under `root` as belonging
    /// to `page`. Returns (surfaces, items).
    pub fn register_tree(&mut self, page: PageId, root: &web::Element) -> (usize, usize) {
        let surfaces = dom::query_all(root, SURFACE_SELECTOR);
        for el in &surfaces {
            self.register_surface(page, el);
        }
        for el in dom::query_all(root, PARALLAX_SELECTOR) {
            let id = self.registry.register(page, &el);
            self.parallax.register(id, page, depth_of(&el));
        }
        let items = dom::query_all(root, VISIBILITY_SELECTOR);
        for el in &items {
            let config = ElementConfig::from_attributes(
                el.get_attribute(ORIGIN_ATTR).as_deref(),
                el.get_attribute(DEPTH_ATTR).as_deref(),
            );
            let id = self.registry.register(page, el);
            self.visibility.register(id, page, config);
            if let Some(observer) = &self.observer {
                observer.observe(el);
            }
        }
        (surfaces.len(), items.len())
    }

    pub fn register_surface(&mut self, page: PageId, el: &web::HtmlElement) {
        let id = self.registry.register(page, el);
        self.proximity.register(id, depth_of(el));
    }

    /// Forget a page that history no longer references and detach its root.
    pub fn discard_page(&mut self, page: PageId) {
        self.visibility.unregister_page(page);
        self.parallax.unregister_page(page);
        for (id, el) in self.registry.remove_page(page) {
            self.proximity.unregister(id);
            if let Some(observer) = &self.observer {
                observer.unobserve(&el);
            }
        }
        if let Some(root) = self.page_roots.remove(&page) {
            root.remove();
        }
        log::info!("[nav] discarded {}", page.dom_id());
    }
}

fn depth_of(el: &web::Element) -> f32 {
    ElementConfig::from_attributes(None, el.get_attribute(DEPTH_ATTR).as_deref()).depth
}
