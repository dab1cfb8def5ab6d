use crate::constants::ID_ATTR;
use fnv::FnvHashMap;
use glass_core::{ElementId, PageId};
use web_sys as web;

struct Entry {
    page: PageId,
    el: web::HtmlElement,
}

/// Maps the core's element handles to live DOM nodes.
///
/// The handle is mirrored into a data attribute so event targets can be
/// resolved back to it. Cloned subtrees carry stale attributes, which are
/// replaced with a fresh handle on registration.
#[derive(Default)]
pub struct Registry {
    next: u32,
    elements: FnvHashMap<ElementId, Entry>,
}

impl Registry {
    pub fn register(&mut self, page: PageId, el: &web::HtmlElement) -> ElementId {
        if let Some(id) = self.id_of(el) {
            if self.get(id) == Some(el) {
                return id;
            }
        }
        let id = ElementId(self.next);
        self.next += 1;
        _ = el.set_attribute(ID_ATTR, &id.0.to_string());
        self.elements.insert(
            id,
            Entry {
                page,
                el: el.clone(),
            },
        );
        id
    }

    pub fn id_of(&self, el: &web::Element) -> Option<ElementId> {
        let id = ElementId(el.get_attribute(ID_ATTR)?.parse().ok()?);
        self.elements.contains_key(&id).then_some(id)
    }

    #[inline]
    pub fn get(&self, id: ElementId) -> Option<&web::HtmlElement> {
        self.elements.get(&id).map(|e| &e.el)
    }

    /// Drop every element registered under `page`.
    pub fn remove_page(&mut self, page: PageId) -> Vec<(ElementId, web::HtmlElement)> {
        let ids: Vec<ElementId> = self
            .elements
            .iter()
            .filter(|(_, e)| e.page == page)
            .map(|(id, _)| *id)
            .collect();
        ids.into_iter()
            .filter_map(|id| self.elements.remove(&id).map(|e| (id, e.el)))
            .collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }
}
