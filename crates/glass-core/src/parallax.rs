//! Depth-weighted drift of parallax items.
//!
//! Pointer moves shift and tilt each item; page scroll adds a vertical drift.
//! Both inputs are kept per item and composed into one pose, so whichever
//! signal arrives last re-renders the other's contribution unchanged.

use crate::element::{ElementId, Viewport};
use crate::math::{pointer_parallax, scroll_parallax, Parallax};
use crate::pointer::PointerState;
use crate::transition::PageId;
use glam::Vec3;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxPose {
    pub pointer: Parallax,
    pub scroll_px: f32,
}

impl ParallaxPose {
    pub fn translate(&self) -> Vec3 {
        Vec3::new(
            self.pointer.shift.x,
            self.pointer.shift.y + self.scroll_px,
            0.0,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ParallaxItem {
    id: ElementId,
    page: PageId,
    depth: f32,
    pose: ParallaxPose,
}

#[derive(Debug, Default)]
pub struct ParallaxEngine {
    items: Vec<ParallaxItem>,
}

impl ParallaxEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or re-weight) an item.
    pub fn register(&mut self, id: ElementId, page: PageId, depth: f32) {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(i) => i.depth = depth,
            None => self.items.push(ParallaxItem {
                id,
                page,
                depth,
                pose: ParallaxPose::default(),
            }),
        }
    }

    /// Forget every item on `page`; returns how many were dropped.
    pub fn unregister_page(&mut self, page: PageId) -> usize {
        let before = self.items.len();
        self.items.retain(|i| i.page != page);
        before - self.items.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn pose(&self, id: ElementId) -> Option<ParallaxPose> {
        self.items.iter().find(|i| i.id == id).map(|i| i.pose)
    }

    /// Recompute every item for a pointer move. Always active.
    pub fn on_pointer(
        &mut self,
        pointer: &PointerState,
        viewport: Viewport,
    ) -> Vec<(ElementId, ParallaxPose)> {
        self.items
            .iter_mut()
            .map(|i| {
                i.pose.pointer = pointer_parallax(pointer.position, viewport, i.depth);
                (i.id, i.pose)
            })
            .collect()
    }

    /// Recompute every item for a new scroll offset.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Vec<(ElementId, ParallaxPose)> {
        self.items
            .iter_mut()
            .map(|i| {
                i.pose.scroll_px = scroll_parallax(scroll_y, i.depth);
                (i.id, i.pose)
            })
            .collect()
    }
}
