//! Pointer-proximity distortion for registered glass surfaces.
//!
//! Surfaces are not owned here: only their id and depth weight are kept, and
//! the host supplies each surface's current center when asked to update.
//! Every update recomputes every surface from scratch; no per-surface state
//! survives between updates.

use crate::element::{ElementId, Viewport};
use crate::math::{distort, proximity_intensity, Distortion};
use crate::pointer::PointerState;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceStyle {
    /// Flat: no transform, default translucent background.
    Neutral,
    Distorted(Distortion),
}

impl SurfaceStyle {
    pub fn intensity(&self) -> f32 {
        match self {
            SurfaceStyle::Neutral => 0.0,
            SurfaceStyle::Distorted(d) => d.intensity,
        }
    }
}

/// Style for a single surface centered at `center` with weight `depth`.
pub fn surface_style(pointer: Vec2, center: Vec2, viewport: Viewport, depth: f32) -> SurfaceStyle {
    let delta = pointer - center;
    let intensity = proximity_intensity(delta.length());
    if intensity > 0.0 {
        SurfaceStyle::Distorted(distort(delta, viewport, intensity, depth))
    } else {
        SurfaceStyle::Neutral
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub id: ElementId,
    pub depth: f32,
}

#[derive(Debug, Default)]
pub struct ProximityEngine {
    surfaces: Vec<Surface>,
}

impl ProximityEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or re-weight) a surface.
    pub fn register(&mut self, id: ElementId, depth: f32) {
        match self.surfaces.iter_mut().find(|s| s.id == id) {
            Some(s) => s.depth = depth,
            None => self.surfaces.push(Surface { id, depth }),
        }
    }

    pub fn unregister(&mut self, id: ElementId) -> bool {
        let before = self.surfaces.len();
        self.surfaces.retain(|s| s.id != id);
        self.surfaces.len() != before
    }

    #[inline]
    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Recompute every registered surface. `center_of` returns the surface's
    /// current layout center, or `None` if it is no longer laid out, in which
    /// case the surface is skipped for this update.
    pub fn update<F>(
        &self,
        pointer: &PointerState,
        viewport: Viewport,
        mut center_of: F,
    ) -> Vec<(ElementId, SurfaceStyle)>
    where
        F: FnMut(ElementId) -> Option<Vec2>,
    {
        self.surfaces
            .iter()
            .filter_map(|s| {
                let center = center_of(s.id)?;
                Some((s.id, surface_style(pointer.position, center, viewport, s.depth)))
            })
            .collect()
    }
}
