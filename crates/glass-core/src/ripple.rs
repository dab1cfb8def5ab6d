//! Self-expiring click ripples.
//!
//! Removal is timer based: every spawned ripple is due at
//! `spawned_at + 600ms` whether or not its animation ever ran.

use crate::constants::*;
use crate::element::Rect;
use fnv::FnvHashMap;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RippleVariant {
    /// Tab-bar glass ripple: twice the host's longest side, grows to 1x.
    Glass,
    /// Button ripple: the host's longest side, grows to 4x.
    Generic,
}

/// Class names that qualify an element as a ripple host, in match priority.
pub const RIPPLE_ROLES: [(&str, RippleVariant); 3] = [
    ("tab-item", RippleVariant::Glass),
    ("action-btn", RippleVariant::Generic),
    ("touch-feedback", RippleVariant::Generic),
];

impl RippleVariant {
    pub fn for_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        let classes: Vec<&str> = classes.into_iter().collect();
        RIPPLE_ROLES
            .iter()
            .find(|(role, _)| classes.contains(role))
            .map(|(_, v)| *v)
    }

    #[inline]
    pub fn size_factor(self) -> f32 {
        match self {
            RippleVariant::Glass => RIPPLE_GLASS_SIZE_FACTOR,
            RippleVariant::Generic => RIPPLE_GENERIC_SIZE_FACTOR,
        }
    }

    #[inline]
    pub fn end_scale(self) -> f32 {
        match self {
            RippleVariant::Glass => RIPPLE_GLASS_END_SCALE,
            RippleVariant::Generic => RIPPLE_GENERIC_END_SCALE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RippleId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub id: RippleId,
    pub variant: RippleVariant,
    /// Interaction point relative to the host's box.
    pub origin: Vec2,
    pub size: f32,
    pub spawned_at_ms: f64,
    pub duration_ms: f64,
}

impl Ripple {
    /// Top-left of the ripple box so it is centered on `origin`.
    #[inline]
    pub fn top_left(&self) -> Vec2 {
        self.origin - Vec2::splat(self.size / 2.0)
    }

    #[inline]
    pub fn expires_at_ms(&self) -> f64 {
        self.spawned_at_ms + self.duration_ms
    }

    /// (scale, opacity) at `now_ms` on the linear grow-and-fade.
    pub fn frame_at(&self, now_ms: f64) -> (f32, f32) {
        let p = if self.duration_ms > 0.0 {
            ((now_ms - self.spawned_at_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
        } else {
            1.0
        };
        (self.variant.end_scale() * p, 1.0 - p)
    }
}

#[derive(Debug)]
pub struct RippleSpawner {
    live: FnvHashMap<RippleId, Ripple>,
    next_id: u64,
    duration_ms: f64,
}

impl Default for RippleSpawner {
    fn default() -> Self {
        Self::new()
    }
}

impl RippleSpawner {
    pub fn new() -> Self {
        Self::with_duration(RIPPLE_DURATION_MS)
    }

    pub fn with_duration(duration_ms: f64) -> Self {
        Self {
            live: FnvHashMap::default(),
            next_id: 0,
            duration_ms,
        }
    }

    #[inline]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Create a ripple for a click at viewport point `point` on a host whose
    /// bounding box is `host`.
    pub fn spawn(&mut self, point: Vec2, host: Rect, variant: RippleVariant, now_ms: f64) -> Ripple {
        let id = RippleId(self.next_id);
        self.next_id += 1;
        let ripple = Ripple {
            id,
            variant,
            origin: host.to_local(point),
            size: host.max_side() * variant.size_factor(),
            spawned_at_ms: now_ms,
            duration_ms: self.duration_ms,
        };
        self.live.insert(id, ripple);
        ripple
    }

    /// Remove a ripple whose cleanup timer fired.
    pub fn remove(&mut self, id: RippleId) -> Option<Ripple> {
        self.live.remove(&id)
    }

    /// Remove and return every ripple due at or before `now_ms`.
    pub fn expire(&mut self, now_ms: f64) -> Vec<RippleId> {
        let mut due: Vec<RippleId> = self
            .live
            .values()
            .filter(|r| r.expires_at_ms() <= now_ms)
            .map(|r| r.id)
            .collect();
        due.sort();
        for id in &due {
            self.live.remove(id);
        }
        due
    }

    #[inline]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn get(&self, id: RippleId) -> Option<&Ripple> {
        self.live.get(&id)
    }
}
