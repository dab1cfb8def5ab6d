//! Stateless transform math.
//!
//! Every function here maps pointer deltas, depth weights and intensities to
//! transform or style parameters. Nothing here reads a clock or an RNG.

use crate::config::OriginSide;
use crate::constants::*;
use crate::element::Viewport;
use crate::pointer::Tilt;
use glam::{Vec2, Vec3};

/// A composed 3D transform in the order the renderer applies it:
/// perspective, rotateX, rotateY, translate, scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform3d {
    pub perspective_px: Option<f32>,
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub translate: Vec3,
    pub scale: f32,
}

impl Transform3d {
    pub const IDENTITY: Self = Self {
        perspective_px: None,
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        translate: Vec3::ZERO,
        scale: 1.0,
    };

    pub fn translate_scale(translate: Vec3, scale: f32) -> Self {
        Self {
            translate,
            scale,
            ..Self::IDENTITY
        }
    }

    pub fn is_identity(&self) -> bool {
        self.rotate_x_deg == 0.0
            && self.rotate_y_deg == 0.0
            && self.translate == Vec3::ZERO
            && self.scale == 1.0
    }
}

impl Default for Transform3d {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Radial specular highlight drawn over a distorted surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    /// Gradient anchor in percent of the surface box.
    pub anchor_pct: Vec2,
    pub inner_alpha: f32,
    pub outer_alpha: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Distortion {
    pub intensity: f32,
    pub transform: Transform3d,
    pub highlight: Highlight,
}

/// Proximity strength for a pointer `distance` px from a surface center.
///
/// Returns `1 - d/300` inside the radius and exactly 0 at or beyond it.
#[inline]
pub fn proximity_intensity(distance: f32) -> f32 {
    if !distance.is_finite() || distance >= PROXIMITY_RADIUS_PX {
        return 0.0;
    }
    1.0 - distance.max(0.0) / PROXIMITY_RADIUS_PX
}

/// Pointer-relative displacement before rotation, in the same units the
/// rotation factors expect.
#[inline]
pub fn distortion_move(delta: Vec2, viewport: Viewport, intensity: f32, depth: f32) -> Vec2 {
    delta / viewport.safe_size() * DISTORTION_MOVE_SCALE * intensity * depth
}

pub fn distort(delta: Vec2, viewport: Viewport, intensity: f32, depth: f32) -> Distortion {
    let mv = distortion_move(delta, viewport, intensity, depth);
    let transform = Transform3d {
        perspective_px: Some(DISTORTION_PERSPECTIVE_PX),
        rotate_x_deg: mv.y * DISTORTION_ROTATE_PER_MOVE_DEG,
        rotate_y_deg: -mv.x * DISTORTION_ROTATE_PER_MOVE_DEG,
        translate: Vec3::new(0.0, 0.0, intensity * DISTORTION_LIFT_PX * depth),
        scale: 1.0,
    };
    let highlight = Highlight {
        anchor_pct: Vec2::splat(HIGHLIGHT_CENTER_PCT) + mv * HIGHLIGHT_OFFSET_PER_MOVE,
        inner_alpha: HIGHLIGHT_INNER_ALPHA_BASE + HIGHLIGHT_INNER_ALPHA_SPAN * intensity,
        outer_alpha: HIGHLIGHT_OUTER_ALPHA_BASE + HIGHLIGHT_OUTER_ALPHA_SPAN * intensity,
    };
    Distortion {
        intensity,
        transform,
        highlight,
    }
}

/// Pointer-driven parallax of one item.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Parallax {
    pub shift: Vec2,
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
}

/// Shift grows linearly with the pointer's distance from the viewport center
/// and the item's depth; the tilt follows the shift.
pub fn pointer_parallax(pointer: Vec2, viewport: Viewport, depth: f32) -> Parallax {
    let shift = (pointer / viewport.safe_size() - Vec2::splat(0.5)) * PARALLAX_MOVE_PX * depth;
    Parallax {
        shift,
        rotate_x_deg: shift.y * PARALLAX_ROTATE_PER_MOVE_DEG,
        rotate_y_deg: shift.x * PARALLAX_ROTATE_PER_MOVE_DEG,
    }
}

/// Vertical drift of a parallax item for the page's scroll offset.
#[inline]
pub fn scroll_parallax(scroll_y: f64, depth: f32) -> f32 {
    scroll_y as f32 * depth * SCROLL_PARALLAX_FACTOR
}

/// Map device orientation angles to tilt degrees, clamped to ±10.
pub fn tilt_from_orientation(beta_deg: f32, gamma_deg: f32) -> Tilt {
    let map = |a: f32| {
        if a.is_finite() {
            (a / ORIENTATION_RANGE_DEG * TILT_MAX_DEG).clamp(-TILT_MAX_DEG, TILT_MAX_DEG)
        } else {
            0.0
        }
    };
    Tilt {
        x_deg: map(gamma_deg),
        y_deg: map(beta_deg),
    }
}

/// Offset an element starts from (and exits to) for its origin side.
pub fn entrance_offset(origin: OriginSide, depth: f32) -> Transform3d {
    let d = ENTRANCE_OFFSET_PX;
    let (x, y) = match origin {
        OriginSide::Top => (0.0, -d),
        OriginSide::Bottom => (0.0, d),
        OriginSide::Left => (-d, 0.0),
        OriginSide::Right => (d, 0.0),
        OriginSide::Center => (0.0, 0.0),
    };
    Transform3d::translate_scale(
        Vec3::new(x, y, -depth * ENTRANCE_Z_PER_DEPTH_PX),
        1.0 - depth * ENTRANCE_SCALE_PER_DEPTH,
    )
}

/// One first-order low-pass step of `current` toward `target`.
#[inline]
pub fn approach(current: Vec2, target: Vec2, smoothing: f32) -> Vec2 {
    current + (target - current) * smoothing
}

/// Slowly rotating page hue in degrees.
#[inline]
pub fn dynamic_hue(now_ms: f64) -> f64 {
    (now_ms / DYNAMIC_HUE_PERIOD_MS).rem_euclid(360.0)
}
