//! Cubic-bezier timing curves.
//!
//! The web host hands these to CSS as `cubic-bezier(..)` strings; native
//! hosts evaluate them directly through [`Easing::apply`].

use crate::constants::{OVERSHOOT_DEPTH, STANDARD_DEPTH};

/// A CSS-style cubic bezier with fixed endpoints (0,0) and (1,1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[inline]
    fn curve(p1: f32, p2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    }

    #[inline]
    fn curve_slope(p1: f32, p2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
    }

    /// Solve for the curve parameter whose x equals `x`.
    fn solve_t(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..8 {
            let err = Self::curve(self.x1, self.x2, t) - x;
            if err.abs() < 1e-6 {
                return t;
            }
            let slope = Self::curve_slope(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= err / slope;
        }
        // Newton stalled; x(t) is monotonic for x1, x2 in [0,1] so bisect.
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..32 {
            let v = Self::curve(self.x1, self.x2, t);
            if (v - x).abs() < 1e-6 {
                break;
            }
            if v < x {
                lo = t;
            } else {
                hi = t;
            }
            t = 0.5 * (lo + hi);
        }
        t
    }

    /// Map linear progress `x` in [0,1] to eased progress. Overshooting
    /// curves may leave [0,1] in the middle of the range.
    pub fn sample(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        Self::curve(self.y1, self.y2, self.solve_t(x))
    }
}

/// Named timing curves used by the motion system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Easing {
    Linear,
    /// Back-out overshoot for the deepest elements.
    Overshoot,
    /// Material-style deceleration; also drives page transitions.
    #[default]
    Standard,
    EaseInOut,
    EaseOut,
    EaseIn,
    /// Anticipate-and-overshoot curve for the settle bounce.
    Elastic,
}

impl Easing {
    pub fn curve(self) -> Option<CubicBezier> {
        match self {
            Easing::Linear => None,
            Easing::Overshoot => Some(CubicBezier::new(0.34, 1.56, 0.64, 1.0)),
            Easing::Standard => Some(CubicBezier::new(0.4, 0.0, 0.2, 1.0)),
            Easing::EaseInOut => Some(CubicBezier::new(0.42, 0.0, 0.58, 1.0)),
            Easing::EaseOut => Some(CubicBezier::new(0.0, 0.0, 0.58, 1.0)),
            Easing::EaseIn => Some(CubicBezier::new(0.42, 0.0, 1.0, 1.0)),
            Easing::Elastic => Some(CubicBezier::new(0.68, -0.55, 0.265, 1.55)),
        }
    }

    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self.curve() {
            Some(c) => c.sample(t),
            None => t.clamp(0.0, 1.0),
        }
    }

    /// Deeper elements get livelier curves.
    pub fn for_depth(depth: f32) -> Self {
        if depth > OVERSHOOT_DEPTH {
            Easing::Overshoot
        } else if depth > STANDARD_DEPTH {
            Easing::Standard
        } else {
            Easing::EaseInOut
        }
    }
}
