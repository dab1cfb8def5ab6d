//! Time-sampled interpolation for hosts without a CSS transition engine.

use crate::easing::Easing;
use crate::math::Transform3d;

pub trait Lerp: Sized {
    fn lerp(&self, to: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(&self, to: &Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Transform3d {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        Transform3d {
            perspective_px: to.perspective_px.or(self.perspective_px),
            rotate_x_deg: Lerp::lerp(&self.rotate_x_deg, &to.rotate_x_deg, t),
            rotate_y_deg: Lerp::lerp(&self.rotate_y_deg, &to.rotate_y_deg, t),
            translate: self.translate.lerp(to.translate, t),
            scale: Lerp::lerp(&self.scale, &to.scale, t),
        }
    }
}

/// `from -> to` over `duration_ms`, starting at `start_ms`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl<T: Lerp + Clone> Tween<T> {
    pub fn new(from: T, to: T, start_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            easing,
        }
    }

    /// Linear progress in [0,1].
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    #[inline]
    pub fn is_finished(&self, now_ms: f64) -> bool {
        now_ms >= self.start_ms + self.duration_ms
    }

    pub fn sample(&self, now_ms: f64) -> T {
        let p = self.progress(now_ms);
        if p >= 1.0 {
            return self.to.clone();
        }
        self.from.lerp(&self.to, self.easing.apply(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn linear_tween_samples_midpoint_and_holds_end() {
        let tw = Tween::new(0.0_f32, 10.0, 100.0, 200.0, Easing::Linear);
        assert_eq!(tw.sample(50.0), 0.0);
        assert!((tw.sample(200.0) - 5.0).abs() < 1e-5);
        assert_eq!(tw.sample(300.0), 10.0);
        assert_eq!(tw.sample(1_000.0), 10.0);
        assert!(!tw.is_finished(299.0));
        assert!(tw.is_finished(300.0));
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let tw = Tween::new(1.0_f32, 0.0, 0.0, 0.0, Easing::Standard);
        assert_eq!(tw.progress(0.0), 1.0);
        assert_eq!(tw.sample(0.0), 0.0);
    }

    #[test]
    fn transforms_interpolate_componentwise() {
        let from = Transform3d::translate_scale(Vec3::new(-30.0, 0.0, -40.0), 0.9);
        let mid = Lerp::lerp(&from, &Transform3d::IDENTITY, 0.5);
        assert!(mid.translate.abs_diff_eq(Vec3::new(-15.0, 0.0, -20.0), 1e-5));
        assert!((mid.scale - 0.95).abs() < 1e-6);
    }
}
