use crate::math::tilt_from_orientation;
use glam::Vec2;

pub const TILT_X_VAR: &str = "--tilt-x";
pub const TILT_Y_VAR: &str = "--tilt-y";
pub const DYNAMIC_HUE_VAR: &str = "--dynamic-hue";

/// Device tilt in degrees, each axis within ±10.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub x_deg: f32,
    pub y_deg: f32,
}

impl Tilt {
    /// The two global style variables the tilt is published as.
    pub fn style_variables(&self) -> [(&'static str, String); 2] {
        [
            (TILT_X_VAR, format!("{}deg", self.x_deg)),
            (TILT_Y_VAR, format!("{}deg", self.y_deg)),
        ]
    }
}

/// Latest pointer position (viewport px) and device tilt. No history.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub tilt: Tilt,
}

/// Raw orientation payload; platforms may omit either angle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrientationSample {
    pub beta: Option<f64>,
    pub gamma: Option<f64>,
}

/// Sole writer of [`PointerState`].
#[derive(Debug, Default)]
pub struct PointerTracker {
    state: PointerState,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> &PointerState {
        &self.state
    }

    /// Overwrite the pointer position. Returns the updated state so the caller
    /// can recompute proximity, or `None` when the event carried garbage.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> Option<PointerState> {
        if !(x.is_finite() && y.is_finite()) {
            return None;
        }
        self.state.position = Vec2::new(x, y);
        Some(self.state)
    }

    pub fn on_orientation(&mut self, sample: OrientationSample) -> Tilt {
        let beta = sample.beta.unwrap_or(0.0) as f32;
        let gamma = sample.gamma.unwrap_or(0.0) as f32;
        self.state.tilt = tilt_from_orientation(beta, gamma);
        self.state.tilt
    }
}
