//! Perpetually drifting background glass layers.
//!
//! Each layer low-pass filters its gradient anchor toward a target that is
//! re-rolled with a small probability per tick, and re-rolls its hue every
//! tick. The animator is a periodic task with an explicit start/stop
//! lifecycle; the host stops it while the page is hidden.

use crate::constants::*;
use crate::math::approach;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub struct AmbientParams {
    pub layer_count: usize,
    pub smoothing: f32,
    pub retarget_probability: f32,
    pub alpha: f32,
}

impl Default for AmbientParams {
    fn default() -> Self {
        Self {
            layer_count: AMBIENT_LAYER_COUNT,
            smoothing: AMBIENT_SMOOTHING,
            retarget_probability: AMBIENT_RETARGET_PROBABILITY,
            alpha: AMBIENT_ALPHA,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AmbientLayer {
    pub index: usize,
    /// Gradient anchor, percent of viewport.
    pub current: Vec2,
    pub target: Vec2,
    pub hue: f32,
    pub alpha: f32,
    pub blur_px: f32,
    pub opacity: f32,
    pub z_index: i32,
}

impl AmbientLayer {
    pub fn new(index: usize, target: Vec2, alpha: f32) -> Self {
        Self {
            index,
            current: Vec2::ZERO,
            target,
            hue: 0.0,
            alpha,
            blur_px: AMBIENT_BLUR_BASE_PX + AMBIENT_BLUR_STEP_PX * index as f32,
            opacity: AMBIENT_OPACITY_BASE + AMBIENT_OPACITY_STEP * index as f32,
            z_index: -(index as i32 + 1),
        }
    }

    #[inline]
    pub fn step(&mut self, smoothing: f32) {
        self.current = approach(self.current, self.target, smoothing);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

pub struct AmbientAnimator<R: Rng = StdRng> {
    layers: SmallVec<[AmbientLayer; 4]>,
    params: AmbientParams,
    rng: R,
    state: LoopState,
    ticks: u64,
}

impl AmbientAnimator<StdRng> {
    pub fn with_seed(params: AmbientParams, seed: u64) -> Self {
        Self::new(params, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> AmbientAnimator<R> {
    /// Layers are created once here and live as long as the animator.
    pub fn new(params: AmbientParams, mut rng: R) -> Self {
        let layers = (0..params.layer_count)
            .map(|i| {
                let mut layer = AmbientLayer::new(i, random_anchor(&mut rng), params.alpha);
                layer.hue = random_hue(&mut rng);
                layer
            })
            .collect();
        Self {
            layers,
            params,
            rng,
            state: LoopState::Running,
            ticks: 0,
        }
    }

    #[inline]
    pub fn layers(&self) -> &[AmbientLayer] {
        &self.layers
    }

    #[inline]
    pub fn params(&self) -> &AmbientParams {
        &self.params
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Returns true if the loop was stopped before.
    pub fn start(&mut self) -> bool {
        let was_stopped = self.state == LoopState::Stopped;
        if was_stopped {
            log::info!("[ambient] loop started after {} ticks", self.ticks);
        }
        self.state = LoopState::Running;
        was_stopped
    }

    /// Returns true if the loop was running before.
    pub fn stop(&mut self) -> bool {
        let was_running = self.state == LoopState::Running;
        if was_running {
            log::info!("[ambient] loop stopped after {} ticks", self.ticks);
        }
        self.state = LoopState::Stopped;
        was_running
    }

    /// Advance every layer by one display tick. Does nothing while stopped.
    pub fn tick(&mut self) -> bool {
        if self.state == LoopState::Stopped {
            return false;
        }
        let smoothing = self.params.smoothing;
        let p = self.params.retarget_probability;
        for layer in self.layers.iter_mut() {
            layer.step(smoothing);
            layer.hue = random_hue(&mut self.rng);
            if self.rng.gen::<f32>() < p {
                layer.target = random_anchor(&mut self.rng);
            }
        }
        self.ticks += 1;
        true
    }
}

#[inline]
fn random_anchor<R: Rng>(rng: &mut R) -> Vec2 {
    Vec2::new(rng.gen_range(0.0..=100.0), rng.gen_range(0.0..=100.0))
}

#[inline]
fn random_hue<R: Rng>(rng: &mut R) -> f32 {
    rng.gen_range(0..360) as f32
}
