//! Headless driver for glass-core.
//!
//! Runs every component on a simulated 60 Hz clock against a scripted input
//! trace. Timers go through a [`TimerQueue`] and page poses through
//! [`Tween`]s, standing in for the browser's setTimeout and CSS transitions.

use glam::Vec2;
use glass_core::*;
use rand::prelude::*;
use std::collections::VecDeque;

const FRAME_MS: f64 = 1000.0 / 60.0;
const DEFAULT_SECONDS: f64 = 4.0;
const SEED: u64 = 42;

const RIPPLE_BURST_EVERY_MS: f64 = 250.0;
const RIPPLE_BURST_UNTIL_MS: f64 = 1000.0;
const RIPPLE_BURST_SIZE: usize = 3;
const FLICKER_EVERY_MS: f64 = 200.0;
const ORIENTATION_EVERY_MS: f64 = 500.0;
const NAVIGATE_AT_MS: f64 = 1000.0;
const DUPLICATE_NAVIGATE_AT_MS: f64 = 1100.0;
const BACK_AT_MS: f64 = 2500.0;
const EXTRA_BACK_AT_MS: [f64; 2] = [2550.0, 3200.0];
const HIDDEN_FROM_MS: f64 = 3000.0;
const HIDDEN_UNTIL_MS: f64 = 3500.0;
const ITEMS_PER_PAGE: u32 = 6;
const SCROLL_SWING_PX: f64 = 480.0;
const SCROLL_PERIOD_MS: f64 = 1600.0;

enum Timer {
    RemoveRipple(RippleId),
    CompleteTransition,
    StartEntrance(Entrance),
}

struct Scene {
    viewport: Viewport,
    surfaces: Vec<(ElementId, Rect)>,
    parallax: Vec<(ElementId, f32)>,
    ripple_host: Rect,
}

impl Scene {
    fn new() -> Self {
        let surfaces = (0..4)
            .map(|i| {
                let rect = Rect::new(80.0 + 280.0 * i as f32, 260.0, 220.0, 160.0);
                (ElementId(10 + i), rect)
            })
            .collect();
        Self {
            viewport: Viewport::new(1200.0, 800.0),
            surfaces,
            parallax: vec![(ElementId(20), 0.4), (ElementId(21), 0.9)],
            ripple_host: Rect::new(40.0, 700.0, 120.0, 48.0),
        }
    }

    fn center_of(&self, id: ElementId) -> Option<Vec2> {
        self.surfaces
            .iter()
            .find(|(s, _)| *s == id)
            .map(|(_, r)| r.center())
    }
}

/// Spawn times of every ripple, oldest first. A ripple still live one frame
/// after its deadline means a removal timer went missing.
#[derive(Default)]
struct RippleDeadlines {
    spawned_at: VecDeque<f64>,
    spawned: usize,
    overdue: usize,
}

impl RippleDeadlines {
    fn record(&mut self, at_ms: f64) {
        self.spawned_at.push_back(at_ms);
        self.spawned += 1;
    }

    /// Live ripples beyond those not yet past their deadline.
    fn late(&mut self, now_ms: f64, duration_ms: f64, live: usize) -> usize {
        while let Some(&at) = self.spawned_at.front() {
            if at + duration_ms + FRAME_MS >= now_ms {
                break;
            }
            self.spawned_at.pop_front();
            self.overdue += 1;
        }
        live.saturating_sub(self.spawned - self.overdue)
    }
}

#[derive(Default)]
struct Stats {
    frames: u64,
    distorted_peak: usize,
    intensity_peak: f32,
    ripples_spawned: usize,
    ripples_removed: usize,
    late_ripples: usize,
    parallax_peak_px: f32,
    scroll_drift_peak_px: f32,
    ignored_signals: usize,
    entrances: usize,
    exits: usize,
    settles: usize,
    replays: usize,
    dropped_requests: usize,
}

struct Sim {
    now_ms: f64,
    scene: Scene,
    rng: StdRng,
    pointer: PointerTracker,
    proximity: ProximityEngine,
    parallax: ParallaxEngine,
    ambient: AmbientAnimator,
    visibility: VisibilityAnimator,
    ripples: RippleSpawner,
    deadlines: RippleDeadlines,
    pages: PageTransitions,
    timers: TimerQueue<Timer>,
    page_tweens: Option<(Tween<PagePose>, Tween<PagePose>)>,
    stats: Stats,
}

impl Sim {
    fn new() -> Self {
        let scene = Scene::new();
        let mut proximity = ProximityEngine::new();
        for (i, (id, _)) in scene.surfaces.iter().enumerate() {
            proximity.register(*id, 0.3 + 0.2 * i as f32);
        }
        let mut parallax = ParallaxEngine::new();
        for (id, depth) in &scene.parallax {
            parallax.register(*id, PageId::ROOT, *depth);
        }
        let mut sim = Self {
            now_ms: 0.0,
            scene,
            rng: StdRng::seed_from_u64(SEED),
            pointer: PointerTracker::new(),
            proximity,
            parallax,
            ambient: AmbientAnimator::with_seed(AmbientParams::default(), SEED),
            visibility: VisibilityAnimator::new(),
            ripples: RippleSpawner::new(),
            deadlines: RippleDeadlines::default(),
            pages: PageTransitions::new(),
            timers: TimerQueue::new(),
            page_tweens: None,
            stats: Stats::default(),
        };
        sim.mount_items(PageId::ROOT);
        sim
    }

    /// Register the scripted entrance items of `page`, cycling through every
    /// origin side and a spread of depths.
    fn mount_items(&mut self, page: PageId) {
        const ORIGINS: [&str; 5] = ["top", "bottom", "left", "right", "center"];
        const DEPTHS: [&str; 6] = ["0.9", "0.6", "0.2", "1", "0.45", "deep"];
        for i in 0..ITEMS_PER_PAGE {
            let n = i as usize;
            let config =
                ElementConfig::from_attributes(Some(ORIGINS[n % ORIGINS.len()]), Some(DEPTHS[n]));
            self.visibility.register(item_id(page, i), page, config);
        }
    }

    fn crossed(&self, at_ms: f64) -> bool {
        self.now_ms - FRAME_MS < at_ms && self.now_ms >= at_ms
    }

    fn crossed_period(&self, period_ms: f64) -> bool {
        let prev = ((self.now_ms - FRAME_MS) / period_ms).floor();
        let cur = (self.now_ms / period_ms).floor();
        self.now_ms > 0.0 && cur > prev
    }

    fn frame(&mut self) {
        self.stats.frames += 1;
        self.fire_timers();
        self.pointer_sweep();
        self.scroll();
        if self.crossed_period(ORIENTATION_EVERY_MS) {
            self.orientation();
        }
        if self.now_ms <= RIPPLE_BURST_UNTIL_MS && self.crossed_period(RIPPLE_BURST_EVERY_MS) {
            self.ripple_burst();
        }
        if self.crossed_period(FLICKER_EVERY_MS) {
            self.flicker();
        }
        self.script_navigation();
        if self.crossed(HIDDEN_FROM_MS) {
            self.ambient.stop();
        }
        if self.crossed(HIDDEN_UNTIL_MS) {
            self.ambient.start();
        }
        self.ambient.tick();
        self.check_ripple_deadlines();
    }

    fn fire_timers(&mut self) {
        for (due, timer) in self.timers.drain_due(self.now_ms) {
            match timer {
                Timer::RemoveRipple(id) => {
                    if self.ripples.remove(id).is_some() {
                        self.stats.ripples_removed += 1;
                    }
                }
                Timer::CompleteTransition => self.complete_transition(),
                Timer::StartEntrance(e) => {
                    log::debug!("[visibility] {:?} enters at {:.0}ms", e.id, due);
                    self.stats.entrances += 1;
                    if e.settle.is_some() {
                        self.stats.settles += 1;
                    }
                }
            }
        }
    }

    fn check_ripple_deadlines(&mut self) {
        let late = self.deadlines.late(
            self.now_ms,
            self.ripples.duration_ms(),
            self.ripples.live_count(),
        );
        if late > self.stats.late_ripples {
            log::warn!("[ripple] {late} ripples outlived their deadline");
            self.stats.late_ripples = late;
        }
    }

    fn pointer_sweep(&mut self) {
        // a slow left-to-right pass with some vertical wobble, repeating every 2s
        let t = (self.now_ms % 2000.0) / 2000.0;
        let x = 40.0 + t * 1120.0;
        let y = 340.0 + 60.0 * (self.now_ms / 300.0).sin();
        let Some(state) = self.pointer.on_pointer_move(x as f32, y as f32) else {
            return;
        };
        let scene = &self.scene;
        let styles = self
            .proximity
            .update(&state, scene.viewport, |id| scene.center_of(id));
        let distorted: Vec<f32> = styles
            .iter()
            .map(|(_, s)| s.intensity())
            .filter(|i| *i > 0.0)
            .collect();
        self.stats.distorted_peak = self.stats.distorted_peak.max(distorted.len());
        for i in distorted {
            self.stats.intensity_peak = self.stats.intensity_peak.max(i);
        }
        for (_, pose) in self.parallax.on_pointer(&state, scene.viewport) {
            let shift = pose.pointer.shift.length();
            self.stats.parallax_peak_px = self.stats.parallax_peak_px.max(shift);
        }
    }

    fn scroll(&mut self) {
        let phase = self.now_ms / SCROLL_PERIOD_MS * std::f64::consts::PI;
        let scroll_y = SCROLL_SWING_PX * phase.sin().abs();
        for (_, pose) in self.parallax.on_scroll(scroll_y) {
            let drift = pose.scroll_px;
            self.stats.scroll_drift_peak_px = self.stats.scroll_drift_peak_px.max(drift);
        }
    }

    fn orientation(&mut self) {
        let beta = self.rng.gen_range(-120.0..120.0);
        let gamma = if self.rng.gen_bool(0.2) {
            None
        } else {
            Some(self.rng.gen_range(-90.0..90.0))
        };
        let tilt = self.pointer.on_orientation(OrientationSample {
            beta: Some(beta),
            gamma,
        });
        for (name, value) in tilt.style_variables() {
            log::debug!("[tilt] {name}: {value}");
        }
    }

    fn ripple_burst(&mut self) {
        let host = self.scene.ripple_host;
        for _ in 0..RIPPLE_BURST_SIZE {
            let point = Vec2::new(
                host.left + self.rng.gen_range(0.0..host.width),
                host.top + self.rng.gen_range(0.0..host.height),
            );
            let variant = if self.rng.gen_bool(0.5) {
                RippleVariant::Glass
            } else {
                RippleVariant::Generic
            };
            let r = self.ripples.spawn(point, host, variant, self.now_ms);
            self.timers.schedule(r.expires_at_ms(), Timer::RemoveRipple(r.id));
            self.deadlines.record(self.now_ms);
            self.stats.ripples_spawned += 1;
        }
        log::debug!("[ripple] burst, {} live", self.ripples.live_count());
    }

    fn flicker(&mut self) {
        let page = self.pages.current();
        let ids: Vec<ElementId> = self.visibility.items_on(page).map(|i| i.id).collect();
        for id in ids {
            let visible = self.rng.gen_bool(0.6);
            match self.visibility.on_intersection(id, visible) {
                Some(VisibilityCommand::Enter(e)) => {
                    self.timers
                        .schedule(self.now_ms + e.delay_ms, Timer::StartEntrance(e));
                }
                Some(VisibilityCommand::Exit(_)) => self.stats.exits += 1,
                None => self.stats.ignored_signals += 1,
            }
        }
    }

    fn script_navigation(&mut self) {
        if self.crossed(NAVIGATE_AT_MS) {
            self.navigate("#detail", 240.0);
        }
        if self.crossed(DUPLICATE_NAVIGATE_AT_MS) {
            self.navigate("#detail", 0.0);
        }
        if self.crossed(BACK_AT_MS) {
            self.go_back();
        }
        for at in EXTRA_BACK_AT_MS {
            if self.crossed(at) {
                self.go_back();
            }
        }
    }

    fn navigate(&mut self, target: &str, scroll_y: f64) {
        match self.pages.navigate(target, scroll_y) {
            Some(t) => {
                self.visibility.suspend_page(t.incoming);
                self.mount_items(t.incoming);
                self.begin(t);
            }
            None => self.stats.dropped_requests += 1,
        }
    }

    fn go_back(&mut self) {
        match self.pages.go_back() {
            Some(t) => self.begin(t),
            None => self.stats.dropped_requests += 1,
        }
    }

    fn begin(&mut self, t: PageTransition) {
        log::info!(
            "[nav] {:?} {:?} -> {:?}, scroll to {}",
            t.direction,
            t.outgoing,
            t.incoming,
            t.restore_scroll_y
        );
        self.timers
            .schedule(self.now_ms + t.duration_ms, Timer::CompleteTransition);
        self.page_tweens = Some((t.incoming_tween(self.now_ms), t.outgoing_tween(self.now_ms)));
    }

    fn complete_transition(&mut self) {
        let Some(outcome) = self.pages.complete() else {
            return;
        };
        if let Some((incoming, _)) = self.page_tweens.take() {
            let pose = incoming.sample(self.now_ms);
            log::info!(
                "[nav] landed on {:?} at offset {}% opacity {}",
                outcome.active,
                pose.offset_pct,
                pose.opacity
            );
        }
        if let Some(page) = outcome.discard {
            let dropped = self.visibility.unregister_page(page);
            log::info!("[nav] discarded {} ({} items)", page.dom_id(), dropped.len());
        }
        if outcome.replay {
            let replay = self.visibility.replay_page(outcome.active);
            self.stats.replays += replay.len();
            for e in replay {
                self.timers
                    .schedule(self.now_ms + e.delay_ms, Timer::StartEntrance(e));
            }
        }
    }

    fn log_second(&self) {
        let pose = self
            .page_tweens
            .as_ref()
            .map(|(incoming, _)| incoming.sample(self.now_ms));
        log::info!(
            "[sim] t={:.1}s frames={} live_ripples={} history={} state={:?} ambient={:?} pose={:?}",
            self.now_ms / 1000.0,
            self.stats.frames,
            self.ripples.live_count(),
            self.pages.depth(),
            self.pages.state(),
            self.ambient.state(),
            pose
        );
    }

    fn report(&self) {
        let s = &self.stats;
        log::info!(
            "[report] frames={} history={} current={:?} state={:?}",
            s.frames,
            self.pages.depth(),
            self.pages.current(),
            self.pages.state()
        );
        log::info!(
            "[report] surfaces distorted at once (peak)={} peak intensity={:.3}",
            s.distorted_peak,
            s.intensity_peak
        );
        log::info!(
            "[report] ripples spawned={} removed={} live={} late={}",
            s.ripples_spawned,
            s.ripples_removed,
            self.ripples.live_count(),
            s.late_ripples
        );
        log::info!(
            "[report] entrances={} settles={} exits={} replayed={} ignored signals={} dropped requests={}",
            s.entrances,
            s.settles,
            s.exits,
            s.replays,
            s.ignored_signals,
            s.dropped_requests
        );
        log::info!(
            "[report] parallax items={} peak shift={:.2}px peak scroll drift={:.1}px",
            self.parallax.len(),
            s.parallax_peak_px,
            s.scroll_drift_peak_px
        );
        for layer in self.ambient.layers() {
            log::info!(
                "[report] layer {} at ({:.1}%, {:.1}%) -> ({:.1}%, {:.1}%)",
                layer.index,
                layer.current.x,
                layer.current.y,
                layer.target.x,
                layer.target.y
            );
        }
        log::info!("[report] ambient ticks={}", self.ambient.ticks());
    }
}

fn item_id(page: PageId, i: u32) -> ElementId {
    ElementId(100 + page.0 * ITEMS_PER_PAGE + i)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let seconds = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<f64>()
            .map_err(|e| anyhow::anyhow!("invalid seconds {arg:?}: {e}"))?,
        None => DEFAULT_SECONDS,
    };
    let end_ms = seconds.max(0.0) * 1000.0;
    log::info!("glass-native: simulating {seconds}s at 60Hz");

    let mut sim = Sim::new();
    let mut next_summary_ms = 1000.0;
    while sim.now_ms <= end_ms {
        sim.frame();
        if sim.now_ms >= next_summary_ms {
            sim.log_second();
            next_summary_ms += 1000.0;
        }
        sim.now_ms += FRAME_MS;
    }
    sim.report();

    if sim.stats.late_ripples > 0 {
        anyhow::bail!("{} ripples outlived their deadline", sim.stats.late_ripples);
    }
    Ok(())
}
