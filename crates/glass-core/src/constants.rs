/// Motion tuning constants shared by the web and native hosts.
///
/// Times are milliseconds, distances are CSS pixels unless the name says
/// otherwise.

// Proximity distortion
pub const PROXIMITY_RADIUS_PX: f32 = 300.0; // pointer distance where the effect fades to zero
pub const DISTORTION_MOVE_SCALE: f32 = 20.0; // max move (before intensity/depth) per full viewport delta
pub const DISTORTION_ROTATE_PER_MOVE_DEG: f32 = 0.5;
pub const DISTORTION_LIFT_PX: f32 = 10.0; // translateZ at full intensity and depth 1
pub const DISTORTION_PERSPECTIVE_PX: f32 = 1000.0;

// Specular highlight
pub const HIGHLIGHT_CENTER_PCT: f32 = 50.0;
pub const HIGHLIGHT_OFFSET_PER_MOVE: f32 = 5.0;
pub const HIGHLIGHT_INNER_ALPHA_BASE: f32 = 0.2;
pub const HIGHLIGHT_INNER_ALPHA_SPAN: f32 = 0.2;
pub const HIGHLIGHT_OUTER_ALPHA_BASE: f32 = 0.1;
pub const HIGHLIGHT_OUTER_ALPHA_SPAN: f32 = 0.1;
pub const HIGHLIGHT_OUTER_STOP_PCT: f32 = 70.0;
pub const SURFACE_BASE_ALPHA: f32 = 0.6; // neutral translucent white behind every surface

// Parallax on `.parallax-element` items
pub const PARALLAX_MOVE_PX: f32 = 20.0; // shift at a viewport edge for depth 1, doubled edge to edge
pub const PARALLAX_ROTATE_PER_MOVE_DEG: f32 = 0.5;
pub const SCROLL_PARALLAX_FACTOR: f32 = 0.5;

// Device tilt
pub const TILT_MAX_DEG: f32 = 10.0;
pub const ORIENTATION_RANGE_DEG: f32 = 90.0;
pub const DYNAMIC_HUE_PERIOD_MS: f64 = 10_000.0;

// Ambient layers
pub const AMBIENT_LAYER_COUNT: usize = 3;
pub const AMBIENT_SMOOTHING: f32 = 0.01; // first-order low-pass coefficient per tick
pub const AMBIENT_RETARGET_PROBABILITY: f32 = 0.005; // mean dwell of 200 ticks
pub const AMBIENT_ALPHA: f32 = 0.15;
pub const AMBIENT_BLUR_BASE_PX: f32 = 40.0;
pub const AMBIENT_BLUR_STEP_PX: f32 = 20.0;
pub const AMBIENT_OPACITY_BASE: f32 = 0.2;
pub const AMBIENT_OPACITY_STEP: f32 = 0.1;

// Visibility lifecycle
pub const VISIBILITY_THRESHOLD: f64 = 0.1;
pub const VISIBILITY_ROOT_MARGIN_PX: u32 = 50;
pub const DEFAULT_DEPTH: f32 = 0.5;
pub const ENTRANCE_OFFSET_PX: f32 = 30.0;
pub const ENTRANCE_SCALE_PER_DEPTH: f32 = 0.1;
pub const ENTRANCE_Z_PER_DEPTH_PX: f32 = 50.0;
pub const ENTER_TRANSFORM_MS: f64 = 600.0;
pub const ENTER_OPACITY_MS: f64 = 400.0;
pub const EXIT_MS: f64 = 300.0;
pub const OVERSHOOT_DEPTH: f32 = 0.8; // depth above which entrances overshoot
pub const STANDARD_DEPTH: f32 = 0.5;
pub const SETTLE_DEPTH: f32 = 0.3; // depth above which the settle bounce plays
pub const SETTLE_MS: f64 = 400.0;
pub const SETTLE_PEAK_SCALE: f32 = 1.02;
pub const REPLAY_STAGGER_MS: f64 = 100.0;

// Ripples
pub const RIPPLE_DURATION_MS: f64 = 600.0;
pub const RIPPLE_GLASS_SIZE_FACTOR: f32 = 2.0;
pub const RIPPLE_GENERIC_SIZE_FACTOR: f32 = 1.0;
pub const RIPPLE_GLASS_END_SCALE: f32 = 1.0;
pub const RIPPLE_GENERIC_END_SCALE: f32 = 4.0;

// Page transitions
pub const PAGE_TRANSITION_MS: f64 = 400.0;
pub const PAGE_ENTER_OFFSET_PCT: f32 = 100.0;
pub const PAGE_RECEDE_OFFSET_PCT: f32 = -30.0;
pub const PAGE_RECEDE_SCALE: f32 = 0.95;
pub const PAGE_DIM_OPACITY: f32 = 0.7;
