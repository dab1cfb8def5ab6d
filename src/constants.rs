/// Selectors and attribute names the front-end binds to.
///
/// The markup is owned elsewhere; these are the only hooks the motion layer
/// expects to find in it.
// Pointer-reactive glass surfaces
pub const SURFACE_SELECTOR: &str = ".glass-card, .glass-navbar, .glass-tabbar";

// Elements with an entrance/exit lifecycle
pub const VISIBILITY_SELECTOR: &str = "[data-origin]";

// Items drifting with the pointer and the page scroll
pub const PARALLAX_SELECTOR: &str = ".parallax-element";

// Ripple hosts, matched with `closest` from the click target
pub const RIPPLE_SELECTOR: &str = ".touch-feedback, .action-btn, .tab-item";

// In-page navigation links
pub const LINK_SELECTOR: &str = "a[href^=\"#\"]";

// Layout anchors
pub const BACK_BUTTON_ID: &str = "navBack";
pub const CONTENT_SELECTOR: &str = ".content-area";
pub const APP_CONTAINER_SELECTOR: &str = ".app-container";
pub const AMBIENT_CONTAINER_SELECTOR: &str = ".liquid-background";

// Per-element metadata
pub const ORIGIN_ATTR: &str = "data-origin";
pub const DEPTH_ATTR: &str = "data-depth";
pub const ID_ATTR: &str = "data-glass-id";

// Class applied to generated nodes
pub const AMBIENT_LAYER_CLASS: &str = "dynamic-glass-layer";
pub const RIPPLE_CLASS: &str = "glass-ripple";
