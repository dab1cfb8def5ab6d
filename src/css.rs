//! Inline style text written to the presentation tree.
//!
//! Pure formatting from core values to CSS strings. Numbers are rounded to
//! three decimals so style writes stay short and stable across frames.

use glass_core::constants::{HIGHLIGHT_OUTER_STOP_PCT, SURFACE_BASE_ALPHA};
use glass_core::{
    AmbientLayer, Easing, Highlight, PagePose, ParallaxPose, Ripple, RippleVariant, Timing,
    Transform3d,
};

/// Three-decimal number with no trailing zeros and no negative zero.
pub fn num(v: f32) -> String {
    let r = (f64::from(v) * 1000.0).round() / 1000.0;
    if r == 0.0 || !r.is_finite() {
        return "0".to_string();
    }
    format!("{r}")
}

#[inline]
fn ms(v: f64) -> String {
    format!("{}ms", v.round().max(0.0))
}

pub fn neutral_background() -> String {
    format!("rgba(255, 255, 255, {})", num(SURFACE_BASE_ALPHA))
}

pub fn transform(t: &Transform3d) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(5);
    let translate3d = format!(
        "translate3d({}px, {}px, {}px)",
        num(t.translate.x),
        num(t.translate.y),
        num(t.translate.z)
    );
    match t.perspective_px {
        Some(p) => {
            parts.push(format!("perspective({}px)", num(p)));
            parts.push(format!("rotateX({}deg)", num(t.rotate_x_deg)));
            parts.push(format!("rotateY({}deg)", num(t.rotate_y_deg)));
            if t.translate.x == 0.0 && t.translate.y == 0.0 {
                parts.push(format!("translateZ({}px)", num(t.translate.z)));
            } else {
                parts.push(translate3d);
            }
            if t.scale != 1.0 {
                parts.push(scale(t.scale));
            }
        }
        None => {
            if t.rotate_x_deg != 0.0 || t.rotate_y_deg != 0.0 {
                parts.push(format!("rotateX({}deg)", num(t.rotate_x_deg)));
                parts.push(format!("rotateY({}deg)", num(t.rotate_y_deg)));
            }
            parts.push(translate3d);
            parts.push(scale(t.scale));
        }
    }
    parts.join(" ")
}

/// Parallax shift and scroll drift, then the pointer tilt.
pub fn parallax_transform(p: &ParallaxPose) -> String {
    let t = p.translate();
    format!(
        "translate3d({}px, {}px, 0px) rotateX({}deg) rotateY({}deg)",
        num(t.x),
        num(t.y),
        num(p.pointer.rotate_x_deg),
        num(p.pointer.rotate_y_deg)
    )
}

#[inline]
pub fn scale(s: f32) -> String {
    format!("scale({})", num(s))
}

/// Specular highlight layered over the neutral surface fill.
pub fn highlight_background(h: &Highlight) -> String {
    format!(
        "radial-gradient(circle at {}% {}%, rgba(255, 255, 255, {}) 0%, rgba(255, 255, 255, {}) {}%, transparent 100%), {}",
        num(h.anchor_pct.x),
        num(h.anchor_pct.y),
        num(h.inner_alpha),
        num(h.outer_alpha),
        num(HIGHLIGHT_OUTER_STOP_PCT),
        neutral_background()
    )
}

pub fn ambient_background(layer: &AmbientLayer) -> String {
    format!(
        "radial-gradient(circle at {}% {}%, hsla({}, 100%, 70%, {}) 0%, transparent 50%)",
        num(layer.current.x),
        num(layer.current.y),
        layer.hue.floor(),
        num(layer.alpha)
    )
}

/// Fixed full-viewport styling for an ambient layer element.
pub fn ambient_layer_css(layer: &AmbientLayer) -> String {
    format!(
        "position: fixed; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none; \
         z-index: {}; filter: blur({}px); opacity: {}; mix-blend-mode: overlay; background: {};",
        layer.z_index,
        num(layer.blur_px),
        num(layer.opacity),
        ambient_background(layer)
    )
}

pub fn easing(e: Easing) -> String {
    match e.curve() {
        Some(c) => format!(
            "cubic-bezier({}, {}, {}, {})",
            num(c.x1),
            num(c.y1),
            num(c.x2),
            num(c.y2)
        ),
        None => "linear".to_string(),
    }
}

/// `transition` property for an entrance or exit.
pub fn transition(timing: &Timing) -> String {
    format!(
        "transform {} {}, opacity {} {}",
        ms(timing.transform_ms),
        easing(timing.transform_easing),
        ms(timing.opacity_ms),
        easing(timing.opacity_easing)
    )
}

pub fn page_transition(duration_ms: f64, e: Easing) -> String {
    format!("all {} {}", ms(duration_ms), easing(e))
}

pub fn page_transform(pose: &PagePose) -> String {
    format!("translateX({}%) {}", num(pose.offset_pct), scale(pose.scale))
}

pub fn ripple_fill(variant: RippleVariant) -> &'static str {
    match variant {
        RippleVariant::Glass => "rgba(0, 122, 255, 0.1)",
        RippleVariant::Generic => "rgba(255, 255, 255, 0.6)",
    }
}

/// Initial style for a ripple node: centered on its origin, collapsed.
pub fn ripple_css(r: &Ripple) -> String {
    let top_left = r.top_left();
    format!(
        "position: absolute; border-radius: 50%; background: {}; width: {}px; height: {}px; \
         left: {}px; top: {}px; transform: scale(0); pointer-events: none;",
        ripple_fill(r.variant),
        num(r.size),
        num(r.size),
        num(top_left.x),
        num(top_left.y)
    )
}
