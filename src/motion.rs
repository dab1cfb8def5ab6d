//! Applies core motion commands to DOM nodes.

use crate::css;
use crate::dom;
use glass_core::{
    Entrance, Exit, ParallaxPose, Settle, StyleTarget, SurfaceStyle, VisibilityCommand,
};
use web_sys as web;

pub fn apply_surface_style(el: &web::HtmlElement, style: &SurfaceStyle) {
    match style {
        SurfaceStyle::Neutral => {
            _ = el.style().remove_property("transform");
            dom::set_style(el, &[("background", css::neutral_background().as_str())]);
        }
        SurfaceStyle::Distorted(d) => {
            dom::set_style(
                el,
                &[
                    ("transform", css::transform(&d.transform).as_str()),
                    ("background", css::highlight_background(&d.highlight).as_str()),
                ],
            );
        }
    }
}

pub fn apply_parallax(el: &web::HtmlElement, pose: &ParallaxPose) {
    dom::set_style(el, &[("transform", css::parallax_transform(pose).as_str())]);
}

fn write_target(el: &web::HtmlElement, target: &StyleTarget) {
    dom::set_style(
        el,
        &[
            ("transform", css::transform(&target.transform).as_str()),
            ("opacity", css::num(target.opacity).as_str()),
        ],
    );
}

pub fn apply_command(el: web::HtmlElement, cmd: VisibilityCommand) {
    match cmd {
        VisibilityCommand::Enter(e) => apply_entrance(el, e),
        VisibilityCommand::Exit(x) => apply_exit(&el, &x),
    }
}

/// Snap to the offstage pose, then transition to the shown pose on the next
/// frame. Staggered entrances wait `delay_ms` first.
pub fn apply_entrance(el: web::HtmlElement, e: Entrance) {
    if e.delay_ms > 0.0 {
        let delay = e.delay_ms;
        dom::set_timeout(delay, move || {
            apply_entrance(
                el,
                Entrance {
                    delay_ms: 0.0,
                    ..e
                },
            )
        });
        return;
    }
    dom::set_style(&el, &[("transition", "none")]);
    write_target(&el, &e.from);
    dom::next_frame(move || {
        dom::set_style(&el, &[("transition", css::transition(&e.timing).as_str())]);
        write_target(&el, &e.to);
        if let Some(settle) = e.settle {
            play_settle(&el, &settle);
        }
    });
}

fn play_settle(el: &web::HtmlElement, settle: &Settle) {
    let peak = css::scale(settle.peak_scale);
    _ = dom::animate(
        el,
        &[
            &[("transform", "scale(1)")],
            &[("transform", peak.as_str())],
            &[("transform", "scale(1)")],
        ],
        settle.duration_ms,
        &css::easing(settle.easing),
        settle.delay_ms,
    );
}

pub fn apply_exit(el: &web::HtmlElement, x: &Exit) {
    dom::set_style(el, &[("transition", css::transition(&x.timing).as_str())]);
    write_target(el, &x.to);
}
