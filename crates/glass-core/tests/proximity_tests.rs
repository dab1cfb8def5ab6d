// Proximity intensity and surface distortion.

use glam::Vec2;
use glass_core::*;

fn viewport() -> Viewport {
    Viewport::new(1200.0, 800.0)
}

fn pointer_at(x: f32, y: f32) -> PointerState {
    PointerState {
        position: Vec2::new(x, y),
        ..Default::default()
    }
}

#[test]
fn intensity_is_zero_at_and_beyond_radius() {
    for d in [300.0, 300.5, 450.0, 10_000.0, f32::INFINITY] {
        assert_eq!(proximity_intensity(d), 0.0, "distance {d}");
    }
}

#[test]
fn intensity_is_linear_and_strictly_decreasing_inside_radius() {
    let mut prev = f32::MAX;
    for i in 0..300 {
        let d = i as f32;
        let v = proximity_intensity(d);
        assert!((v - (1.0 - d / 300.0)).abs() < 1e-6, "d={d} v={v}");
        assert!(v > 0.0 && v <= 1.0);
        assert!(v < prev, "not decreasing at {d}");
        prev = v;
    }
}

#[test]
fn far_pointer_leaves_surface_exactly_neutral() {
    let center = Vec2::new(600.0, 400.0);
    for p in [
        Vec2::new(900.0, 400.0),
        Vec2::new(600.0, 100.0),
        Vec2::new(0.0, 0.0),
    ] {
        assert_eq!(surface_style(p, center, viewport(), 0.9), SurfaceStyle::Neutral);
    }
}

#[test]
fn pointer_at_center_lifts_without_rotation() {
    let depth = 0.7;
    let center = Vec2::new(600.0, 400.0);
    let SurfaceStyle::Distorted(d) = surface_style(center, center, viewport(), depth) else {
        panic!("expected distortion at center");
    };
    assert_eq!(d.intensity, 1.0);
    assert_eq!(d.transform.rotate_x_deg, 0.0);
    assert_eq!(d.transform.rotate_y_deg, 0.0);
    assert!((d.transform.translate.z - 10.0 * depth).abs() < 1e-6);
    assert_eq!(d.transform.perspective_px, Some(1000.0));
    assert_eq!(d.highlight.anchor_pct, Vec2::new(50.0, 50.0));
    assert!((d.highlight.inner_alpha - 0.4).abs() < 1e-6);
    assert!((d.highlight.outer_alpha - 0.2).abs() < 1e-6);
}

#[test]
fn rotation_follows_pointer_delta() {
    let center = Vec2::new(600.0, 400.0);
    // 150px right, 0 down: intensity 0.5
    let SurfaceStyle::Distorted(d) =
        surface_style(Vec2::new(750.0, 400.0), center, viewport(), 1.0)
    else {
        panic!("expected distortion");
    };
    assert!((d.intensity - 0.5).abs() < 1e-6);
    let move_x = 150.0 / 1200.0 * 20.0 * 0.5;
    assert!((d.transform.rotate_y_deg - (-move_x * 0.5)).abs() < 1e-5);
    assert_eq!(d.transform.rotate_x_deg, 0.0);
    assert!((d.highlight.anchor_pct.x - (50.0 + move_x * 5.0)).abs() < 1e-4);
    assert!((d.highlight.inner_alpha - 0.3).abs() < 1e-6);
    assert!((d.highlight.outer_alpha - 0.15).abs() < 1e-6);
}

#[test]
fn engine_updates_every_registered_surface() {
    let mut engine = ProximityEngine::new();
    engine.register(ElementId(1), 0.5);
    engine.register(ElementId(2), 0.9);
    engine.register(ElementId(3), 0.2);
    engine.register(ElementId(2), 1.0); // re-weight, not duplicate
    assert_eq!(engine.len(), 3);

    let centers = |id: ElementId| match id.0 {
        1 => Some(Vec2::new(100.0, 100.0)),
        2 => Some(Vec2::new(1000.0, 700.0)),
        _ => None, // detached
    };
    let out = engine.update(&pointer_at(110.0, 100.0), viewport(), centers);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].0, ElementId(1));
    assert!(out[0].1.intensity() > 0.9);
    assert_eq!(out[1], (ElementId(2), SurfaceStyle::Neutral));

    assert!(engine.unregister(ElementId(1)));
    assert!(!engine.unregister(ElementId(1)));
    assert_eq!(engine.len(), 2);
}

#[test]
fn degenerate_viewport_stays_finite() {
    let center = Vec2::new(10.0, 10.0);
    let SurfaceStyle::Distorted(d) =
        surface_style(Vec2::new(20.0, 30.0), center, Viewport::new(0.0, 0.0), 0.5)
    else {
        panic!("expected distortion");
    };
    assert!(d.transform.rotate_x_deg.is_finite());
    assert!(d.transform.rotate_y_deg.is_finite());
}
