// Pointer position and device-orientation tilt tracking.

use glam::Vec2;
use glass_core::*;

#[test]
fn pointer_move_overwrites_position() {
    let mut t = PointerTracker::new();
    assert_eq!(t.state().position, Vec2::ZERO);
    let s = t.on_pointer_move(120.0, 40.0).expect("finite move");
    assert_eq!(s.position, Vec2::new(120.0, 40.0));
    t.on_pointer_move(5.0, 6.0);
    assert_eq!(t.state().position, Vec2::new(5.0, 6.0));
}

#[test]
fn non_finite_pointer_move_is_ignored() {
    let mut t = PointerTracker::new();
    t.on_pointer_move(10.0, 10.0);
    assert!(t.on_pointer_move(f32::NAN, 3.0).is_none());
    assert!(t.on_pointer_move(1.0, f32::INFINITY).is_none());
    assert_eq!(t.state().position, Vec2::new(10.0, 10.0));
}

#[test]
fn orientation_maps_to_tilt() {
    let mut t = PointerTracker::new();
    let tilt = t.on_orientation(OrientationSample {
        beta: Some(45.0),
        gamma: Some(-90.0),
    });
    assert_eq!(tilt.x_deg, -10.0);
    assert_eq!(tilt.y_deg, 5.0);
    assert_eq!(t.state().tilt, tilt);
}

#[test]
fn missing_orientation_fields_default_to_zero() {
    let mut t = PointerTracker::new();
    let tilt = t.on_orientation(OrientationSample {
        beta: None,
        gamma: Some(45.0),
    });
    assert_eq!(tilt, Tilt { x_deg: 5.0, y_deg: 0.0 });
    let tilt = t.on_orientation(OrientationSample::default());
    assert_eq!(tilt, Tilt::default());
}

#[test]
fn tilt_is_clamped_for_out_of_range_angles() {
    // beta reports up to ±180 on real devices
    let tilt = tilt_from_orientation(180.0, -135.0);
    assert_eq!(tilt.y_deg, 10.0);
    assert_eq!(tilt.x_deg, -10.0);
    let tilt = tilt_from_orientation(f32::NAN, 9.0);
    assert_eq!(tilt.y_deg, 0.0);
    assert!((tilt.x_deg - 1.0).abs() < 1e-6);
}

#[test]
fn tilt_publishes_two_named_variables() {
    let vars = Tilt {
        x_deg: -10.0,
        y_deg: 5.0,
    }
    .style_variables();
    assert_eq!(vars[0], ("--tilt-x", "-10deg".to_string()));
    assert_eq!(vars[1], ("--tilt-y", "5deg".to_string()));
}

#[test]
fn dynamic_hue_wraps_at_360() {
    assert_eq!(dynamic_hue(0.0), 0.0);
    assert_eq!(dynamic_hue(10_000.0), 1.0);
    assert!((dynamic_hue(3_610_000.0) - 1.0).abs() < 1e-9);
}
