// Pointer and scroll parallax of depth-weighted items.

use glam::{Vec2, Vec3};
use glass_core::*;

fn viewport() -> Viewport {
    Viewport::new(1000.0, 800.0)
}

fn pointer_at(x: f32, y: f32) -> PointerState {
    PointerState {
        position: Vec2::new(x, y),
        ..Default::default()
    }
}

#[test]
fn pointer_at_viewport_center_is_neutral() {
    let p = pointer_parallax(Vec2::new(500.0, 400.0), viewport(), 1.0);
    assert_eq!(p, Parallax::default());
}

#[test]
fn shift_scales_with_offset_and_depth() {
    // right edge, top edge: half a viewport from center on both axes
    let p = pointer_parallax(Vec2::new(1000.0, 0.0), viewport(), 0.5);
    assert!(p.shift.abs_diff_eq(Vec2::new(5.0, -5.0), 1e-5), "{:?}", p.shift);
    assert!((p.rotate_x_deg + 2.5).abs() < 1e-5);
    assert!((p.rotate_y_deg - 2.5).abs() < 1e-5);

    let flat = pointer_parallax(Vec2::new(1000.0, 0.0), viewport(), 0.0);
    assert_eq!(flat.shift, Vec2::ZERO);
}

#[test]
fn scroll_drift_is_half_depth_weighted() {
    assert_eq!(scroll_parallax(0.0, 0.9), 0.0);
    assert!((scroll_parallax(400.0, 0.5) - 100.0).abs() < 1e-4);
    assert!((scroll_parallax(400.0, 1.0) - 200.0).abs() < 1e-4);
}

#[test]
fn engine_updates_every_item_on_each_move() {
    let mut engine = ParallaxEngine::new();
    engine.register(ElementId(1), PageId::ROOT, 1.0);
    engine.register(ElementId(2), PageId::ROOT, 0.5);

    let poses = engine.on_pointer(&pointer_at(750.0, 400.0), viewport());
    assert_eq!(poses.len(), 2);
    assert!((poses[0].1.pointer.shift.x - 5.0).abs() < 1e-5);
    assert!((poses[1].1.pointer.shift.x - 2.5).abs() < 1e-5);

    // a second move is never suppressed
    let poses = engine.on_pointer(&pointer_at(500.0, 400.0), viewport());
    assert!(poses.iter().all(|(_, p)| p.pointer == Parallax::default()));
}

#[test]
fn scroll_and_pointer_compose_into_one_pose() {
    let mut engine = ParallaxEngine::new();
    engine.register(ElementId(1), PageId::ROOT, 1.0);
    engine.on_pointer(&pointer_at(1000.0, 800.0), viewport());
    let poses = engine.on_scroll(100.0);
    let pose = poses[0].1;
    assert!((pose.scroll_px - 50.0).abs() < 1e-5);
    assert!(pose
        .translate()
        .abs_diff_eq(Vec3::new(10.0, 60.0, 0.0), 1e-4));
    assert_eq!(engine.pose(ElementId(1)), Some(pose));
}

#[test]
fn register_reweights_and_pages_unregister_together() {
    let mut engine = ParallaxEngine::new();
    engine.register(ElementId(1), PageId::ROOT, 0.2);
    engine.register(ElementId(1), PageId::ROOT, 0.8);
    engine.register(ElementId(2), PageId(1), 0.5);
    engine.register(ElementId(3), PageId(1), 0.5);
    assert_eq!(engine.len(), 3);

    let poses = engine.on_scroll(100.0);
    assert!((poses[0].1.scroll_px - 40.0).abs() < 1e-4);

    assert_eq!(engine.unregister_page(PageId(1)), 2);
    assert_eq!(engine.len(), 1);
    assert_eq!(engine.pose(ElementId(2)), None);
}
