// Ripple sizing, placement and timer-driven cleanup.

use glam::Vec2;
use glass_core::*;

fn host() -> Rect {
    Rect::new(100.0, 200.0, 80.0, 40.0)
}

#[test]
fn roles_pick_the_variant() {
    assert_eq!(
        RippleVariant::for_classes(["tab-item", "active"]),
        Some(RippleVariant::Glass)
    );
    assert_eq!(
        RippleVariant::for_classes(["action-btn"]),
        Some(RippleVariant::Generic)
    );
    assert_eq!(
        RippleVariant::for_classes(["card", "touch-feedback"]),
        Some(RippleVariant::Generic)
    );
    // tab-item wins over a generic role on the same element
    assert_eq!(
        RippleVariant::for_classes(["touch-feedback", "tab-item"]),
        Some(RippleVariant::Glass)
    );
    assert_eq!(RippleVariant::for_classes(["glass-card"]), None);
    assert_eq!(RippleVariant::for_classes(std::iter::empty()), None);
}

#[test]
fn size_follows_host_longest_side() {
    let mut s = RippleSpawner::new();
    let glass = s.spawn(Vec2::new(120.0, 210.0), host(), RippleVariant::Glass, 0.0);
    let generic = s.spawn(Vec2::new(120.0, 210.0), host(), RippleVariant::Generic, 0.0);
    assert_eq!(glass.size, 160.0);
    assert_eq!(generic.size, 80.0);
    assert_ne!(glass.id, generic.id);
    assert_eq!(s.live_count(), 2);
}

#[test]
fn ripple_is_centered_on_the_click() {
    let mut s = RippleSpawner::new();
    let r = s.spawn(Vec2::new(130.0, 215.0), host(), RippleVariant::Generic, 0.0);
    assert_eq!(r.origin, Vec2::new(30.0, 15.0));
    assert_eq!(r.top_left(), Vec2::new(-10.0, -25.0));
    assert_eq!(r.top_left() + Vec2::splat(r.size / 2.0), r.origin);
}

#[test]
fn frame_grows_and_fades_linearly() {
    let mut s = RippleSpawner::new();
    let r = s.spawn(Vec2::ZERO, host(), RippleVariant::Generic, 1000.0);
    assert_eq!(r.frame_at(1000.0), (0.0, 1.0));
    assert_eq!(r.frame_at(1300.0), (2.0, 0.5));
    assert_eq!(r.frame_at(1600.0), (4.0, 0.0));
    assert_eq!(r.frame_at(5000.0), (4.0, 0.0));

    let g = s.spawn(Vec2::ZERO, host(), RippleVariant::Glass, 1000.0);
    assert_eq!(g.frame_at(1600.0), (1.0, 0.0));
}

#[test]
fn expires_exactly_at_duration() {
    let mut s = RippleSpawner::new();
    let r = s.spawn(Vec2::ZERO, host(), RippleVariant::Glass, 250.0);
    assert_eq!(r.expires_at_ms(), 850.0);
    assert!(s.expire(849.9).is_empty());
    assert_eq!(s.expire(850.0), vec![r.id]);
    assert_eq!(s.live_count(), 0);
    assert!(s.get(r.id).is_none());
}

#[test]
fn burst_of_clicks_leaves_no_leaks() {
    let mut s = RippleSpawner::new();
    let mut timers = TimerQueue::new();
    let mut spawned = Vec::new();
    // ten rapid clicks, 16ms apart
    for i in 0..10 {
        let now = i as f64 * 16.0;
        let r = s.spawn(Vec2::new(110.0, 210.0), host(), RippleVariant::Generic, now);
        timers.schedule(r.expires_at_ms(), r.id);
        spawned.push(r);
    }
    assert_eq!(s.live_count(), 10);

    let mut now = 0.0;
    while let Some(due) = timers.next_due_ms() {
        now = due;
        for (fired_at, id) in timers.drain_due(now) {
            let r = s.remove(id).expect("removed once");
            let age = fired_at - r.spawned_at_ms;
            assert!((600.0..600.0 + 1e-9).contains(&age), "age {age}");
        }
    }
    assert_eq!(now, 9.0 * 16.0 + 600.0);
    assert_eq!(s.live_count(), 0);
    for r in spawned {
        assert!(s.remove(r.id).is_none());
    }
}

#[test]
fn custom_duration_is_honored() {
    let mut s = RippleSpawner::with_duration(100.0);
    assert_eq!(s.duration_ms(), 100.0);
    let a = s.spawn(Vec2::ZERO, host(), RippleVariant::Generic, 0.0);
    let b = s.spawn(Vec2::ZERO, host(), RippleVariant::Generic, 50.0);
    assert_eq!(s.expire(100.0), vec![a.id]);
    assert_eq!(s.expire(150.0), vec![b.id]);
}
