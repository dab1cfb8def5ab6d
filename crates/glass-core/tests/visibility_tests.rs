// Entrance/exit lifecycle, settle bounce and forced replays.

use glam::Vec3;
use glass_core::*;

fn cfg(origin: OriginSide, depth: f32) -> ElementConfig {
    ElementConfig { origin, depth }
}

fn enter(cmd: Option<VisibilityCommand>) -> Entrance {
    match cmd {
        Some(VisibilityCommand::Enter(e)) => e,
        other => panic!("expected entrance, got {other:?}"),
    }
}

#[test]
fn left_deep_item_enters_from_offset_with_settle() {
    let mut anim = VisibilityAnimator::new();
    anim.register(ElementId(1), PageId::ROOT, cfg(OriginSide::Left, 0.9));
    let e = enter(anim.on_intersection(ElementId(1), true));

    assert_eq!(e.from.opacity, 0.0);
    assert!(e
        .from
        .transform
        .translate
        .abs_diff_eq(Vec3::new(-30.0, 0.0, -45.0), 1e-4));
    assert!((e.from.transform.scale - 0.91).abs() < 1e-6);
    assert_eq!(e.to, StyleTarget::SHOWN);
    assert!(e.to.transform.is_identity());
    assert_eq!(e.timing.transform_ms, 600.0);
    assert_eq!(e.timing.opacity_ms, 400.0);
    assert_eq!(e.timing.transform_easing, Easing::Overshoot);
    assert_eq!(e.delay_ms, 0.0);

    let settle = e.settle.expect("depth > 0.3 settles");
    assert_eq!(settle.delay_ms, 600.0);
    assert_eq!(settle.duration_ms, 400.0);
    assert_eq!(settle.peak_scale, 1.02);
    assert_eq!(settle.easing, Easing::Elastic);

    let item = anim.get(ElementId(1)).expect("registered");
    assert_eq!(item.visibility, Visibility::Visible);
    assert_eq!(item.animated, AnimatedFlag::Animated);
}

#[test]
fn origin_offsets_follow_their_axis() {
    let cases = [
        (OriginSide::Top, Vec3::new(0.0, -30.0, -25.0)),
        (OriginSide::Bottom, Vec3::new(0.0, 30.0, -25.0)),
        (OriginSide::Right, Vec3::new(30.0, 0.0, -25.0)),
        (OriginSide::Center, Vec3::new(0.0, 0.0, -25.0)),
    ];
    for (origin, expected) in cases {
        let t = entrance_offset(origin, 0.5);
        assert_eq!(t.translate, expected, "{origin:?}");
        assert!((t.scale - 0.95).abs() < 1e-6);
    }
}

#[test]
fn shallow_items_never_settle() {
    let mut anim = VisibilityAnimator::new();
    anim.register(ElementId(1), PageId::ROOT, cfg(OriginSide::Top, 0.3));
    let e = enter(anim.on_intersection(ElementId(1), true));
    assert!(e.settle.is_none());
    assert_eq!(e.timing.transform_easing, Easing::EaseInOut);
}

#[test]
fn settle_plays_only_on_first_entrance() {
    let mut anim = VisibilityAnimator::new();
    anim.register(ElementId(4), PageId::ROOT, cfg(OriginSide::Bottom, 0.6));
    assert!(enter(anim.on_intersection(ElementId(4), true)).settle.is_some());
    anim.on_intersection(ElementId(4), false);
    let again = enter(anim.on_intersection(ElementId(4), true));
    assert!(again.settle.is_none());
    assert_eq!(again.timing.transform_easing, Easing::Standard);
}

#[test]
fn exit_returns_to_offset_quickly() {
    let mut anim = VisibilityAnimator::new();
    anim.register(ElementId(2), PageId::ROOT, cfg(OriginSide::Right, 0.9));
    anim.on_intersection(ElementId(2), true);
    let Some(VisibilityCommand::Exit(x)) = anim.on_intersection(ElementId(2), false) else {
        panic!("expected exit");
    };
    assert_eq!(x.to.opacity, 0.0);
    assert_eq!(x.to.transform, entrance_offset(OriginSide::Right, 0.9));
    assert_eq!(x.timing.transform_ms, 300.0);
    assert_eq!(x.timing.opacity_ms, 300.0);
    assert_eq!(x.timing.transform_easing, Easing::Overshoot);
    assert_eq!(x.timing.opacity_easing, Easing::EaseIn);
    assert_eq!(anim.get(ElementId(2)).map(|i| i.visibility), Some(Visibility::Hidden));
    // the one-shot flag never goes back
    assert_eq!(anim.get(ElementId(2)).map(|i| i.animated), Some(AnimatedFlag::Animated));
}

#[test]
fn flicker_last_signal_wins() {
    let mut anim = VisibilityAnimator::new();
    anim.register(ElementId(3), PageId::ROOT, ElementConfig::default());
    let signals = [true, false, true, false, false, true];
    let mut last = None;
    for s in signals {
        last = anim.on_intersection(ElementId(3), s);
    }
    assert!(matches!(last, Some(VisibilityCommand::Enter(_))));
    assert_eq!(anim.get(ElementId(3)).map(|i| i.visibility), Some(Visibility::Visible));
}

#[test]
fn unknown_items_are_ignored() {
    let mut anim = VisibilityAnimator::new();
    assert!(anim.on_intersection(ElementId(99), true).is_none());
}

#[test]
fn replay_staggers_and_forces_every_item_on_page() {
    let mut anim = VisibilityAnimator::new();
    let page = PageId(1);
    anim.register(ElementId(10), PageId::ROOT, ElementConfig::default());
    anim.register(ElementId(11), page, cfg(OriginSide::Left, 0.9));
    anim.register(ElementId(12), page, cfg(OriginSide::Top, 0.2));
    anim.register(ElementId(13), page, ElementConfig::default());
    // already animated before the replay
    anim.on_intersection(ElementId(11), true);

    let replay = anim.replay_page(page);
    let ids: Vec<ElementId> = replay.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![ElementId(11), ElementId(12), ElementId(13)]);
    let delays: Vec<f64> = replay.iter().map(|e| e.delay_ms).collect();
    assert_eq!(delays, vec![0.0, 100.0, 200.0]);
    assert!(replay[0].settle.is_none(), "already settled on its first entrance");
    assert!(replay[1].settle.is_none());
    assert!(replay[2].settle.is_some());
    for e in &replay {
        assert_eq!(anim.get(e.id).map(|i| i.animated), Some(AnimatedFlag::Animated));
    }
    assert_eq!(anim.get(ElementId(10)).map(|i| i.animated), Some(AnimatedFlag::NotAnimated));
}

#[test]
fn replay_settles_deep_items_only_once() {
    let mut anim = VisibilityAnimator::new();
    anim.register(ElementId(1), PageId::ROOT, cfg(OriginSide::Bottom, 0.9));
    assert!(enter(anim.on_intersection(ElementId(1), true)).settle.is_some());

    let replay = anim.replay_page(PageId::ROOT);
    assert_eq!(replay.len(), 1);
    assert!(replay[0].settle.is_none());
    assert!(anim.replay_page(PageId::ROOT)[0].settle.is_none());
}

#[test]
fn first_replay_of_a_fresh_page_settles() {
    let mut anim = VisibilityAnimator::new();
    anim.register(ElementId(1), PageId(2), cfg(OriginSide::Right, 0.6));
    let first = anim.replay_page(PageId(2));
    assert!(first[0].settle.is_some());
    assert!(anim.replay_page(PageId(2))[0].settle.is_none());
}

#[test]
fn suspended_page_ignores_signals_until_replay() {
    let mut anim = VisibilityAnimator::new();
    let page = PageId(1);
    anim.register(ElementId(5), PageId::ROOT, ElementConfig::default());
    anim.register(ElementId(6), page, cfg(OriginSide::Left, 0.9));
    anim.suspend_page(page);
    assert!(anim.is_suspended(page));

    // the page sliding in crosses the viewport edge both ways
    assert!(anim.on_intersection(ElementId(6), false).is_none());
    assert!(anim.on_intersection(ElementId(6), true).is_none());
    assert_eq!(anim.get(ElementId(6)).map(|i| i.animated), Some(AnimatedFlag::NotAnimated));
    // other pages keep reacting
    assert!(anim.on_intersection(ElementId(5), true).is_some());

    let replay = anim.replay_page(page);
    assert_eq!(replay.len(), 1);
    assert!(replay[0].settle.is_some(), "one entrance, with its settle");
    assert!(!anim.is_suspended(page));

    let again = enter(anim.on_intersection(ElementId(6), true));
    assert!(again.settle.is_none());
}

#[test]
fn unregistering_a_page_lifts_its_suspension() {
    let mut anim = VisibilityAnimator::new();
    anim.suspend_page(PageId(4));
    anim.register(ElementId(1), PageId(4), ElementConfig::default());
    anim.unregister_page(PageId(4));
    assert!(!anim.is_suspended(PageId(4)));
}

#[test]
fn unregister_page_drops_only_its_items() {
    let mut anim = VisibilityAnimator::new();
    anim.register(ElementId(1), PageId::ROOT, ElementConfig::default());
    anim.register(ElementId(2), PageId(3), ElementConfig::default());
    anim.register(ElementId(3), PageId(3), ElementConfig::default());
    assert_eq!(anim.unregister_page(PageId(3)), vec![ElementId(2), ElementId(3)]);
    assert_eq!(anim.len(), 1);
    assert_eq!(anim.items_on(PageId::ROOT).count(), 1);
}

#[test]
fn config_falls_back_to_defaults() {
    let c = ElementConfig::from_attributes(None, None);
    assert_eq!(c, ElementConfig::default());
    assert_eq!(c.origin, OriginSide::Center);
    assert_eq!(c.depth, 0.5);

    let c = ElementConfig::from_attributes(Some("diagonal"), Some("deep"));
    assert_eq!(c, ElementConfig::default());

    let c = ElementConfig::from_attributes(Some(" Left "), Some("1.7"));
    assert_eq!(c.origin, OriginSide::Left);
    assert_eq!(c.depth, 1.0);

    assert_eq!(
        "sideways".parse::<OriginSide>(),
        Err(ConfigError::UnknownOrigin("sideways".into()))
    );
    assert_eq!(parse_depth("NaN"), Err(ConfigError::InvalidDepth("NaN".into())));
    assert_eq!(parse_depth("0"), Ok(0.0));
}

#[test]
fn zero_depth_attribute_reads_as_default() {
    // an explicit "0" counts as unset, like an empty or unparsable value
    let c = ElementConfig::from_attributes(Some("top"), Some("0"));
    assert_eq!(c.depth, 0.5);
    let c = ElementConfig::from_attributes(None, Some("0.0"));
    assert_eq!(c.depth, 0.5);
    // negative depths clamp to zero and fall back the same way
    let c = ElementConfig::from_attributes(None, Some("-2"));
    assert_eq!(c.depth, 0.5);
    let c = ElementConfig::from_attributes(None, Some("0.05"));
    assert_eq!(c.depth, 0.05);
}

#[test]
fn entrance_tweens_land_on_identity() {
    let mut anim = VisibilityAnimator::new();
    anim.register(ElementId(1), PageId::ROOT, cfg(OriginSide::Bottom, 0.9));
    let e = enter(anim.on_intersection(ElementId(1), true));
    let t = e.transform_tween(1000.0);
    assert_eq!(t.sample(1000.0), e.from.transform);
    assert_eq!(t.sample(1600.0), Transform3d::IDENTITY);
    let o = e.opacity_tween(1000.0);
    assert_eq!(o.sample(1400.0), 1.0);

    let settle = e.settle.expect("settle");
    assert_eq!(settle.scale_at(0.0), 1.0);
    assert_eq!(settle.scale_at(400.0), 1.0);
    assert!((settle.scale_at(200.0) - 1.02).abs() < 1e-6);
}
