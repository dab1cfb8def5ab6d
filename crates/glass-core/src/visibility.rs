//! Viewport entrance/exit lifecycle.
//!
//! Each registered item flips between `Hidden` and `Visible` on intersection
//! signals. Every signal yields a fresh command that overwrites whatever the
//! item was animating toward; there is no queue and no cancellation, so rapid
//! flicker can snap instead of blending. That is accepted.

use crate::config::ElementConfig;
use crate::constants::*;
use crate::easing::Easing;
use crate::element::ElementId;
use crate::math::{entrance_offset, Transform3d};
use crate::transition::PageId;
use crate::tween::{Lerp, Tween};
use fnv::{FnvHashMap, FnvHashSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

/// Whether the one-time entrance (and its settle bounce) has played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatedFlag {
    NotAnimated,
    Animated,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityItem {
    pub id: ElementId,
    pub page: PageId,
    pub config: ElementConfig,
    pub visibility: Visibility,
    pub animated: AnimatedFlag,
}

/// Transform plus opacity an element is animated to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleTarget {
    pub transform: Transform3d,
    pub opacity: f32,
}

impl StyleTarget {
    pub const SHOWN: Self = Self {
        transform: Transform3d::IDENTITY,
        opacity: 1.0,
    };

    pub fn offstage(config: &ElementConfig) -> Self {
        Self {
            transform: entrance_offset(config.origin, config.depth),
            opacity: 0.0,
        }
    }
}

impl Lerp for StyleTarget {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        Self {
            transform: self.transform.lerp(&to.transform, t),
            opacity: Lerp::lerp(&self.opacity, &to.opacity, t),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub transform_ms: f64,
    pub opacity_ms: f64,
    pub transform_easing: Easing,
    pub opacity_easing: Easing,
}

/// Scale 1 -> peak -> 1, played once the entrance transform lands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settle {
    /// Measured from the start of the entrance transition.
    pub delay_ms: f64,
    pub duration_ms: f64,
    pub peak_scale: f32,
    pub easing: Easing,
}

impl Settle {
    fn after_entrance() -> Self {
        Self {
            delay_ms: ENTER_TRANSFORM_MS,
            duration_ms: SETTLE_MS,
            peak_scale: SETTLE_PEAK_SCALE,
            easing: Easing::Elastic,
        }
    }

    /// Scale at `elapsed_ms` into the bounce: up for the first half, back down
    /// for the second, both halves eased.
    pub fn scale_at(&self, elapsed_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 || elapsed_ms <= 0.0 || elapsed_ms >= self.duration_ms {
            return 1.0;
        }
        let half = self.duration_ms / 2.0;
        let (from, to, local): (f32, f32, f64) = if elapsed_ms < half {
            (1.0, self.peak_scale, elapsed_ms / half)
        } else {
            (self.peak_scale, 1.0, (elapsed_ms - half) / half)
        };
        Lerp::lerp(&from, &to, self.easing.apply(local as f32))
    }
}

/// Set `from` immediately, then on the next frame transition to `to`.
#[derive(Clone, Debug, PartialEq)]
pub struct Entrance {
    pub id: ElementId,
    /// Extra wait before the transition starts (staggered replays).
    pub delay_ms: f64,
    pub from: StyleTarget,
    pub to: StyleTarget,
    pub timing: Timing,
    pub settle: Option<Settle>,
}

impl Entrance {
    pub fn transform_tween(&self, start_ms: f64) -> Tween<Transform3d> {
        Tween::new(
            self.from.transform,
            self.to.transform,
            start_ms + self.delay_ms,
            self.timing.transform_ms,
            self.timing.transform_easing,
        )
    }

    pub fn opacity_tween(&self, start_ms: f64) -> Tween<f32> {
        Tween::new(
            self.from.opacity,
            self.to.opacity,
            start_ms + self.delay_ms,
            self.timing.opacity_ms,
            self.timing.opacity_easing,
        )
    }
}

/// Transition from wherever the element currently is to `to`.
#[derive(Clone, Debug, PartialEq)]
pub struct Exit {
    pub id: ElementId,
    pub to: StyleTarget,
    pub timing: Timing,
}

#[derive(Clone, Debug, PartialEq)]
pub enum VisibilityCommand {
    Enter(Entrance),
    Exit(Exit),
}

impl VisibilityCommand {
    pub fn id(&self) -> ElementId {
        match self {
            VisibilityCommand::Enter(e) => e.id,
            VisibilityCommand::Exit(e) => e.id,
        }
    }
}

#[derive(Debug, Default)]
pub struct VisibilityAnimator {
    items: FnvHashMap<ElementId, VisibilityItem>,
    // registration (document) order, used for staggering
    order: Vec<ElementId>,
    // pages whose intersection signals are ignored until their replay
    suspended: FnvHashSet<PageId>,
}

impl VisibilityAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: ElementId, page: PageId, config: ElementConfig) {
        let item = VisibilityItem {
            id,
            page,
            config,
            visibility: Visibility::Hidden,
            animated: AnimatedFlag::NotAnimated,
        };
        if self.items.insert(id, item).is_none() {
            self.order.push(id);
        }
    }

    /// Forget every item that belongs to `page`; returns their ids.
    pub fn unregister_page(&mut self, page: PageId) -> Vec<ElementId> {
        let removed: Vec<ElementId> = self
            .order
            .iter()
            .copied()
            .filter(|id| self.items.get(id).map(|i| i.page) == Some(page))
            .collect();
        for id in &removed {
            self.items.remove(id);
        }
        self.order.retain(|id| self.items.contains_key(id));
        self.suspended.remove(&page);
        removed
    }

    /// Ignore intersection signals for `page` until [`Self::replay_page`]
    /// runs on it. Used while a freshly mounted page slides into place.
    pub fn suspend_page(&mut self, page: PageId) {
        self.suspended.insert(page);
    }

    #[inline]
    pub fn is_suspended(&self, page: PageId) -> bool {
        self.suspended.contains(&page)
    }

    #[inline]
    pub fn get(&self, id: ElementId) -> Option<&VisibilityItem> {
        self.items.get(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items_on(&self, page: PageId) -> impl Iterator<Item = &VisibilityItem> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.items.get(id))
            .filter(move |i| i.page == page)
    }

    /// Apply an intersection signal. Unknown ids and items on a suspended
    /// page are ignored.
    pub fn on_intersection(&mut self, id: ElementId, intersecting: bool) -> Option<VisibilityCommand> {
        let item = self.items.get_mut(&id)?;
        if self.suspended.contains(&item.page) {
            return None;
        }
        let config = item.config;
        let easing = Easing::for_depth(config.depth);
        if intersecting {
            let first = item.animated == AnimatedFlag::NotAnimated;
            item.visibility = Visibility::Visible;
            item.animated = AnimatedFlag::Animated;
            let settle = (first && config.depth > SETTLE_DEPTH).then(Settle::after_entrance);
            Some(VisibilityCommand::Enter(entrance(id, &config, 0.0, settle)))
        } else {
            item.visibility = Visibility::Hidden;
            Some(VisibilityCommand::Exit(Exit {
                id,
                to: StyleTarget::offstage(&config),
                timing: Timing {
                    transform_ms: EXIT_MS,
                    opacity_ms: EXIT_MS,
                    transform_easing: easing,
                    opacity_easing: Easing::EaseIn,
                },
            }))
        }
    }

    /// Forced, staggered entrance of every item on a page that just became
    /// active, regardless of whether each item already animated. The settle
    /// bounce still plays at most once per item. Lifts any suspension.
    pub fn replay_page(&mut self, page: PageId) -> Vec<Entrance> {
        self.suspended.remove(&page);
        let ids: Vec<ElementId> = self.items_on(page).map(|i| i.id).collect();
        let mut out = Vec::with_capacity(ids.len());
        for (n, id) in ids.into_iter().enumerate() {
            let Some(item) = self.items.get_mut(&id) else {
                continue;
            };
            let first = item.animated == AnimatedFlag::NotAnimated;
            item.visibility = Visibility::Visible;
            item.animated = AnimatedFlag::Animated;
            let config = item.config;
            let settle = (first && config.depth > SETTLE_DEPTH).then(Settle::after_entrance);
            out.push(entrance(id, &config, n as f64 * REPLAY_STAGGER_MS, settle));
        }
        log::debug!("[visibility] replay {} items on {:?}", out.len(), page);
        out
    }
}

fn entrance(id: ElementId, config: &ElementConfig, delay_ms: f64, settle: Option<Settle>) -> Entrance {
    Entrance {
        id,
        delay_ms,
        from: StyleTarget::offstage(config),
        to: StyleTarget::SHOWN,
        timing: Timing {
            transform_ms: ENTER_TRANSFORM_MS,
            opacity_ms: ENTER_OPACITY_MS,
            transform_easing: Easing::for_depth(config.depth),
            opacity_easing: Easing::EaseOut,
        },
        settle,
    }
}
