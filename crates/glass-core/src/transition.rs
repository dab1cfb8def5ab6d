//! Page transition state machine and back-history stack.
//!
//! At most one transition is in flight. `navigate` and `go_back` return
//! `None` (and change nothing) while one is running; the host must call
//! [`PageTransitions::complete`] when the transition's timer fires. The
//! history stack always holds at least the root entry.

use crate::constants::*;
use crate::easing::Easing;
use crate::tween::{Lerp, Tween};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    pub const ROOT: PageId = PageId(0);

    /// Unique DOM id for pages created by navigation.
    pub fn dom_id(&self) -> String {
        format!("page-{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionState {
    Idle,
    Transitioning(Direction),
}

impl TransitionState {
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, TransitionState::Idle)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistoryEntry {
    pub page: PageId,
    pub scroll_y: f64,
}

/// Horizontal offset (percent of page width), scale and opacity of a page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PagePose {
    pub offset_pct: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl PagePose {
    pub const ACTIVE: Self = Self {
        offset_pct: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };
    pub const ENTERING: Self = Self {
        offset_pct: PAGE_ENTER_OFFSET_PCT,
        scale: 1.0,
        opacity: PAGE_DIM_OPACITY,
    };
    pub const RECEDED: Self = Self {
        offset_pct: PAGE_RECEDE_OFFSET_PCT,
        scale: PAGE_RECEDE_SCALE,
        opacity: PAGE_DIM_OPACITY,
    };
    pub const DEPARTED: Self = Self {
        offset_pct: PAGE_ENTER_OFFSET_PCT,
        scale: 1.0,
        opacity: 1.0,
    };
}

impl Lerp for PagePose {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        Self {
            offset_pct: Lerp::lerp(&self.offset_pct, &to.offset_pct, t),
            scale: Lerp::lerp(&self.scale, &to.scale, t),
            opacity: Lerp::lerp(&self.opacity, &to.opacity, t),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageTransition {
    pub direction: Direction,
    pub outgoing: PageId,
    pub incoming: PageId,
    pub outgoing_from: PagePose,
    pub outgoing_to: PagePose,
    pub incoming_from: PagePose,
    pub incoming_to: PagePose,
    pub duration_ms: f64,
    pub easing: Easing,
    /// Scroll offset to restore before the transition lands.
    pub restore_scroll_y: f64,
    /// Navigation target handed to the content collaborator (forward only).
    pub target: Option<String>,
}

impl PageTransition {
    pub fn incoming_tween(&self, start_ms: f64) -> Tween<PagePose> {
        Tween::new(
            self.incoming_from,
            self.incoming_to,
            start_ms,
            self.duration_ms,
            self.easing,
        )
    }

    pub fn outgoing_tween(&self, start_ms: f64) -> Tween<PagePose> {
        Tween::new(
            self.outgoing_from,
            self.outgoing_to,
            start_ms,
            self.duration_ms,
            self.easing,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionOutcome {
    pub direction: Direction,
    /// Page now in the primary layout position.
    pub active: PageId,
    /// Page to hide.
    pub hidden: PageId,
    /// Page no longer reachable through history; the host may drop it.
    pub discard: Option<PageId>,
    /// Whether the active page's entrance animations should replay.
    pub replay: bool,
}

#[derive(Debug)]
pub struct PageTransitions {
    state: TransitionState,
    current: PageId,
    history: Vec<HistoryEntry>,
    in_flight: Option<PageTransition>,
    next_page: u32,
}

impl Default for PageTransitions {
    fn default() -> Self {
        Self::new()
    }
}

impl PageTransitions {
    pub fn new() -> Self {
        Self {
            state: TransitionState::Idle,
            current: PageId::ROOT,
            history: vec![HistoryEntry {
                page: PageId::ROOT,
                scroll_y: 0.0,
            }],
            in_flight: None,
            next_page: 1,
        }
    }

    #[inline]
    pub fn state(&self) -> TransitionState {
        self.state
    }

    #[inline]
    pub fn current(&self) -> PageId {
        self.current
    }

    #[inline]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn in_flight(&self) -> Option<&PageTransition> {
        self.in_flight.as_ref()
    }

    /// Begin a forward transition to a freshly identified page.
    pub fn navigate(&mut self, target: &str, scroll_y: f64) -> Option<PageTransition> {
        if !self.state.is_idle() {
            log::debug!("[nav] navigate({target}) dropped: transition in flight");
            return None;
        }
        let outgoing = self.current;
        self.history.push(HistoryEntry {
            page: outgoing,
            scroll_y,
        });
        let incoming = PageId(self.next_page);
        self.next_page += 1;
        self.current = incoming;
        log::info!("[nav] {outgoing:?} -> {incoming:?} ({target}), depth {}", self.history.len());
        Some(self.begin(PageTransition {
            direction: Direction::Forward,
            outgoing,
            incoming,
            outgoing_from: PagePose::ACTIVE,
            outgoing_to: PagePose::RECEDED,
            incoming_from: PagePose::ENTERING,
            incoming_to: PagePose::ACTIVE,
            duration_ms: PAGE_TRANSITION_MS,
            easing: Easing::Standard,
            restore_scroll_y: 0.0,
            target: Some(target.to_string()),
        }))
    }

    /// Begin a backward transition to the page on top of the history stack.
    /// The root entry is never popped.
    pub fn go_back(&mut self) -> Option<PageTransition> {
        if !self.state.is_idle() {
            log::debug!("[nav] back dropped: transition in flight");
            return None;
        }
        if self.history.len() <= 1 {
            log::debug!("[nav] back dropped: at root");
            return None;
        }
        let entry = self.history.pop()?;
        let outgoing = self.current;
        self.current = entry.page;
        log::info!("[nav] back {outgoing:?} -> {:?}, depth {}", entry.page, self.history.len());
        Some(self.begin(PageTransition {
            direction: Direction::Backward,
            outgoing,
            incoming: entry.page,
            outgoing_from: PagePose::ACTIVE,
            outgoing_to: PagePose::DEPARTED,
            incoming_from: PagePose::RECEDED,
            incoming_to: PagePose::ACTIVE,
            duration_ms: PAGE_TRANSITION_MS,
            easing: Easing::Standard,
            restore_scroll_y: entry.scroll_y,
            target: None,
        }))
    }

    fn begin(&mut self, transition: PageTransition) -> PageTransition {
        self.state = TransitionState::Transitioning(transition.direction);
        self.in_flight = Some(transition.clone());
        transition
    }

    /// Land the in-flight transition and return to `Idle`.
    pub fn complete(&mut self) -> Option<TransitionOutcome> {
        let t = self.in_flight.take()?;
        self.state = TransitionState::Idle;
        let outcome = match t.direction {
            Direction::Forward => TransitionOutcome {
                direction: t.direction,
                active: t.incoming,
                hidden: t.outgoing,
                discard: None,
                replay: true,
            },
            Direction::Backward => {
                let referenced = t.outgoing == self.current
                    || self.history.iter().any(|e| e.page == t.outgoing);
                TransitionOutcome {
                    direction: t.direction,
                    active: t.incoming,
                    hidden: t.outgoing,
                    discard: (!referenced).then_some(t.outgoing),
                    replay: false,
                }
            }
        };
        Some(outcome)
    }
}
