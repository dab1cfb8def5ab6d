//! Fixed-duration timers for hosts without `setTimeout`.
//!
//! Timers cannot be cancelled; every scheduled event is eventually returned
//! by [`TimerQueue::drain_due`]. Events with equal due times come back in
//! scheduling order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Pending<E> {
    due_ms: f64,
    seq: u64,
    event: E,
}

impl<E> PartialEq for Pending<E> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<E> Eq for Pending<E> {}

impl<E> PartialOrd for Pending<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Pending<E> {
    // reversed: BinaryHeap is a max-heap and we want the earliest first
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due_ms
            .total_cmp(&self.due_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

pub struct TimerQueue<E> {
    heap: BinaryHeap<Pending<E>>,
    seq: u64,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    pub fn schedule(&mut self, due_ms: f64, event: E) {
        self.heap.push(Pending {
            due_ms,
            seq: self.seq,
            event,
        });
        self.seq += 1;
    }

    #[inline]
    pub fn next_due_ms(&self) -> Option<f64> {
        self.heap.peek().map(|p| p.due_ms)
    }

    /// Pop the earliest event if it is due at `now_ms`.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<(f64, E)> {
        if self.next_due_ms()? > now_ms {
            return None;
        }
        self.heap.pop().map(|p| (p.due_ms, p.event))
    }

    pub fn drain_due(&mut self, now_ms: f64) -> Vec<(f64, E)> {
        let mut out = Vec::new();
        while let Some(due) = self.pop_due(now_ms) {
            out.push(due);
        }
        out
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
