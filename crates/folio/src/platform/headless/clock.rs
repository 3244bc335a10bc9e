//! Virtual time for headless sessions.
//!
//! Timers are one-shot and only fire when time is advanced explicitly, so
//! settle delays run instantly and in a deterministic order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug)]
struct TimerEntry<T> {
    fire_at_ms: u64,
    /// Registration order, for stable firing among equal deadlines.
    seq: u64,
    payload: T,
}

impl<T> PartialEq for TimerEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.fire_at_ms == other.fire_at_ms && self.seq == other.seq
    }
}

impl<T> Eq for TimerEntry<T> {}

impl<T> PartialOrd for TimerEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TimerEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap on (fire_at_ms, seq)
        other
            .fire_at_ms
            .cmp(&self.fire_at_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Debug)]
pub struct VirtualClock<T> {
    current_time_ms: u64,
    next_seq: u64,
    pending: BinaryHeap<TimerEntry<T>>,
}

impl<T> VirtualClock<T> {
    pub fn new() -> Self {
        Self {
            current_time_ms: 0,
            next_seq: 0,
            pending: BinaryHeap::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.current_time_ms
    }

    pub fn schedule(&mut self, payload: T, delay_ms: u32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(TimerEntry {
            fire_at_ms: self.current_time_ms + u64::from(delay_ms),
            seq,
            payload,
        });
    }

    /// Advance virtual time and return the payloads of every timer that
    /// came due, in firing order.
    pub fn advance_by(&mut self, ms: u64) -> Vec<T> {
        let target_time = self.current_time_ms + ms;
        let mut fired = Vec::new();
        while self
            .pending
            .peek()
            .is_some_and(|entry| entry.fire_at_ms <= target_time)
        {
            if let Some(entry) = self.pending.pop() {
                fired.push(entry.payload);
            }
        }
        self.current_time_ms = target_time;
        fired
    }

    pub fn time_to_next(&self) -> Option<u64> {
        self.pending
            .peek()
            .map(|entry| entry.fire_at_ms.saturating_sub(self.current_time_ms))
    }

    /// Drop every scheduled timer.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl<T> Default for VirtualClock<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_starts_at_zero() {
        let clock = VirtualClock::<()>::new();
        assert_eq!(clock.now_ms(), 0);
        assert_eq!(clock.time_to_next(), None);
    }

    #[test]
    fn timer_fires_once_at_deadline() {
        let mut clock = VirtualClock::new();
        clock.schedule("about", 100);
        assert!(clock.advance_by(99).is_empty());
        assert_eq!(clock.time_to_next(), Some(1));
        assert_eq!(clock.advance_by(1), vec!["about"]);
        assert!(clock.advance_by(1000).is_empty());
        assert_eq!(clock.now_ms(), 1100);
    }

    #[test]
    fn equal_deadlines_fire_in_registration_order() {
        let mut clock = VirtualClock::new();
        clock.schedule(1, 100);
        clock.schedule(2, 50);
        clock.schedule(3, 100);
        assert_eq!(clock.advance_by(100), vec![2, 1, 3]);
    }

    #[test]
    fn clear_drops_everything() {
        let mut clock = VirtualClock::new();
        clock.schedule((), 10);
        clock.clear();
        assert!(clock.advance_by(10).is_empty());
    }
}
