//! Single-threaded timer queue.
//!
//! Timers are plain entries keyed by deadline. Nothing fires on its own: the
//! event loop calls [`TimerQueue::drain_due`] once per iteration and handles
//! the returned payloads in deadline order. Because draining and cancelling
//! happen on the same thread, a cancelled timer can never be returned.

use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

/// Handle to a scheduled timer, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Deadline-ordered queue of pending timers carrying a payload each.
#[derive(Debug)]
pub struct TimerQueue<T> {
    /// Pending entries; the sequence number breaks ties between equal deadlines
    entries: BTreeMap<(Instant, u64), T>,
    /// Deadline lookup for cancellation
    deadlines: HashMap<u64, Instant>,
    next_seq: u64,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            deadlines: HashMap::new(),
            next_seq: 1,
        }
    }

    /// Schedule `payload` to become due `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, payload: T) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;

        let deadline = now + delay;
        self.entries.insert((deadline, seq), payload);
        self.deadlines.insert(seq, deadline);
        TimerId(seq)
    }

    /// Cancel a pending timer, returning its payload.
    ///
    /// Returns `None` if the timer already fired or was cancelled before.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let deadline = self.deadlines.remove(&id.0)?;
        self.entries.remove(&(deadline, id.0))
    }

    /// Whether the timer is still waiting to fire.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id.0)
    }

    /// Remove and return every timer whose deadline is at or before `now`.
    pub fn drain_due(&mut self, now: Instant) -> Vec<(TimerId, T)> {
        let mut due = Vec::new();
        while let Some(entry) = self.entries.first_entry() {
            let (deadline, seq) = *entry.key();
            if deadline > now {
                break;
            }
            let payload = entry.remove();
            self.deadlines.remove(&seq);
            due.push((TimerId(seq), payload));
        }
        due
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.keys().next().map(|(deadline, _)| *deadline)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.deadlines.clear();
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn drain_due_returns_nothing_before_deadline() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(t0, ms(100), "a");

        assert!(queue.drain_due(t0 + ms(99)).is_empty());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn drain_due_fires_at_exact_deadline() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();
        let id = queue.schedule(t0, ms(100), "a");

        let due = queue.drain_due(t0 + ms(100));
        assert_eq!(due, vec![(id, "a")]);
        assert!(queue.is_empty());
        assert!(!queue.is_pending(id));
    }

    #[test]
    fn drain_due_orders_by_deadline_then_schedule_order() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(t0, ms(300), "late");
        queue.schedule(t0, ms(100), "first");
        queue.schedule(t0, ms(100), "second");

        let payloads: Vec<_> = queue
            .drain_due(t0 + ms(500))
            .into_iter()
            .map(|(_, p)| p)
            .collect();
        assert_eq!(payloads, vec!["first", "second", "late"]);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();
        let keep = queue.schedule(t0, ms(50), "keep");
        let drop = queue.schedule(t0, ms(50), "drop");

        assert_eq!(queue.cancel(drop), Some("drop"));
        let due = queue.drain_due(t0 + ms(60));
        assert_eq!(due, vec![(keep, "keep")]);
    }

    #[test]
    fn cancel_after_fire_is_noop() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();
        let id = queue.schedule(t0, ms(10), 1);
        queue.drain_due(t0 + ms(10));

        assert_eq!(queue.cancel(id), None);
        assert_eq!(queue.cancel(id), None);
    }

    #[test]
    fn next_deadline_tracks_earliest_entry() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();
        assert_eq!(queue.next_deadline(), None);

        let a = queue.schedule(t0, ms(200), ());
        queue.schedule(t0, ms(400), ());
        assert_eq!(queue.next_deadline(), Some(t0 + ms(200)));

        queue.cancel(a);
        assert_eq!(queue.next_deadline(), Some(t0 + ms(400)));
    }
}
