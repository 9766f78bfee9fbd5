//! Cooperative, frame-polled timers.
//!
//! A [`Timeline`] replaces fire-and-forget host timeouts: every scheduled
//! entry gets a [`TimerId`] that can be cancelled, and entries only fire when
//! the owner polls with [`Timeline::pop_due`]. Time is a `Duration` since page
//! start and never runs backwards.

use fnv::FnvHashMap;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Clone, Debug)]
struct Pending<T> {
    due: Duration,
    payload: T,
}

#[derive(Clone, Debug)]
pub struct Timeline<T> {
    now: Duration,
    next_id: u64,
    pending: FnvHashMap<TimerId, Pending<T>>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: FnvHashMap::default(),
        }
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Schedule `payload` to fire `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.insert(
            id,
            Pending {
                due: self.now + delay,
                payload,
            },
        );
        id
    }

    /// Remove a pending entry. Returns its payload if it had not fired yet.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        self.pending.remove(&id).map(|p| p.payload)
    }

    #[inline]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.contains_key(&id)
    }

    #[cfg(test)]
    fn due_at(&self, id: TimerId) -> Option<Duration> {
        self.pending.get(&id).map(|p| p.due)
    }

    #[cfg(test)]
    fn next_due(&self) -> Option<Duration> {
        self.pending.values().map(|p| p.due).min()
    }

    /// Pop the earliest entry due at or before `until`.
    ///
    /// The clock moves to that entry's due time, so anything scheduled while
    /// handling it is timed from when it was supposed to fire, not from when
    /// the frame happened to poll. Ties fire in scheduling order.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, T)> {
        let id = self
            .pending
            .iter()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(id, p)| (p.due, **id))
            .map(|(id, _)| *id)?;
        let entry = self.pending.remove(&id)?;
        self.now = self.now.max(entry.due);
        Some((id, entry.payload))
    }

    /// Move the clock forward without firing anything.
    pub fn catch_up(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn fires_in_due_order() {
        let mut t = Timeline::new();
        t.schedule(ms(300), "b");
        t.schedule(ms(100), "a");
        t.schedule(ms(900), "c");

        let mut fired = Vec::new();
        while let Some((_, p)) = t.pop_due(ms(500)) {
            fired.push(p);
        }
        assert_eq!(fired, vec!["a", "b"]);
        assert_eq!(t.len(), 1);
        assert_eq!(t.next_due(), Some(ms(900)));
    }

    #[test]
    fn ties_fire_in_scheduling_order() {
        let mut t = Timeline::new();
        t.schedule(ms(10), 1);
        t.schedule(ms(10), 2);
        assert_eq!(t.pop_due(ms(10)).map(|(_, p)| p), Some(1));
        assert_eq!(t.pop_due(ms(10)).map(|(_, p)| p), Some(2));
    }

    #[test]
    fn cancelled_entries_never_fire() {
        let mut t = Timeline::new();
        let id = t.schedule(ms(50), ());
        assert!(t.is_pending(id));
        assert_eq!(t.cancel(id), Some(()));
        assert!(!t.is_pending(id));
        assert!(t.pop_due(ms(1_000)).is_none());
        assert_eq!(t.cancel(id), None);
    }

    #[test]
    fn nested_schedule_is_timed_from_due_time() {
        let mut t = Timeline::new();
        t.schedule(ms(500), 0);
        // Frame arrives late, well past both deadlines.
        let (_, _) = t.pop_due(ms(2_000)).unwrap();
        assert_eq!(t.now(), ms(500));
        let id = t.schedule(ms(300), 1);
        assert_eq!(t.due_at(id), Some(ms(800)));
        assert_eq!(t.pop_due(ms(2_000)).map(|(_, p)| p), Some(1));
        t.catch_up(ms(2_000));
        assert_eq!(t.now(), ms(2_000));
    }

    #[test]
    fn clock_never_runs_backwards() {
        let mut t: Timeline<()> = Timeline::new();
        t.catch_up(ms(100));
        t.catch_up(ms(40));
        assert_eq!(t.now(), ms(100));
    }
}
