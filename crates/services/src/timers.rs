//! Cancellable one-shot timers ordered by due time.
//!
//! Nothing here sleeps. The owner asks for the next timer due at or before
//! some instant and handles it; entries due at the same instant come out in
//! the order they were scheduled.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<T> {
    pub due: DateTime<Utc>,
    pub payload: T,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    due: DateTime<Utc>,
    seq: u64,
    payload: T,
}

#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    pending: Vec<Pending<T>>,
    next_seq: u64,
}

impl<T> TimerQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn schedule(&mut self, due: DateTime<Utc>, payload: T) -> TimerHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending { due, seq, payload });
        TimerHandle(seq)
    }

    /// Returns `false` if the timer already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|entry| entry.seq != handle.0);
        self.pending.len() != before
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Removes and returns the earliest timer due at or before `now`.
    pub fn pop_due(&mut self, now: DateTime<Utc>) -> Option<Fired<T>> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= now)
            .min_by_key(|(_, entry)| (entry.due, entry.seq))
            .map(|(index, _)| index)?;
        let entry = self.pending.swap_remove(index);
        Some(Fired {
            due: entry.due,
            payload: entry.payload,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
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
    use chrono::Duration;
    use mole_core::time::test_epoch;

    #[test]
    fn pops_in_due_then_schedule_order() {
        let now = test_epoch();
        let mut queue = TimerQueue::new();
        queue.schedule(now + Duration::milliseconds(200), "late");
        queue.schedule(now + Duration::milliseconds(100), "first");
        queue.schedule(now + Duration::milliseconds(100), "second");

        let later = now + Duration::seconds(1);
        let order: Vec<&str> = std::iter::from_fn(|| queue.pop_due(later))
            .map(|fired| fired.payload)
            .collect();
        assert_eq!(order, vec!["first", "second", "late"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn nothing_fires_before_due() {
        let now = test_epoch();
        let mut queue = TimerQueue::new();
        queue.schedule(now + Duration::milliseconds(600), ());

        assert!(queue.pop_due(now + Duration::milliseconds(599)).is_none());
        let fired = queue.pop_due(now + Duration::milliseconds(600)).unwrap();
        assert_eq!(fired.due, now + Duration::milliseconds(600));
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let now = test_epoch();
        let mut queue = TimerQueue::new();
        let handle = queue.schedule(now, 1);
        queue.schedule(now, 2);
        queue.schedule(now, 3);

        assert!(queue.cancel(handle));
        assert!(!queue.cancel(handle));

        assert_eq!(queue.pop_due(now).map(|f| f.payload), Some(2));
        assert_eq!(queue.pop_due(now).map(|f| f.payload), Some(3));
        assert!(queue.pop_due(now).is_none());
    }
}
