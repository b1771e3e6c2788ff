//! The timer queue.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, TimeDelta, Utc};
use tracing::trace;

use crate::token::TurnToken;

/// Handle returned by [`Scheduler::schedule`], used to cancel a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// A timer waiting in (or popped from) the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTimer<T> {
    /// Handle of this timer.
    pub id: TimerId,
    /// Instant at which the timer becomes due.
    pub due: DateTime<Utc>,
    /// Token current when the timer was scheduled.
    pub token: TurnToken,
    /// What to do when it fires.
    pub payload: T,
}

/// Cooperative timer queue ordered by due instant, then by insertion order.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    queue: BTreeMap<(DateTime<Utc>, TimerId), ScheduledTimer<T>>,
    index: HashMap<TimerId, DateTime<Utc>>,
    next_id: u64,
}

impl<T> Scheduler<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: BTreeMap::new(),
            index: HashMap::new(),
            next_id: 0,
        }
    }

    /// Schedules `payload` to become due at `due`.
    pub fn schedule(&mut self, due: DateTime<Utc>, token: TurnToken, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        trace!(timer = id.0, %due, epoch = token.epoch, turn = token.turn, "timer scheduled");
        self.index.insert(id, due);
        self.queue.insert(
            (due, id),
            ScheduledTimer {
                id,
                due,
                token,
                payload,
            },
        );
        id
    }

    /// Schedules `payload` to become due `delay` after `now`.
    pub fn schedule_after(
        &mut self,
        now: DateTime<Utc>,
        delay: TimeDelta,
        token: TurnToken,
        payload: T,
    ) -> TimerId {
        let due = now
            .checked_add_signed(delay)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.schedule(due, token, payload)
    }

    /// Removes a pending timer. Returns whether it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.index.remove(&id) {
            Some(due) => self.queue.remove(&(due, id)).is_some(),
            None => false,
        }
    }

    /// Removes every pending timer for which `predicate` holds and returns
    /// how many were removed.
    pub fn cancel_matching(&mut self, predicate: impl Fn(&ScheduledTimer<T>) -> bool) -> usize {
        let doomed: Vec<(DateTime<Utc>, TimerId)> = self
            .queue
            .iter()
            .filter(|(_, timer)| predicate(timer))
            .map(|(key, _)| *key)
            .collect();
        for key in &doomed {
            self.queue.remove(key);
            self.index.remove(&key.1);
        }
        doomed.len()
    }

    /// Removes every pending timer and returns how many there were.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.queue.len();
        self.queue.clear();
        self.index.clear();
        cancelled
    }

    /// Removes and returns the earliest timer due at or before `now`.
    pub fn pop_due(&mut self, now: DateTime<Utc>) -> Option<ScheduledTimer<T>> {
        let (&(due, id), _) = self.queue.first_key_value()?;
        if due > now {
            return None;
        }
        self.index.remove(&id);
        self.queue.remove(&(due, id))
    }

    /// The instant the next timer becomes due.
    #[must_use]
    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        self.queue.first_key_value().map(|((due, _), _)| *due)
    }

    /// Pending timers in firing order.
    pub fn pending(&self) -> impl Iterator<Item = &ScheduledTimer<T>> {
        self.queue.values()
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether no timer is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()
    }

    fn ms(n: i64) -> TimeDelta {
        TimeDelta::milliseconds(n)
    }

    #[test]
    fn test_pop_due_returns_timers_in_due_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_after(t0(), ms(300), TurnToken::INITIAL, "c");
        scheduler.schedule_after(t0(), ms(100), TurnToken::INITIAL, "a");
        scheduler.schedule_after(t0(), ms(200), TurnToken::INITIAL, "b");

        let now = t0() + ms(1_000);
        let fired: Vec<&str> = std::iter::from_fn(|| scheduler.pop_due(now))
            .map(|timer| timer.payload)
            .collect();

        assert_eq!(fired, vec!["a", "b", "c"]);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_equal_due_times_fire_in_insertion_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(t0(), TurnToken::INITIAL, 1);
        scheduler.schedule(t0(), TurnToken::INITIAL, 2);
        scheduler.schedule(t0(), TurnToken::INITIAL, 3);

        let fired: Vec<i32> = std::iter::from_fn(|| scheduler.pop_due(t0()))
            .map(|timer| timer.payload)
            .collect();

        assert_eq!(fired, vec![1, 2, 3]);
    }

    #[test]
    fn test_pop_due_ignores_future_timers() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_after(t0(), ms(500), TurnToken::INITIAL, ());

        assert!(scheduler.pop_due(t0() + ms(499)).is_none());
        assert_eq!(scheduler.next_due(), Some(t0() + ms(500)));
        assert!(scheduler.pop_due(t0() + ms(500)).is_some());
    }

    #[test]
    fn test_cancel_removes_only_that_timer() {
        let mut scheduler = Scheduler::new();
        let keep = scheduler.schedule(t0(), TurnToken::INITIAL, "keep");
        let drop = scheduler.schedule(t0(), TurnToken::INITIAL, "drop");

        assert!(scheduler.cancel(drop));
        assert!(!scheduler.cancel(drop));
        assert_eq!(scheduler.len(), 1);

        let timer = scheduler.pop_due(t0()).unwrap();
        assert_eq!(timer.id, keep);
        assert_eq!(timer.payload, "keep");
    }

    #[test]
    fn test_cancel_matching_filters_by_token() {
        let mut scheduler = Scheduler::new();
        let old = TurnToken::INITIAL.next_turn();
        let new = old.next_turn();
        scheduler.schedule(t0(), old, "stale-1");
        scheduler.schedule(t0() + ms(10), new, "fresh");
        scheduler.schedule(t0() + ms(20), old, "stale-2");

        let removed = scheduler.cancel_matching(|timer| timer.token == old);

        assert_eq!(removed, 2);
        let remaining: Vec<&str> = scheduler.pending().map(|timer| timer.payload).collect();
        assert_eq!(remaining, vec!["fresh"]);
    }

    #[test]
    fn test_cancel_all_empties_queue() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule(t0(), TurnToken::INITIAL, ());
        scheduler.schedule(t0(), TurnToken::INITIAL, ());

        assert_eq!(scheduler.cancel_all(), 2);
        assert!(scheduler.is_empty());
        assert!(scheduler.next_due().is_none());
        assert!(!scheduler.cancel(id));
    }

    #[test]
    fn test_timers_scheduled_while_draining_fire_if_due() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(t0(), TurnToken::INITIAL, 0_u32);
        let now = t0() + ms(100);

        let mut fired = Vec::new();
        while let Some(timer) = scheduler.pop_due(now) {
            fired.push(timer.payload);
            if timer.payload < 3 {
                scheduler.schedule_after(timer.due, ms(40), timer.token, timer.payload + 1);
            }
        }

        // 0 @ t0, 1 @ +40, 2 @ +80; 3 would be @ +120.
        assert_eq!(fired, vec![0, 1, 2]);
        assert_eq!(scheduler.next_due(), Some(t0() + ms(120)));
    }
}
