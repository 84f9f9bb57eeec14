// SPDX-License-Identifier: MPL-2.0
//! Virtual-time timer queue for the single-threaded page loop.
//!
//! Every widget timer (slide autoplay, clock refresh, notification
//! retirement, form feedback) is an entry in one [`Scheduler`]. Entries carry
//! the message to deliver when they fire; the app pops due messages in order
//! and runs each handler to completion before the next one.
//!
//! Time only moves when the host advances it, which keeps widget behavior
//! deterministic under test.

use chrono::{DateTime, Local, TimeDelta};
use std::time::Duration;

/// Shortest period accepted for a repeating timer.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Ownership token for a scheduled callback.
///
/// Handles are never reused, so cancelling a stale handle is harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct Entry<M> {
    handle: TimerHandle,
    due: Duration,
    period: Option<Duration>,
    message: M,
}

/// Timer queue driven by virtual time.
#[derive(Debug, Clone)]
pub struct Scheduler<M> {
    now: Duration,
    epoch: DateTime<Local>,
    next_handle: u64,
    entries: Vec<Entry<M>>,
}

impl<M: Clone> Scheduler<M> {
    /// Creates an empty queue whose wall clock starts at `epoch`.
    #[must_use]
    pub fn new(epoch: DateTime<Local>) -> Self {
        Self {
            now: Duration::ZERO,
            epoch,
            next_handle: 0,
            entries: Vec::new(),
        }
    }

    /// Schedules `message` once, `delay` from now.
    pub fn set_timeout(&mut self, delay: Duration, message: M) -> TimerHandle {
        self.insert(delay, None, message)
    }

    /// Schedules `message` every `period`, first firing one period from now.
    pub fn set_interval(&mut self, period: Duration, message: M) -> TimerHandle {
        let period = period.max(MIN_PERIOD);
        self.insert(period, Some(period), message)
    }

    /// Cancels the timer held in `slot` (if any), then starts a new interval
    /// and stores its handle back into `slot`.
    pub fn restart_interval(
        &mut self,
        slot: &mut Option<TimerHandle>,
        period: Duration,
        message: M,
    ) -> TimerHandle {
        self.cancel_slot(slot);
        let handle = self.set_interval(period, message);
        *slot = Some(handle);
        handle
    }

    /// Cancels the timer held in `slot` (if any), then starts a new timeout
    /// and stores its handle back into `slot`.
    pub fn restart_timeout(
        &mut self,
        slot: &mut Option<TimerHandle>,
        delay: Duration,
        message: M,
    ) -> TimerHandle {
        self.cancel_slot(slot);
        let handle = self.set_timeout(delay, message);
        *slot = Some(handle);
        handle
    }

    /// Cancels and clears the timer held in `slot`.
    pub fn cancel_slot(&mut self, slot: &mut Option<TimerHandle>) -> bool {
        slot.take().is_some_and(|handle| self.cancel(handle))
    }

    /// Cancels a pending timer. Returns `false` if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.handle != handle);
        self.entries.len() != before
    }

    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|entry| entry.handle == handle)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.entries.len()
    }

    /// Elapsed virtual time since the queue was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Wall-clock time corresponding to [`Self::now`].
    #[must_use]
    pub fn wall_clock(&self) -> DateTime<Local> {
        let elapsed = TimeDelta::from_std(self.now).unwrap_or(TimeDelta::MAX);
        self.epoch
            .checked_add_signed(elapsed)
            .unwrap_or(self.epoch)
    }

    /// Due time of the earliest pending timer.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.entries.iter().map(|entry| entry.due).min()
    }

    /// Pops the earliest timer due at or before `until`, moving the clock to
    /// its due time. Repeating timers are re-armed for their next period.
    ///
    /// Timers due at the same instant fire in creation order.
    pub fn pop_due(&mut self, until: Duration) -> Option<M> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= until)
            .min_by_key(|(_, entry)| (entry.due, entry.handle))
            .map(|(index, _)| index)?;

        let entry = &mut self.entries[index];
        self.now = self.now.max(entry.due);
        let message = entry.message.clone();
        match entry.period {
            Some(period) => entry.due += period,
            None => {
                self.entries.swap_remove(index);
            }
        }
        Some(message)
    }

    /// Moves the clock forward to `until` without firing anything.
    ///
    /// Callers drain [`Self::pop_due`] first; the clock never goes backwards.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    fn insert(&mut self, delay: Duration, period: Option<Duration>, message: M) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push(Entry {
            handle,
            due: self.now + delay,
            period,
            message,
        });
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn scheduler() -> Scheduler<&'static str> {
        let epoch = Local.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap();
        Scheduler::new(epoch)
    }

    fn drain(s: &mut Scheduler<&'static str>, until: Duration) -> Vec<&'static str> {
        let mut fired = Vec::new();
        while let Some(message) = s.pop_due(until) {
            fired.push(message);
        }
        s.settle(until);
        fired
    }

    #[test]
    fn timeout_fires_once_at_due_time() {
        let mut s = scheduler();
        s.set_timeout(Duration::from_millis(300), "done");

        assert!(drain(&mut s, Duration::from_millis(299)).is_empty());
        assert_eq!(drain(&mut s, Duration::from_millis(300)), vec!["done"]);
        assert_eq!(s.pending_count(), 0);
    }

    #[test]
    fn interval_rearms_each_period() {
        let mut s = scheduler();
        s.set_interval(Duration::from_millis(100), "tick");

        assert_eq!(drain(&mut s, Duration::from_millis(350)).len(), 3);
        assert_eq!(s.now(), Duration::from_millis(350));
        assert_eq!(s.next_due(), Some(Duration::from_millis(400)));
    }

    #[test]
    fn timers_fire_in_due_then_creation_order() {
        let mut s = scheduler();
        s.set_timeout(Duration::from_millis(200), "late");
        s.set_timeout(Duration::from_millis(100), "first");
        s.set_timeout(Duration::from_millis(100), "second");

        assert_eq!(
            drain(&mut s, Duration::from_secs(1)),
            vec!["first", "second", "late"]
        );
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut s = scheduler();
        let handle = s.set_timeout(Duration::from_millis(10), "nope");

        assert!(s.cancel(handle));
        assert!(!s.cancel(handle));
        assert!(!s.is_pending(handle));
        assert!(drain(&mut s, Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn restart_interval_keeps_a_single_pending_timer() {
        let mut s = scheduler();
        let mut slot = None;

        let first = s.restart_interval(&mut slot, Duration::from_secs(5), "slide");
        let second = s.restart_interval(&mut slot, Duration::from_secs(5), "slide");

        assert_ne!(first, second);
        assert!(!s.is_pending(first));
        assert_eq!(slot, Some(second));
        assert_eq!(s.pending_count(), 1);
    }

    #[test]
    fn cancel_slot_clears_handle() {
        let mut s = scheduler();
        let mut slot = Some(s.set_timeout(Duration::from_secs(1), "x"));

        assert!(s.cancel_slot(&mut slot));
        assert!(slot.is_none());
        assert!(!s.cancel_slot(&mut slot));
    }

    #[test]
    fn zero_period_is_raised_to_minimum() {
        let mut s = scheduler();
        s.set_interval(Duration::ZERO, "spin");
        assert_eq!(drain(&mut s, Duration::from_millis(3)).len(), 3);
    }

    #[test]
    fn wall_clock_follows_virtual_time() {
        let mut s = scheduler();
        s.settle(Duration::from_secs(90));
        let expected = Local.with_ymd_and_hms(2024, 3, 15, 9, 1, 30).unwrap();
        assert_eq!(s.wall_clock(), expected);
    }
}
