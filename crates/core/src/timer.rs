//! Cancellable single-fire timers keyed by handle.
//!
//! Timers carry a payload message instead of a closure: whoever owns the
//! `TimerSet` pops due payloads and interprets them against its own state.

use std::fmt;
use std::time::Duration;

/// Identifies one scheduled timer within the `TimerSet` that issued it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Returns the underlying u64 value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimerHandle({})", self.0)
    }
}

/// A timer that reached its deadline and was removed from the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<T> {
    pub handle: TimerHandle,
    pub deadline: Duration,
    pub payload: T,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    handle: TimerHandle,
    deadline: Duration,
    payload: T,
}

/// Ordered set of pending timers.
///
/// Entries are kept sorted by deadline; timers sharing a deadline fire in the
/// order they were scheduled. Each handle fires at most once.
#[derive(Debug, Clone)]
pub struct TimerSet<T> {
    pending: Vec<Pending<T>>,
    next_id: u64,
}

impl<T> Default for TimerSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerSet<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 1,
        }
    }

    /// Schedules `payload` to become due `delay` after `now`.
    pub fn schedule(&mut self, now: Duration, delay: Duration, payload: T) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;

        let deadline = now.saturating_add(delay);
        let at = self
            .pending
            .partition_point(|timer| timer.deadline <= deadline);
        self.pending.insert(
            at,
            Pending {
                handle,
                deadline,
                payload,
            },
        );
        handle
    }

    /// Cancels a timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.pending.iter().position(|timer| timer.handle == handle) {
            Some(index) => {
                self.pending.remove(index);
                true
            }
            None => false,
        }
    }

    /// Cancels every pending timer, returning how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    /// Removes and returns the earliest timer whose deadline is `<= now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<Fired<T>> {
        let first = self.pending.first()?;
        if first.deadline > now {
            return None;
        }
        let Pending {
            handle,
            deadline,
            payload,
        } = self.pending.remove(0);
        Some(Fired {
            handle,
            deadline,
            payload,
        })
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.first().map(|timer| timer.deadline)
    }

    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|timer| timer.handle == handle)
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
