use std::time::Duration;

use tracing::debug;

use crate::error::MotionError;
use crate::motion::Lifecycle;
use crate::time::ms;
use crate::timer::TimerSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotatorConfig {
    pub interval: Duration,
}

impl Default for RotatorConfig {
    fn default() -> Self {
        Self {
            interval: ms(5000),
        }
    }
}

/// The active index after one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation {
    pub index: usize,
    pub at: Duration,
}

/// Signed distance of `index` from `active`, in card widths.
#[must_use]
pub fn card_offset(active: usize, index: usize) -> i64 {
    index as i64 - active as i64
}

/// Cycles an index over `len` items, one step per interval.
pub struct ContentRotator {
    len: usize,
    active: usize,
    ticks: u64,
    interval: Duration,
    lifecycle: Lifecycle,
    timers: TimerSet<()>,
}

impl ContentRotator {
    /// # Errors
    ///
    /// Returns `MotionError::EmptyContent` when `len` is zero and
    /// `MotionError::ZeroDelay` for a zero interval.
    pub fn new(len: usize, config: RotatorConfig) -> Result<Self, MotionError> {
        if len == 0 {
            return Err(MotionError::EmptyContent);
        }
        if config.interval.is_zero() {
            return Err(MotionError::ZeroDelay { field: "interval" });
        }
        Ok(Self {
            len,
            active: 0,
            ticks: 0,
            interval: config.interval,
            lifecycle: Lifecycle::Idle,
            timers: TimerSet::new(),
        })
    }

    /// Arms the first tick one interval after `now`. Starting twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `MotionError::Sealed` after teardown.
    pub fn start(&mut self, now: Duration) -> Result<(), MotionError> {
        match self.lifecycle {
            Lifecycle::Sealed => Err(MotionError::Sealed),
            Lifecycle::Running => Ok(()),
            Lifecycle::Idle => {
                self.lifecycle = Lifecycle::Running;
                self.timers.schedule(now, self.interval, ());
                Ok(())
            }
        }
    }

    /// Applies every tick due at or before `now`.
    pub fn advance(&mut self, now: Duration) -> Vec<Rotation> {
        let mut rotations = Vec::new();
        if !self.lifecycle.is_running() {
            return rotations;
        }
        while let Some(fired) = self.timers.pop_due(now) {
            self.active = (self.active + 1) % self.len;
            self.ticks += 1;
            self.timers.schedule(fired.deadline, self.interval, ());
            rotations.push(Rotation {
                index: self.active,
                at: fired.deadline,
            });
        }
        rotations
    }

    /// Returns false when it was already torn down.
    pub fn teardown(&mut self) -> bool {
        if !self.lifecycle.seal() {
            return false;
        }
        self.timers.cancel_all();
        debug!(ticks = self.ticks, "content rotator torn down");
        true
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        index == self.active
    }

    /// Signed distance of `index` from the active card, in card widths.
    #[must_use]
    pub fn card_offset(&self, index: usize) -> i64 {
        card_offset(self.active, index)
    }

    #[must_use]
    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.active)
    }
}
