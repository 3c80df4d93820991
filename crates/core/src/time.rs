use std::time::{Duration, Instant};

/// A simple clock abstraction for deterministic time in components and tests.
///
/// Readings are offsets on the host timeline (time since the clock was
/// created), which is what `TimerSet` deadlines are measured against.
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    Monotonic { origin: Instant },
    Manual { now: Duration },
}

impl Default for Clock {
    fn default() -> Self {
        Self::monotonic()
    }
}

impl Clock {
    /// Returns a clock that follows real time, starting at zero now.
    #[must_use]
    pub fn monotonic() -> Self {
        Self::Monotonic {
            origin: Instant::now(),
        }
    }

    /// Returns a clock that only moves when `advance` is called.
    #[must_use]
    pub fn manual() -> Self {
        Self::Manual {
            now: Duration::ZERO,
        }
    }

    /// Returns the elapsed time on the host timeline.
    #[must_use]
    pub fn now(&self) -> Duration {
        match self {
            Clock::Monotonic { origin } => origin.elapsed(),
            Clock::Manual { now } => *now,
        }
    }

    /// If this is a manual clock, advance it by the given duration.
    ///
    /// Has no effect on `Clock::Monotonic`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Manual { now } = self {
            *now = now.saturating_add(delta);
        }
    }

    /// Moves a manual clock to an absolute reading. Readings never go backwards.
    pub fn set(&mut self, at: Duration) {
        if let Clock::Manual { now } = self {
            *now = (*now).max(at);
        }
    }

    #[must_use]
    pub fn is_manual(&self) -> bool {
        matches!(self, Clock::Manual { .. })
    }
}

/// Shorthand for millisecond durations, the unit every animation constant uses.
#[must_use]
pub const fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
