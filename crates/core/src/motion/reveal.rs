use tracing::debug;

use crate::error::MotionError;
use crate::model::SectionId;
use crate::motion::Lifecycle;
use crate::motion::visibility::{IntersectionEntry, ObservationContext, ObserverOptions};

/// One-shot hidden → shown switch for a single element.
///
/// The first intersecting entry (or an explicit `reveal_now`) flips the
/// element to shown and disconnects the observer; nothing flips it back.
pub struct RevealOnVisible<C> {
    context: C,
    options: ObserverOptions,
    target: Option<SectionId>,
    revealed: bool,
    connected: bool,
    lifecycle: Lifecycle,
}

impl<C: ObservationContext> RevealOnVisible<C> {
    /// # Errors
    ///
    /// Returns an error if `options` fails validation.
    pub fn new(context: C, options: ObserverOptions) -> Result<Self, MotionError> {
        options.validate()?;
        Ok(Self {
            context,
            options,
            target: None,
            revealed: false,
            connected: false,
            lifecycle: Lifecycle::Idle,
        })
    }

    /// Starts watching `target`.
    ///
    /// # Errors
    ///
    /// Returns `MotionError::Sealed`, `MotionError::AlreadyRegistered`, or the
    /// observe failure (the element then stays hidden).
    pub fn observe(&mut self, target: SectionId) -> Result<(), MotionError> {
        match self.lifecycle {
            Lifecycle::Sealed => return Err(MotionError::Sealed),
            Lifecycle::Running => return Err(MotionError::AlreadyRegistered),
            Lifecycle::Idle => {}
        }
        self.lifecycle = Lifecycle::Running;
        if self.revealed {
            return Ok(());
        }
        self.connected = true;
        if let Err(err) = self.context.observe(&target) {
            self.disconnect();
            return Err(err.into());
        }
        self.target = Some(target);
        Ok(())
    }

    /// Applies one observer batch. Returns true only for the transition.
    pub fn on_batch(&mut self, entries: &[IntersectionEntry]) -> bool {
        if self.revealed || !self.lifecycle.is_running() {
            return false;
        }
        let Some(target) = self.target.as_ref() else {
            return false;
        };
        let hit = entries
            .iter()
            .any(|entry| &entry.target == target && entry.is_intersecting);
        if hit {
            self.mark_revealed();
        }
        hit
    }

    /// Reveals without waiting for visibility. Returns true only for the transition.
    pub fn reveal_now(&mut self) -> bool {
        if self.revealed || self.lifecycle.is_sealed() {
            return false;
        }
        self.mark_revealed();
        true
    }

    /// Returns false when it was already torn down.
    pub fn teardown(&mut self) -> bool {
        if !self.lifecycle.seal() {
            return false;
        }
        self.disconnect();
        true
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    #[must_use]
    pub fn context(&self) -> &C {
        &self.context
    }

    fn mark_revealed(&mut self) {
        self.revealed = true;
        self.disconnect();
        debug!(section = ?self.target, "revealed");
    }

    fn disconnect(&mut self) {
        if self.connected {
            self.connected = false;
            self.context.disconnect();
        }
    }
}
