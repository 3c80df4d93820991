//! Timed and visibility-driven presentation state machines.
//!
//! Every component here is single-threaded and passive: the host feeds it
//! the current time (`advance`) or an intersection batch (`on_batch`) and
//! renders whatever state it exposes afterwards.

mod reveal;
mod rotator;
mod sequencer;
mod visibility;

pub use reveal::RevealOnVisible;
pub use rotator::{ContentRotator, Rotation, RotatorConfig, card_offset};
pub use sequencer::{
    AnimationPhase, PhaseSequencer, PhaseTransition, ScrollBehavior, ScrollRequest, ScrollTarget,
    SequenceConfig,
};
pub use visibility::{
    BAND_RADIUS, IntersectionEntry, ObservationContext, ObserverOptions, VisibilityTracker,
    within_band,
};

/// Where a component is in its mount/teardown lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Idle,
    Running,
    /// Torn down; a fresh instance is required to run again.
    Sealed,
}

impl Lifecycle {
    #[must_use]
    pub fn is_running(self) -> bool {
        matches!(self, Lifecycle::Running)
    }

    #[must_use]
    pub fn is_sealed(self) -> bool {
        matches!(self, Lifecycle::Sealed)
    }

    /// Moves to `Sealed`. Returns false if already sealed.
    pub(crate) fn seal(&mut self) -> bool {
        if self.is_sealed() {
            return false;
        }
        *self = Lifecycle::Sealed;
        true
    }
}
