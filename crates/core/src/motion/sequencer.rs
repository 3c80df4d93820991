use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MotionError, ScrollError};
use crate::motion::Lifecycle;
use crate::time::ms;
use crate::timer::TimerSet;

//
// ─── PHASES ────────────────────────────────────────────────────────────────────
//

/// Step of the question/answer reveal cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationPhase {
    #[default]
    Initial,
    ShowQuestion,
    ShowAnswer,
}

impl AnimationPhase {
    #[must_use]
    pub fn question_visible(self) -> bool {
        !matches!(self, AnimationPhase::Initial)
    }

    #[must_use]
    pub fn answer_visible(self) -> bool {
        matches!(self, AnimationPhase::ShowAnswer)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationPhase::Initial => "initial",
            AnimationPhase::ShowQuestion => "showQuestion",
            AnimationPhase::ShowAnswer => "showAnswer",
        }
    }
}

//
// ─── SCROLLING ─────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

impl ScrollBehavior {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ScrollBehavior::Instant => "instant",
            ScrollBehavior::Smooth => "smooth",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScrollRequest {
    pub offset: f64,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    #[must_use]
    pub fn instant(offset: f64) -> Self {
        Self {
            offset,
            behavior: ScrollBehavior::Instant,
        }
    }

    #[must_use]
    pub fn smooth(offset: f64) -> Self {
        Self {
            offset,
            behavior: ScrollBehavior::Smooth,
        }
    }
}

/// Write access to a scrollable container owned by the hosting view.
pub trait ScrollTarget {
    /// # Errors
    ///
    /// Returns `ScrollError::Detached` when the container is not mounted.
    fn scroll_to(&mut self, request: ScrollRequest) -> Result<(), ScrollError>;
}

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

/// Timings and scroll offsets of one reveal cycle.
///
/// Delays are relative: `answer_delay` runs from the question transition and
/// `hold` from the answer transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequenceConfig {
    pub question_delay: Duration,
    pub answer_delay: Duration,
    pub hold: Duration,
    pub question_offset: f64,
    pub answer_offset: f64,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            question_delay: ms(3000),
            answer_delay: ms(1500),
            hold: ms(3500),
            question_offset: 300.0,
            answer_offset: 400.0,
        }
    }
}

impl SequenceConfig {
    /// Time from `Initial` until the sequence restarts.
    #[must_use]
    pub fn total_cycle(&self) -> Duration {
        self.question_delay
            .saturating_add(self.answer_delay)
            .saturating_add(self.hold)
    }

    /// # Errors
    ///
    /// Returns `MotionError::ZeroDelay`, `MotionError::CycleOverflow` or
    /// `MotionError::InvalidOffset`.
    pub fn validate(&self) -> Result<(), MotionError> {
        for (field, delay) in [
            ("question_delay", self.question_delay),
            ("answer_delay", self.answer_delay),
            ("hold", self.hold),
        ] {
            if delay.is_zero() {
                return Err(MotionError::ZeroDelay { field });
            }
        }
        self.question_delay
            .checked_add(self.answer_delay)
            .and_then(|sum| sum.checked_add(self.hold))
            .ok_or(MotionError::CycleOverflow)?;
        for (field, offset) in [
            ("question_offset", self.question_offset),
            ("answer_offset", self.answer_offset),
        ] {
            if !offset.is_finite() || offset < 0.0 {
                return Err(MotionError::InvalidOffset {
                    field,
                    provided: offset,
                });
            }
        }
        Ok(())
    }
}

//
// ─── SEQUENCER ─────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    ShowQuestion,
    ShowAnswer,
    Restart,
}

/// One observable phase change together with the scroll issued for it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseTransition {
    pub phase: AnimationPhase,
    pub scroll: ScrollRequest,
    /// False when the scroll target was detached and the scroll was skipped.
    pub scrolled: bool,
    /// Zero-based count of restarts that led to this transition.
    pub cycle: u64,
    pub at: Duration,
}

/// Drives the `Initial → ShowQuestion → ShowAnswer` cycle forever, keeping a
/// scroll container in step with each phase.
///
/// Every (re)start cancels the whole timer set before scheduling the next
/// cycle, so two cycles are never alive at once.
pub struct PhaseSequencer<S> {
    config: SequenceConfig,
    target: S,
    phase: AnimationPhase,
    cycle: u64,
    lifecycle: Lifecycle,
    timers: TimerSet<Step>,
}

impl<S: ScrollTarget> PhaseSequencer<S> {
    /// # Errors
    ///
    /// Returns an error if `config` fails validation.
    pub fn new(config: SequenceConfig, target: S) -> Result<Self, MotionError> {
        config.validate()?;
        Ok(Self {
            config,
            target,
            phase: AnimationPhase::Initial,
            cycle: 0,
            lifecycle: Lifecycle::Idle,
            timers: TimerSet::new(),
        })
    }

    #[must_use]
    pub fn with_defaults(target: S) -> Self {
        Self {
            config: SequenceConfig::default(),
            target,
            phase: AnimationPhase::Initial,
            cycle: 0,
            lifecycle: Lifecycle::Idle,
            timers: TimerSet::new(),
        }
    }

    /// Starts (or restarts) the cycle at `now`, entering `Initial` with an
    /// instant scroll to the top.
    ///
    /// # Errors
    ///
    /// Returns `MotionError::Sealed` after teardown.
    pub fn restart(&mut self, now: Duration) -> Result<PhaseTransition, MotionError> {
        if self.lifecycle.is_sealed() {
            return Err(MotionError::Sealed);
        }
        Ok(self.begin_cycle(now))
    }

    /// Fires every timer due at or before `now`, each at its own deadline.
    pub fn advance(&mut self, now: Duration) -> Vec<PhaseTransition> {
        let mut transitions = Vec::new();
        if !self.lifecycle.is_running() {
            return transitions;
        }

        while let Some(fired) = self.timers.pop_due(now) {
            let transition = match fired.payload {
                Step::ShowQuestion => self.enter(
                    AnimationPhase::ShowQuestion,
                    ScrollRequest::smooth(self.config.question_offset),
                    fired.deadline,
                ),
                Step::ShowAnswer => self.enter(
                    AnimationPhase::ShowAnswer,
                    ScrollRequest::smooth(self.config.answer_offset),
                    fired.deadline,
                ),
                Step::Restart => self.begin_cycle(fired.deadline),
            };
            transitions.push(transition);
        }
        transitions
    }

    /// Cancels all pending timers and seals the sequencer.
    ///
    /// Returns false when it was already torn down.
    pub fn teardown(&mut self) -> bool {
        if !self.lifecycle.seal() {
            return false;
        }
        let cancelled = self.timers.cancel_all();
        debug!(cancelled, cycle = self.cycle, "phase sequencer torn down");
        true
    }

    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    #[must_use]
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn target(&self) -> &S {
        &self.target
    }

    fn begin_cycle(&mut self, now: Duration) -> PhaseTransition {
        self.timers.cancel_all();
        if self.lifecycle.is_running() {
            self.cycle += 1;
        }
        self.lifecycle = Lifecycle::Running;

        let question_at = self.config.question_delay;
        let answer_at = question_at.saturating_add(self.config.answer_delay);
        let restart_at = answer_at.saturating_add(self.config.hold);
        self.timers.schedule(now, question_at, Step::ShowQuestion);
        self.timers.schedule(now, answer_at, Step::ShowAnswer);
        self.timers.schedule(now, restart_at, Step::Restart);

        self.enter(AnimationPhase::Initial, ScrollRequest::instant(0.0), now)
    }

    fn enter(&mut self, phase: AnimationPhase, scroll: ScrollRequest, at: Duration) -> PhaseTransition {
        self.phase = phase;
        let scrolled = match self.target.scroll_to(scroll) {
            Ok(()) => true,
            Err(err) => {
                debug!(?phase, %err, "skipping scroll");
                false
            }
        };
        PhaseTransition {
            phase,
            scroll,
            scrolled,
            cycle: self.cycle,
            at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        requests: Vec<ScrollRequest>,
        detached: bool,
    }

    impl ScrollTarget for Recorder {
        fn scroll_to(&mut self, request: ScrollRequest) -> Result<(), ScrollError> {
            if self.detached {
                return Err(ScrollError::Detached);
            }
            self.requests.push(request);
            Ok(())
        }
    }

    fn started() -> PhaseSequencer<Recorder> {
        let mut seq = PhaseSequencer::with_defaults(Recorder::default());
        seq.restart(ms(0)).unwrap();
        seq
    }

    #[test]
    fn start_enters_initial_with_instant_scroll() {
        let seq = started();
        assert_eq!(seq.phase(), AnimationPhase::Initial);
        assert_eq!(seq.target().requests, vec![ScrollRequest::instant(0.0)]);
        assert_eq!(seq.pending_timers(), 3);
        assert_eq!(seq.next_deadline(), Some(ms(3000)));
    }

    #[test]
    fn nothing_happens_before_first_deadline() {
        let mut seq = started();
        assert!(seq.advance(ms(2999)).is_empty());
        assert_eq!(seq.phase(), AnimationPhase::Initial);
    }

    #[test]
    fn walks_through_one_full_cycle() {
        let mut seq = started();

        let question = seq.advance(ms(3000));
        assert_eq!(question.len(), 1);
        assert_eq!(question[0].phase, AnimationPhase::ShowQuestion);
        assert_eq!(question[0].scroll, ScrollRequest::smooth(300.0));

        let answer = seq.advance(ms(4500));
        assert_eq!(answer[0].phase, AnimationPhase::ShowAnswer);
        assert_eq!(answer[0].scroll, ScrollRequest::smooth(400.0));

        let restart = seq.advance(ms(8000));
        assert_eq!(restart[0].phase, AnimationPhase::Initial);
        assert_eq!(restart[0].scroll, ScrollRequest::instant(0.0));
        assert_eq!(restart[0].cycle, 1);
        assert_eq!(seq.next_deadline(), Some(ms(11_000)));
    }

    #[test]
    fn mid_cycle_restart_drops_the_old_answer_timer() {
        let mut seq = started();
        seq.advance(ms(3000));
        assert_eq!(seq.phase(), AnimationPhase::ShowQuestion);

        seq.restart(ms(3500)).unwrap();
        // The old cycle would have shown the answer at 4500.
        assert!(seq.advance(ms(6499)).is_empty());
        assert_eq!(seq.phase(), AnimationPhase::Initial);

        let next = seq.advance(ms(6500));
        assert_eq!(next[0].phase, AnimationPhase::ShowQuestion);
        assert_eq!(next[0].at, ms(6500));
    }

    #[test]
    fn detached_target_skips_scroll_but_still_transitions() {
        let mut seq = started();
        seq.target.detached = true;

        let out = seq.advance(ms(3000));
        assert_eq!(seq.phase(), AnimationPhase::ShowQuestion);
        assert!(!out[0].scrolled);
        assert_eq!(seq.target().requests.len(), 1);
    }

    #[test]
    fn teardown_is_idempotent_and_final() {
        let mut seq = started();
        assert!(seq.teardown());
        assert!(!seq.teardown());
        assert_eq!(seq.pending_timers(), 0);
        assert!(seq.advance(ms(60_000)).is_empty());
        assert_eq!(seq.phase(), AnimationPhase::Initial);
        assert_eq!(seq.restart(ms(60_000)), Err(MotionError::Sealed));
    }

    #[test]
    fn teardown_before_start_is_safe() {
        let mut seq = PhaseSequencer::with_defaults(Recorder::default());
        assert!(seq.teardown());
        assert!(seq.target().requests.is_empty());
    }

    #[test]
    fn rejects_zero_delays_and_bad_offsets() {
        let zero = SequenceConfig {
            answer_delay: Duration::ZERO,
            ..SequenceConfig::default()
        };
        assert!(matches!(
            PhaseSequencer::new(zero, Recorder::default()),
            Err(MotionError::ZeroDelay {
                field: "answer_delay"
            })
        ));

        let negative = SequenceConfig {
            question_offset: -1.0,
            ..SequenceConfig::default()
        };
        assert!(matches!(
            negative.validate(),
            Err(MotionError::InvalidOffset { .. })
        ));
    }

    #[test]
    fn rejects_a_cycle_longer_than_a_duration() {
        let huge = SequenceConfig {
            question_delay: Duration::MAX,
            ..SequenceConfig::default()
        };
        assert_eq!(huge.validate(), Err(MotionError::CycleOverflow));
        assert_eq!(huge.total_cycle(), Duration::MAX);
        assert!(matches!(
            PhaseSequencer::new(huge, Recorder::default()),
            Err(MotionError::CycleOverflow)
        ));
    }

    #[test]
    fn phase_visibility_flags() {
        assert!(!AnimationPhase::Initial.question_visible());
        assert!(AnimationPhase::ShowQuestion.question_visible());
        assert!(!AnimationPhase::ShowQuestion.answer_visible());
        assert!(AnimationPhase::ShowAnswer.answer_visible());
    }
}
