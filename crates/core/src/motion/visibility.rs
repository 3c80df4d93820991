use std::collections::HashMap;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{MotionError, ObserveError};
use crate::model::SectionId;
use crate::motion::Lifecycle;

/// Sections within this many positions of the active one stay opaque.
pub const BAND_RADIUS: usize = 1;

/// True when `index` lies inside the fade band around `active`.
#[must_use]
pub fn within_band(active: usize, index: usize) -> bool {
    index.abs_diff(active) <= BAND_RADIUS
}

/// Intersection settings handed to the platform observer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObserverOptions {
    /// Minimum visible fraction of a target for it to count as intersecting.
    pub threshold: f64,
    /// Vertical viewport margin, so targets register slightly before entering.
    pub root_margin_px: u32,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin_px: 50,
        }
    }
}

impl ObserverOptions {
    /// Options for one-shot reveals: same threshold, no preload margin.
    #[must_use]
    pub fn reveal() -> Self {
        Self {
            threshold: 0.1,
            root_margin_px: 0,
        }
    }

    /// CSS `rootMargin` value, vertical margin only.
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("{}px 0px", self.root_margin_px)
    }

    /// # Errors
    ///
    /// Returns `MotionError::InvalidThreshold` unless `0 < threshold <= 1`.
    pub fn validate(&self) -> Result<(), MotionError> {
        if self.threshold.is_finite() && self.threshold > 0.0 && self.threshold <= 1.0 {
            Ok(())
        } else {
            Err(MotionError::InvalidThreshold {
                provided: self.threshold,
            })
        }
    }
}

/// One target's visibility, as delivered in an observer batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntersectionEntry {
    pub target: SectionId,
    pub ratio: f64,
    /// The observer's own verdict. It can be true while `ratio` is below the
    /// configured threshold, so consumers key on this and not on the ratio.
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    #[must_use]
    pub fn new(target: impl Into<SectionId>, ratio: f64, is_intersecting: bool) -> Self {
        Self {
            target: target.into(),
            ratio,
            is_intersecting,
        }
    }

    #[must_use]
    pub fn entering(target: impl Into<SectionId>, ratio: f64) -> Self {
        Self::new(target, ratio, true)
    }

    #[must_use]
    pub fn leaving(target: impl Into<SectionId>) -> Self {
        Self::new(target, 0.0, false)
    }
}

/// The platform's intersection observer, one per tracking component.
pub trait ObservationContext {
    /// # Errors
    ///
    /// Returns `ObserveError` when the target cannot be watched.
    fn observe(&mut self, target: &SectionId) -> Result<(), ObserveError>;

    fn disconnect(&mut self);
}

/// Reports which registered section is currently in view.
///
/// Batches are applied in delivery order and the last intersecting entry of
/// a batch wins, regardless of its ratio.
pub struct VisibilityTracker<C> {
    context: C,
    options: ObserverOptions,
    sections: Vec<SectionId>,
    positions: HashMap<SectionId, usize>,
    active: usize,
    lifecycle: Lifecycle,
    connected: bool,
    failed: bool,
}

impl<C: ObservationContext> VisibilityTracker<C> {
    /// # Errors
    ///
    /// Returns an error if `options` fails validation.
    pub fn new(context: C, options: ObserverOptions) -> Result<Self, MotionError> {
        options.validate()?;
        Ok(Self {
            context,
            options,
            sections: Vec::new(),
            positions: HashMap::new(),
            active: 0,
            lifecycle: Lifecycle::Idle,
            connected: false,
            failed: false,
        })
    }

    /// Registers `sections` in order and starts observing each of them.
    ///
    /// If the context refuses a target the tracker disconnects and never
    /// reports activity afterwards.
    ///
    /// # Errors
    ///
    /// Returns `MotionError::Sealed`, `MotionError::AlreadyRegistered`,
    /// `MotionError::DuplicateSection`, or the observe failure.
    pub fn register(&mut self, sections: Vec<SectionId>) -> Result<(), MotionError> {
        match self.lifecycle {
            Lifecycle::Sealed => return Err(MotionError::Sealed),
            Lifecycle::Running => return Err(MotionError::AlreadyRegistered),
            Lifecycle::Idle => {}
        }

        let mut positions = HashMap::with_capacity(sections.len());
        for (index, section) in sections.iter().enumerate() {
            if positions.insert(section.clone(), index).is_some() {
                return Err(MotionError::DuplicateSection(section.clone()));
            }
        }

        self.lifecycle = Lifecycle::Running;
        self.connected = true;
        for section in &sections {
            if let Err(err) = self.context.observe(section) {
                warn!(%section, %err, "visibility tracker setup failed");
                self.failed = true;
                self.disconnect();
                return Err(err.into());
            }
        }

        self.sections = sections;
        self.positions = positions;
        Ok(())
    }

    /// Applies one observer batch. Returns the new active index if it changed.
    pub fn on_batch(&mut self, entries: &[IntersectionEntry]) -> Option<usize> {
        if !self.is_reporting() {
            return None;
        }
        let before = self.active;
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            match self.positions.get(&entry.target) {
                Some(&index) => self.active = index,
                None => debug!(section = %entry.target, "ignoring unregistered section"),
            }
        }
        (self.active != before).then_some(self.active)
    }

    /// Disconnects the observer and forgets registered sections.
    ///
    /// Returns false when it was already torn down.
    pub fn teardown(&mut self) -> bool {
        if !self.lifecycle.seal() {
            return false;
        }
        self.disconnect();
        self.sections.clear();
        self.positions.clear();
        true
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn in_band(&self, index: usize) -> bool {
        within_band(self.active, index)
    }

    /// Opacity for the section at `index`: fully shown inside the band.
    #[must_use]
    pub fn band_opacity(&self, index: usize) -> f32 {
        if self.in_band(index) { 1.0 } else { 0.0 }
    }

    /// Registered positions currently inside the band.
    #[must_use]
    pub fn band(&self) -> RangeInclusive<usize> {
        let last = self.sections.len().saturating_sub(1);
        let start = self.active.saturating_sub(BAND_RADIUS);
        let end = (self.active + BAND_RADIUS).min(last);
        start..=end
    }

    #[must_use]
    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    #[must_use]
    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn context(&self) -> &C {
        &self.context
    }

    fn is_reporting(&self) -> bool {
        self.lifecycle.is_running() && !self.failed
    }

    fn disconnect(&mut self) {
        if self.connected {
            self.connected = false;
            self.context.disconnect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeObserver {
        observed: Vec<SectionId>,
        disconnects: usize,
        refuse: Option<SectionId>,
    }

    impl ObservationContext for FakeObserver {
        fn observe(&mut self, target: &SectionId) -> Result<(), ObserveError> {
            if self.refuse.as_ref() == Some(target) {
                return Err(ObserveError::MissingTarget(target.clone()));
            }
            self.observed.push(target.clone());
            Ok(())
        }

        fn disconnect(&mut self) {
            self.disconnects += 1;
        }
    }

    fn ids(count: usize) -> Vec<SectionId> {
        (0..count).map(|i| SectionId::new(format!("s{i}"))).collect()
    }

    fn tracker(count: usize) -> VisibilityTracker<FakeObserver> {
        let mut tracker =
            VisibilityTracker::new(FakeObserver::default(), ObserverOptions::default()).unwrap();
        tracker.register(ids(count)).unwrap();
        tracker
    }

    #[test]
    fn registers_and_observes_in_order() {
        let tracker = tracker(3);
        assert_eq!(tracker.context().observed, ids(3));
        assert_eq!(tracker.active_index(), 0);
        assert_eq!(tracker.band(), 0..=1);
    }

    #[test]
    fn intersecting_section_becomes_active_with_three_wide_band() {
        let mut tracker = tracker(7);
        assert_eq!(tracker.on_batch(&[IntersectionEntry::entering("s3", 0.4)]), Some(3));

        assert_eq!(tracker.active_index(), 3);
        assert_eq!(tracker.band(), 2..=4);
        for index in [2, 3, 4] {
            assert_eq!(tracker.band_opacity(index), 1.0);
        }
        for index in [0, 1, 5, 6] {
            assert_eq!(tracker.band_opacity(index), 0.0);
        }
    }

    #[test]
    fn last_intersecting_entry_in_a_batch_wins() {
        let mut tracker = tracker(7);
        let batch = [
            IntersectionEntry::entering("s5", 0.9),
            IntersectionEntry::entering("s2", 0.15),
            IntersectionEntry::entering("s6", 0.02),
        ];
        assert_eq!(tracker.on_batch(&batch), Some(2));
    }

    #[test]
    fn leaving_and_unknown_targets_are_ignored() {
        let mut tracker = tracker(4);
        assert_eq!(tracker.on_batch(&[IntersectionEntry::leaving("s2")]), None);
        assert_eq!(tracker.on_batch(&[IntersectionEntry::entering("footer", 1.0)]), None);
        assert_eq!(tracker.active_index(), 0);
    }

    #[test]
    fn observer_verdict_wins_over_a_small_ratio() {
        let mut tracker = tracker(7);
        assert_eq!(tracker.on_batch(&[IntersectionEntry::entering("s2", 0.05)]), Some(2));
        assert_eq!(
            tracker.on_batch(&[IntersectionEntry::new("s4", 0.6, false)]),
            None
        );
        assert_eq!(tracker.active_index(), 2);
    }

    #[test]
    fn entries_decode_from_the_observer_payload() {
        let entries: Vec<IntersectionEntry> = serde_json::from_str(
            r#"[{"target":"s1","ratio":0.02,"isIntersecting":true}]"#,
        )
        .unwrap();
        assert_eq!(entries, vec![IntersectionEntry::entering("s1", 0.02)]);
    }

    #[test]
    fn band_is_clipped_at_the_edges() {
        let mut tracker = tracker(4);
        tracker.on_batch(&[IntersectionEntry::entering("s3", 1.0)]);
        assert_eq!(tracker.band(), 2..=3);
    }

    #[test]
    fn setup_failure_silences_the_tracker() {
        let observer = FakeObserver {
            refuse: Some(SectionId::new("s1")),
            ..FakeObserver::default()
        };
        let mut tracker = VisibilityTracker::new(observer, ObserverOptions::default()).unwrap();
        let err = tracker.register(ids(3)).unwrap_err();
        assert!(matches!(err, MotionError::Observe(ObserveError::MissingTarget(_))));

        assert!(tracker.is_failed());
        assert_eq!(tracker.on_batch(&[IntersectionEntry::entering("s0", 1.0)]), None);
        assert!(tracker.teardown());
        assert_eq!(tracker.context().disconnects, 1);
    }

    #[test]
    fn rejects_duplicate_sections() {
        let mut tracker =
            VisibilityTracker::new(FakeObserver::default(), ObserverOptions::default()).unwrap();
        let err = tracker
            .register(vec![SectionId::new("a"), SectionId::new("a")])
            .unwrap_err();
        assert_eq!(err, MotionError::DuplicateSection(SectionId::new("a")));
        assert!(tracker.context().observed.is_empty());
    }

    #[test]
    fn teardown_disconnects_exactly_once() {
        let mut tracker = tracker(3);
        assert!(tracker.teardown());
        assert!(!tracker.teardown());
        assert_eq!(tracker.context().disconnects, 1);
        assert!(tracker.sections().is_empty());
        assert_eq!(tracker.on_batch(&[IntersectionEntry::entering("s2", 1.0)]), None);
        assert_eq!(tracker.register(ids(2)), Err(MotionError::Sealed));
    }

    #[test]
    fn teardown_before_register_never_disconnects() {
        let mut tracker =
            VisibilityTracker::new(FakeObserver::default(), ObserverOptions::default()).unwrap();
        assert!(tracker.teardown());
        assert_eq!(tracker.context().disconnects, 0);
    }

    #[test]
    fn options_render_root_margin_and_validate() {
        assert_eq!(ObserverOptions::default().root_margin(), "50px 0px");
        assert_eq!(ObserverOptions::reveal().root_margin(), "0px 0px");
        let bad = ObserverOptions {
            threshold: 0.0,
            root_margin_px: 0,
        };
        assert!(bad.validate().is_err());
    }
}
