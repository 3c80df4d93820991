//! Hooks that mount core animation components into a Dioxus scope.
//!
//! Each hook owns exactly one component instance. Timers run on a spawned
//! task tied to the scope, and `use_drop` tears the component down so a late
//! wakeup can never touch a sealed instance.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::document::eval;
use dioxus::prelude::*;
use quickscope_core::Clock;
use quickscope_core::model::SectionId;
use quickscope_core::motion::{
    AnimationPhase, ContentRotator, IntersectionEntry, ObserverOptions, PhaseSequencer,
    RevealOnVisible, RotatorConfig, VisibilityTracker,
};
use tracing::{debug, warn};

use super::dom::{DomObserver, ScrollAnchor};
use super::scripts::observer_script;

/// Sleeps until each deadline `step` returns, then feeds it the clock again.
async fn run_timeline(clock: Clock, mut step: impl FnMut(Duration) -> Option<Duration>) {
    let mut next = step(clock.now());
    while let Some(deadline) = next {
        tokio::time::sleep(deadline.saturating_sub(clock.now())).await;
        next = step(clock.now());
    }
}

/// Runs the question/answer reveal cycle against the container `element_id`.
///
/// The returned anchor must be marked mounted by the container's `onmounted`.
pub fn use_phase_sequencer(element_id: &'static str) -> (Signal<AnimationPhase>, ScrollAnchor) {
    let mut phase = use_signal(AnimationPhase::default);
    let anchor = use_hook(|| ScrollAnchor::new(element_id));
    let sequencer =
        use_hook(|| Rc::new(RefCell::new(PhaseSequencer::with_defaults(anchor.clone()))));

    use_hook({
        let sequencer = Rc::clone(&sequencer);
        move || {
            spawn(async move {
                let clock = Clock::monotonic();
                let started = sequencer.borrow_mut().restart(clock.now());
                match started {
                    Ok(transition) => phase.set(transition.phase),
                    Err(err) => {
                        debug!(%err, element_id, "sequencer not started");
                        return;
                    }
                }
                run_timeline(clock, move |now| {
                    let mut sequencer = sequencer.borrow_mut();
                    if let Some(last) = sequencer.advance(now).last() {
                        phase.set(last.phase);
                    }
                    sequencer.next_deadline()
                })
                .await;
            })
        }
    });

    use_drop({
        let anchor = anchor.clone();
        move || {
            anchor.mark_unmounted();
            sequencer.borrow_mut().teardown();
        }
    });

    (phase, anchor)
}

/// Advances an index over `len` items every five seconds.
pub fn use_content_rotator(len: usize) -> Signal<usize> {
    let mut active = use_signal(|| 0_usize);
    let rotator = use_hook(|| match ContentRotator::new(len, RotatorConfig::default()) {
        Ok(rotator) => Some(Rc::new(RefCell::new(rotator))),
        Err(err) => {
            warn!(%err, "content rotation disabled");
            None
        }
    });

    use_hook({
        let rotator = rotator.clone();
        move || {
            let rotator = rotator?;
            Some(spawn(async move {
                let clock = Clock::monotonic();
                if let Err(err) = rotator.borrow_mut().start(clock.now()) {
                    debug!(%err, "rotator not started");
                    return;
                }
                run_timeline(clock, move |now| {
                    let mut rotator = rotator.borrow_mut();
                    if let Some(last) = rotator.advance(now).last() {
                        active.set(last.index);
                    }
                    rotator.next_deadline()
                })
                .await;
            }))
        }
    });

    use_drop(move || {
        if let Some(rotator) = rotator {
            rotator.borrow_mut().teardown();
        }
    });

    active
}

/// Tracks which of `sections` (DOM ids, in order) is in view.
pub fn use_visibility_tracker(key: &'static str, sections: &'static [&'static str]) -> Signal<usize> {
    let mut active = use_signal(|| 0_usize);
    let tracker = use_hook(|| {
        match VisibilityTracker::new(DomObserver::new(key), ObserverOptions::default()) {
            Ok(tracker) => Some(Rc::new(RefCell::new(tracker))),
            Err(err) => {
                warn!(%err, key, "visibility tracking disabled");
                None
            }
        }
    });

    use_hook({
        let tracker = tracker.clone();
        move || {
            let tracker = tracker?;
            Some(spawn(async move {
                let script = {
                    let mut tracker = tracker.borrow_mut();
                    let ids = sections.iter().copied().map(SectionId::from).collect();
                    if let Err(err) = tracker.register(ids) {
                        warn!(%err, key, "visibility tracking disabled");
                        return;
                    }
                    observer_script(key, tracker.sections(), tracker.options())
                };
                let mut channel = eval(&script);
                loop {
                    let batch = match channel.recv::<Vec<IntersectionEntry>>().await {
                        Ok(batch) => batch,
                        Err(err) => {
                            debug!(?err, key, "observer channel closed");
                            break;
                        }
                    };
                    let mut tracker = tracker.borrow_mut();
                    if let Some(index) = tracker.on_batch(&batch) {
                        debug!(key, active = index, band = ?tracker.band(), "active section changed");
                        active.set(index);
                    }
                }
            }))
        }
    });

    use_drop(move || {
        if let Some(tracker) = tracker {
            tracker.borrow_mut().teardown();
        }
    });

    active
}

/// Flips to `true` the first time `element_id` becomes visible, then stops watching.
pub fn use_reveal_on_visible(element_id: &'static str) -> Signal<bool> {
    let mut revealed = use_signal(|| false);
    let reveal = use_hook(|| new_reveal(format!("reveal-{element_id}")));

    use_hook({
        let reveal = reveal.clone();
        move || {
            let reveal = reveal?;
            Some(spawn(async move {
                let script = {
                    let mut reveal = reveal.borrow_mut();
                    if let Err(err) = reveal.observe(SectionId::new(element_id)) {
                        warn!(%err, element_id, "reveal observer unavailable");
                        return;
                    }
                    let context = reveal.context();
                    observer_script(context.key(), context.targets(), reveal.options())
                };
                let mut channel = eval(&script);
                while let Ok(batch) = channel.recv::<Vec<IntersectionEntry>>().await {
                    if reveal.borrow_mut().on_batch(&batch) {
                        revealed.set(true);
                        break;
                    }
                }
            }))
        }
    });

    use_drop(move || {
        if let Some(reveal) = reveal {
            reveal.borrow_mut().teardown();
        }
    });

    revealed
}

/// Flips to `true` right after the first render, so entrance transitions play.
pub fn use_reveal_on_mount() -> Signal<bool> {
    let mut revealed = use_signal(|| false);
    let reveal = use_hook(|| new_reveal("mount".to_string()));

    use_hook({
        let reveal = reveal.clone();
        move || {
            let reveal = reveal?;
            Some(spawn(async move {
                if reveal.borrow_mut().reveal_now() {
                    revealed.set(true);
                }
            }))
        }
    });

    use_drop(move || {
        if let Some(reveal) = reveal {
            reveal.borrow_mut().teardown();
        }
    });

    revealed
}

fn new_reveal(key: String) -> Option<Rc<RefCell<RevealOnVisible<DomObserver>>>> {
    match RevealOnVisible::new(DomObserver::new(key), ObserverOptions::reveal()) {
        Ok(reveal) => Some(Rc::new(RefCell::new(reveal))),
        Err(err) => {
            warn!(%err, "reveal disabled");
            None
        }
    }
}
