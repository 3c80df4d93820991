use std::cell::Cell;
use std::rc::Rc;

use dioxus::document::eval;
use quickscope_core::error::{ObserveError, ScrollError};
use quickscope_core::model::SectionId;
use quickscope_core::motion::{ObservationContext, ScrollRequest, ScrollTarget};

use super::scripts::{disconnect_script, scroll_to_script};

/// A scroll container rendered by the hosting view.
///
/// The view calls `mark_mounted` from the container's `onmounted` handler;
/// until then scroll requests report `ScrollError::Detached`.
#[derive(Clone, Debug)]
pub struct ScrollAnchor {
    element_id: &'static str,
    mounted: Rc<Cell<bool>>,
}

impl PartialEq for ScrollAnchor {
    fn eq(&self, other: &Self) -> bool {
        self.element_id == other.element_id && Rc::ptr_eq(&self.mounted, &other.mounted)
    }
}

impl ScrollAnchor {
    #[must_use]
    pub fn new(element_id: &'static str) -> Self {
        Self {
            element_id,
            mounted: Rc::new(Cell::new(false)),
        }
    }

    #[must_use]
    pub fn element_id(&self) -> &'static str {
        self.element_id
    }

    pub fn mark_mounted(&self) {
        self.mounted.set(true);
    }

    pub fn mark_unmounted(&self) {
        self.mounted.set(false);
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }
}

impl ScrollTarget for ScrollAnchor {
    fn scroll_to(&mut self, request: ScrollRequest) -> Result<(), ScrollError> {
        if !self.is_mounted() {
            return Err(ScrollError::Detached);
        }
        let _ = eval(&scroll_to_script(self.element_id, request));
        Ok(())
    }
}

/// Browser IntersectionObserver registered under a per-instance key.
///
/// Targets are collected synchronously; the hook installs the observer script
/// once registration succeeds and reads batches from its channel.
#[derive(Debug)]
pub struct DomObserver {
    key: String,
    targets: Vec<SectionId>,
    disconnected: bool,
}

impl DomObserver {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            targets: Vec::new(),
            disconnected: false,
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn targets(&self) -> &[SectionId] {
        &self.targets
    }

    #[must_use]
    pub fn is_disconnected(&self) -> bool {
        self.disconnected
    }
}

impl ObservationContext for DomObserver {
    fn observe(&mut self, target: &SectionId) -> Result<(), ObserveError> {
        if self.disconnected {
            return Err(ObserveError::Unavailable(format!(
                "observer {} is disconnected",
                self.key
            )));
        }
        self.targets.push(target.clone());
        Ok(())
    }

    fn disconnect(&mut self) {
        self.disconnected = true;
        let _ = eval(&disconnect_script(&self.key));
    }
}
