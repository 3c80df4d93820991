use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use quickscope_core::model::ContentItem;
use services::WaitlistService;

pub trait UiApp: Send + Sync {
    fn start_on_pitch(&self) -> bool;

    fn waitlist(&self) -> Arc<WaitlistService>;
    fn headlines(&self) -> Arc<Vec<ContentItem>>;
}

#[derive(Clone)]
pub struct AppContext {
    start_on_pitch_configured: bool,
    start_on_pitch_once: Arc<AtomicBool>,

    waitlist: Arc<WaitlistService>,
    headlines: Arc<Vec<ContentItem>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let start_on_pitch_configured = app.start_on_pitch();

        Self {
            start_on_pitch_configured,
            start_on_pitch_once: Arc::new(AtomicBool::new(start_on_pitch_configured)),
            waitlist: app.waitlist(),
            headlines: app.headlines(),
        }
    }

    /// True exactly once if the app was launched straight into the pitch deck.
    #[must_use]
    pub fn take_start_on_pitch(&self) -> bool {
        self.start_on_pitch_once.swap(false, Ordering::AcqRel)
    }

    #[must_use]
    pub fn start_on_pitch_configured(&self) -> bool {
        self.start_on_pitch_configured
    }

    #[must_use]
    pub fn waitlist(&self) -> Arc<WaitlistService> {
        Arc::clone(&self.waitlist)
    }

    #[must_use]
    pub fn headlines(&self) -> Arc<Vec<ContentItem>> {
        Arc::clone(&self.headlines)
    }
}

// Provided by the composition root in `crates/app`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
