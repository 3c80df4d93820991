use std::sync::Arc;

use quickscope_core::model::{ContentItem, headline_catalog};

use crate::waitlist_service::{WaitlistConfig, WaitlistService};

/// Assembles the app-facing services and static content.
#[derive(Clone)]
pub struct AppServices {
    waitlist: Arc<WaitlistService>,
    headlines: Arc<Vec<ContentItem>>,
}

impl AppServices {
    /// Build services with an explicit waitlist configuration.
    #[must_use]
    pub fn new(waitlist: Option<WaitlistConfig>) -> Self {
        Self::with_waitlist(WaitlistService::new(waitlist))
    }

    #[must_use]
    pub fn with_waitlist(waitlist: WaitlistService) -> Self {
        Self {
            waitlist: Arc::new(waitlist),
            headlines: Arc::new(headline_catalog()),
        }
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
