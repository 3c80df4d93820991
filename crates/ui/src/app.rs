//! Root component: document head plus the routed pages.

use dioxus::prelude::*;
use dioxus_router::Router;
use tracing::error;

use crate::routes::Route;

const PAGE_TITLE: &str = "QuickScope";
const PAGE_DESCRIPTION: &str =
    "Quick, personalized news powered by AI that explains what matters to you.";

#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "{PAGE_TITLE}" }
        document::Meta { name: "description", content: PAGE_DESCRIPTION }
        document::Stylesheet { href: asset!("/assets/style.css") }

        main { class: "quickscope",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    RenderFailure { report: format!("{errors:?}") }
                },
                Router::<Route> {}
            }
        }
    }
}

/// Replaces the pages when a view fails to render. Logged once per mount.
#[component]
fn RenderFailure(report: String) -> Element {
    use_hook({
        let report = report.clone();
        move || error!(%report, "view failed to render")
    });

    rsx! {
        section { class: "render-failure",
            h1 { "QuickScope hit a snag" }
            p { "Reload the window to get back to today's headlines." }
            details {
                summary { "Details" }
                pre { "{report}" }
            }
        }
    }
}
