use dioxus::prelude::*;

const FEATURES: [(&str, &str); 3] = [
    (
        "Swipe the headlines",
        "Today's biggest stories as short cards you can get through in minutes.",
    ),
    (
        "Ask anything",
        "Confused by a story? Ask a follow-up and get a plain answer.",
    ),
    (
        "Why it matters to you",
        "Every card explains what the news means for your money, work and life.",
    ),
];

#[component]
pub(super) fn Features() -> Element {
    rsx! {
        section { class: "features",
            h2 { "Built for how you actually read" }
            div { class: "feature-grid",
                for (title, body) in FEATURES {
                    div { key: "{title}", class: "feature",
                        h3 { "{title}" }
                        p { "{body}" }
                    }
                }
            }
        }
    }
}

#[component]
pub(super) fn Mission() -> Element {
    rsx! {
        section { class: "mission",
            h2 { "Our mission" }
            p {
                "Staying informed shouldn't feel like a chore. QuickScope turns the news "
                "into something you can skim, question and actually understand."
            }
        }
    }
}

#[component]
pub(super) fn Footer() -> Element {
    rsx! {
        footer { class: "site-footer",
            span { class: "brand", "QuickScope" }
            p { "Quick, personalized news that actually makes sense." }
        }
    }
}
