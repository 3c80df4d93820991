use dioxus::prelude::*;

use crate::context::AppContext;
use crate::motion::{use_content_rotator, use_phase_sequencer, use_reveal_on_mount};
use crate::vm::{
    answer_card_class, map_headline_cards, pagination_dot_class, question_card_class,
    reveal_class,
};

/// Desktop app mockup: rotating headline cards next to a scripted Q&A chat.
#[component]
pub(super) fn AppMockup() -> Element {
    let ctx = use_context::<AppContext>();
    let headlines = ctx.headlines();
    let revealed = use_reveal_on_mount();
    let active = use_content_rotator(headlines.len());
    let (phase, anchor) = use_phase_sequencer("mockup-scroll");

    let active = active();
    let phase = phase();
    let cards = map_headline_cards(&headlines, active);
    let current = headlines.get(active).cloned();

    rsx! {
        section { class: "mockup",
            div { class: "{reveal_class(revealed())}",
                h2 { "See how it works" }
                p { class: "lede",
                    "Experience news in a whole new way with our intuitive interface"
                }
                div { class: "device",
                    div { class: "device-bar",
                        span { class: "brand", "QuickScope" }
                        span { "Today's Top Stories" }
                        span { "My Feed" }
                    }
                    div { class: "device-body",
                        div { class: "headlines",
                            h3 { "Today's Headlines" }
                            for card in cards {
                                article {
                                    key: "{card.title}",
                                    class: "headline-card",
                                    style: "{card.style}",
                                    h4 { "{card.title}" }
                                    p { "{card.summary}" }
                                    div { class: "why",
                                        p { class: "why-label", "Why it matters to you:" }
                                        p { "{card.why_it_matters}" }
                                    }
                                }
                            }
                            div { class: "dots",
                                for index in 0..headlines.len() {
                                    span { key: "{index}", class: pagination_dot_class(index, active) }
                                }
                            }
                        }
                        div {
                            id: "mockup-scroll",
                            class: "chat",
                            onmounted: move |_| anchor.mark_mounted(),
                            div { class: "chat-spacer" }
                            if let Some(item) = current {
                                div { class: question_card_class(phase),
                                    p { "{item.question}" }
                                }
                                div { class: answer_card_class(phase),
                                    p { "{item.answer}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
