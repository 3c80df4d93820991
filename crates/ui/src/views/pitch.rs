use dioxus::prelude::*;

use crate::context::AppContext;
use crate::motion::{use_phase_sequencer, use_visibility_tracker};
use crate::vm::{PITCH_SECTIONS, answer_card_class, pitch_section_class, question_card_class};

const PROBLEMS: [&str; 3] = [
    "News is filled with jargon and assumptions. We skim headlines but walk away confused.",
    "Most platforms are one-way. When confused, you're stuck googling or pretending to understand.",
    "News feels disconnected from our lives. Without clear relevance, we scroll past.",
];

/// Investor pitch deck: seven sections that fade with scroll position.
#[component]
pub fn PitchView() -> Element {
    let ctx = use_context::<AppContext>();
    let active = use_visibility_tracker("pitch", &PITCH_SECTIONS);
    let (phase, anchor) = use_phase_sequencer("pitch-scroll");

    let active = active();
    let phase = phase();
    let demo = ctx.headlines().first().cloned();
    let class = |index: usize| pitch_section_class(index, active);

    rsx! {
        div { class: "pitch",
            section { id: PITCH_SECTIONS[0], class: class(0),
                h1 { span { class: "accent", "QuickScope" } }
                p { class: "lede",
                    "Quick, personalized news powered by AI that explains what matters to you."
                }
                a { class: "cta", href: "mailto:hello@quickscope.app", "Talk to Us" }
            }
            section { id: PITCH_SECTIONS[1], class: class(1),
                h2 { "The problem" }
                p { "Staying informed shouldn't feel like a chore, but for Gen Z it often does." }
                ul {
                    for problem in PROBLEMS {
                        li { key: "{problem}", "{problem}" }
                    }
                }
            }
            section { id: PITCH_SECTIONS[2], class: class(2),
                h2 { "The solution" }
                p {
                    "QuickScope reimagines news with an AI-powered experience that makes "
                    "understanding the world effortless."
                }
                div {
                    id: "pitch-scroll",
                    class: "chat",
                    onmounted: move |_| anchor.mark_mounted(),
                    div { class: "chat-spacer" }
                    if let Some(item) = demo {
                        div { class: question_card_class(phase),
                            p { "{item.question}" }
                        }
                        div { class: answer_card_class(phase),
                            p { "{item.answer}" }
                        }
                    }
                }
            }
            section { id: PITCH_SECTIONS[3], class: class(3),
                h2 { "Why now" }
                p { "AI can finally explain the news one reader at a time, at the speed of a swipe." }
            }
            section { id: PITCH_SECTIONS[4], class: class(4),
                h2 { "Market" }
                p { "Gen Z is the largest generation that has no default news habit yet." }
            }
            section { id: PITCH_SECTIONS[5], class: class(5),
                h2 { "Vision" }
                p { "Become the first place a generation goes to understand what happened today." }
            }
            section { id: PITCH_SECTIONS[6], class: class(6),
                h2 { "The ask" }
                p { "We're raising a pre-seed round to launch the app and grow the waitlist." }
            }
        }
    }
}
