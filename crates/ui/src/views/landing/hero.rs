use dioxus::document::eval;
use dioxus::prelude::*;

use crate::motion::{scroll_into_view_script, use_reveal_on_mount};
use crate::vm::reveal_class;

#[component]
pub(super) fn Hero() -> Element {
    let revealed = use_reveal_on_mount();
    let reveal = reveal_class(revealed());

    rsx! {
        section { class: "hero",
            h1 { class: "{reveal}",
                span { class: "accent", "Quick, personalized news" }
                " that actually makes sense"
            }
            p { class: "{reveal} delay-1",
                "Swipe through today's headlines. Ask questions. Actually get it."
            }
            div { class: "{reveal} delay-2",
                button {
                    class: "cta",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        let _ = eval(&scroll_into_view_script("waitlist"));
                    },
                    "Get Early Access"
                }
            }
        }
    }
}
