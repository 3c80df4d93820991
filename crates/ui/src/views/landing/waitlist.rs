use dioxus::prelude::*;
use services::Clock;

use crate::context::AppContext;
use crate::motion::use_reveal_on_visible;
use crate::vm::{WaitlistFormVm, reveal_class};

#[component]
pub(super) fn Waitlist() -> Element {
    let ctx = use_context::<AppContext>();
    let revealed = use_reveal_on_visible("waitlist");
    let mut form = use_signal(WaitlistFormVm::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(email) = form.write().begin_submit() else {
            return;
        };
        let waitlist = ctx.waitlist();
        spawn(async move {
            let clock = Clock::monotonic();
            let outcome = waitlist.submit(&email).await.map(|_| ());
            let expires = form.write().finish(clock.now(), outcome);
            if let Some(deadline) = expires {
                tokio::time::sleep(deadline.saturating_sub(clock.now())).await;
                form.write().advance(clock.now());
            }
        });
    };

    let (email, loading, success, error) = {
        let form = form.read();
        (
            form.email().to_string(),
            form.is_loading(),
            form.show_success(),
            form.error(),
        )
    };
    let button_class = if loading { "cta cta--busy" } else { "cta" };

    rsx! {
        section { id: "waitlist", class: "waitlist",
            div { class: "{reveal_class(revealed())}",
                h2 { "Time to level up your news game" }
                p { class: "lede",
                    "We're changing how news works. Grab your spot before the waitlist fills up."
                }
                form { class: "waitlist-form", onsubmit,
                    div { class: "waitlist-row",
                        input {
                            r#type: "email",
                            value: "{email}",
                            placeholder: "Drop your email here",
                            required: true,
                            disabled: loading,
                            oninput: move |evt: FormEvent| form.write().set_email(evt.value()),
                        }
                        button { r#type: "submit", class: button_class, disabled: loading,
                            if loading { "Loading..." } else { "Get Early Access" }
                        }
                    }
                    if success {
                        div { class: "notice notice--success",
                            "You're officially in. We'll reach out with early access soon!"
                        }
                    }
                    if let Some(message) = error {
                        div { class: "notice notice--error", "{message}" }
                    }
                    p { class: "fine-print", "Your email stays private and safe with us." }
                }
            }
        }
    }
}
