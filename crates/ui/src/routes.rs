use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator};

use crate::context::AppContext;
use crate::views::{LandingView, PitchView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", LandingView)] Landing {},
        #[route("/pitch", PitchView)] Pitch {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    use_hook(move || {
        if ctx.take_start_on_pitch() {
            navigator.replace(Route::Pitch {});
        }
    });

    rsx! {
        div { class: "app",
            Header {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Header() -> Element {
    rsx! {
        header { class: "site-header",
            span { class: "brand", "QuickScope" }
            nav {
                Link { to: Route::Landing {}, "Home" }
                Link { to: Route::Pitch {}, "Pitch" }
            }
        }
    }
}
