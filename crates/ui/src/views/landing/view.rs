use dioxus::prelude::*;

use super::hero::Hero;
use super::mockup::AppMockup;
use super::sections::{Features, Footer, Mission};
use super::waitlist::Waitlist;

#[component]
pub fn LandingView() -> Element {
    rsx! {
        div { class: "landing",
            Hero {}
            AppMockup {}
            Features {}
            Mission {}
            Waitlist {}
        }
        Footer {}
    }
}
