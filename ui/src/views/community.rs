use dioxus::prelude::*;

use crate::app::use_app;
use crate::components::Card;

/// Placeholder until discussion boards exist.
#[component]
pub fn Community() -> Element {
    let app = use_app();
    let community = &app.content().community;
    rsx! {
        section { class: "community",
            h1 { class: "page-title", "{community.title}" }
            Card { class: "community__placeholder",
                div { class: "community__icon", "👥" }
                p { "{community.body}" }
            }
        }
    }
}
