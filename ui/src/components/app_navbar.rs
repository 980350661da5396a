use dioxus::prelude::*;

use crate::app::use_app;
use crate::components::LocaleSelect;

/// Landing page header: brand, in-page section links and the language picker.
///
/// Section links point at the footer groups (`#solutions`, `#company`,
/// `#connect`) so they work without routing.
#[component]
pub fn AppNavbar() -> Element {
    let app = use_app();
    let nav = &app.content().nav;

    rsx! {
        header { class: "navbar",
            div { class: "navbar__inner",
                a { class: "navbar__brand", href: "#top",
                    span { class: "navbar__logo", "🌿" }
                    span { class: "navbar__name", "FarmSmart" }
                }
                nav { class: "navbar__links",
                    a { class: "navbar__link", href: "#solutions", "{nav.solutions}" }
                    a { class: "navbar__link", href: "#company", "{nav.company}" }
                    a { class: "navbar__link", href: "#connect", "{nav.contact}" }
                }
                LocaleSelect {}
            }
        }
    }
}
