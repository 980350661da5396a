use dioxus::prelude::*;

use crate::app::use_app;
use crate::components::{AppNavbar, AuthModal, Button, ButtonVariant, Card};
use crate::i18n::{content, Locale};
use crate::state::{AppAction, AuthMode};

/// Marketing page. Both "Get Started" buttons open the auth dialog.
#[component]
pub fn Landing() -> Element {
    let mut app = use_app();
    let locale = app.locale();
    let modal_open = app.auth_modal().open;

    let open_auth = move |_: MouseEvent| app.dispatch(AppAction::OpenAuth(AuthMode::Login));

    rsx! {
        div { class: "landing", id: "top",
            AppNavbar {}
            main {
                HeroSection { locale, on_get_started: open_auth }
                StatsSection { locale }
                FeaturesSection { locale }
                CtaSection { locale, on_get_started: open_auth }
            }
            SiteFooter { locale }
            if modal_open {
                AuthModal {}
            }
        }
    }
}

#[component]
pub fn HeroSection(locale: Locale, on_get_started: Option<EventHandler<MouseEvent>>) -> Element {
    let hero = &content(locale).hero;
    rsx! {
        section { class: "hero",
            div { class: "hero__inner",
                h1 { class: "hero__title", "{hero.title}" }
                p { class: "hero__subtitle", "{hero.subtitle}" }
                div { class: "hero__actions",
                    Button {
                        onclick: move |evt| {
                            if let Some(handler) = &on_get_started {
                                handler.call(evt);
                            }
                        },
                        "{hero.get_started}"
                    }
                    Button { variant: ButtonVariant::Outline, "{hero.watch_demo}" }
                }
            }
        }
    }
}

#[component]
pub fn StatsSection(locale: Locale) -> Element {
    let stats = &content(locale).stats;
    rsx! {
        section { class: "stats",
            for stat in stats.iter() {
                div { class: "stats__item",
                    div { class: "stats__number", "{stat.number}" }
                    div { class: "stats__label", "{stat.label}" }
                }
            }
        }
    }
}

#[component]
pub fn FeaturesSection(locale: Locale) -> Element {
    let features = &content(locale).features;
    rsx! {
        section { class: "features",
            h2 { class: "section-title", "{features.title}" }
            div { class: "features__grid",
                for feature in features.items.iter() {
                    Card { class: "feature",
                        div { class: "feature__icon", "{feature.icon}" }
                        h3 { class: "feature__title", "{feature.title}" }
                        p { class: "feature__description", "{feature.description}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn CtaSection(locale: Locale, on_get_started: Option<EventHandler<MouseEvent>>) -> Element {
    let cta = &content(locale).cta;
    rsx! {
        section { class: "cta",
            h2 { class: "cta__title", "{cta.title}" }
            p { class: "cta__subtitle", "{cta.subtitle}" }
            Button {
                variant: ButtonVariant::White,
                onclick: move |evt| {
                    if let Some(handler) = &on_get_started {
                        handler.call(evt);
                    }
                },
                "{cta.button}"
            }
        }
    }
}

#[component]
pub fn SiteFooter(locale: Locale) -> Element {
    let footer = &content(locale).footer;
    rsx! {
        footer { class: "footer",
            div { class: "footer__grid",
                div { class: "footer__brand",
                    div { class: "footer__name", "🌿 FarmSmart" }
                    p { class: "footer__tagline", "{footer.tagline}" }
                }
                for group in footer.groups.iter() {
                    div { class: "footer__group", id: group.id,
                        h4 { class: "footer__title", "{group.title}" }
                        ul {
                            for link in group.links.iter() {
                                li { class: "footer__link", "{link}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
