use dioxus::prelude::*;

use crate::app::{use_app, Route};
use crate::components::{Button, ButtonVariant, Card, LocaleSelect};
use crate::state::{AppAction, ViewState};

/// Layout for every `/dashboard` route: top bar plus the active view.
/// Renders nothing until a session exists; the router guard redirects.
#[component]
pub fn DashboardShell() -> Element {
    let mut app = use_app();
    let Some(_session) = app.session() else {
        return rsx! {};
    };
    let dashboard = &app.content().dashboard;
    let current = app.view();

    rsx! {
        div { class: "dashboard",
            header { class: "dashboard__bar",
                button {
                    class: "dashboard__brand",
                    r#type: "button",
                    onclick: move |_| app.dispatch(AppAction::Navigate(ViewState::DashboardHome)),
                    "🌿 FarmSmart"
                }
                nav { class: "dashboard__nav",
                    for action in dashboard.actions.iter() {
                        DashboardLink {
                            view: action.view,
                            label: action.title.clone(),
                            active: action.view == current,
                        }
                    }
                }
                div { class: "dashboard__tools",
                    LocaleSelect {}
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| app.dispatch(AppAction::Logout),
                        "{dashboard.logout}"
                    }
                }
            }
            main { class: "dashboard__content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn DashboardLink(view: ViewState, label: String, active: bool) -> Element {
    let mut app = use_app();
    let class = if active {
        "dashboard__link dashboard__link--active"
    } else {
        "dashboard__link"
    };
    rsx! {
        button {
            class,
            r#type: "button",
            onclick: move |_| app.dispatch(AppAction::Navigate(view)),
            "{label}"
        }
    }
}

#[component]
pub fn DashboardHome() -> Element {
    let mut app = use_app();
    let dashboard = &app.content().dashboard;
    let name = app
        .session()
        .and_then(|session| session.display_name().map(str::to_string))
        .unwrap_or_else(|| dashboard.default_user.clone());

    rsx! {
        section { class: "dashboard-home",
            h1 { class: "page-title", "{dashboard.welcome}" }
            p { class: "dashboard-home__greeting", "{dashboard.greeting}, {name}!" }
            h2 { class: "section-title", "{dashboard.quick_actions_title}" }
            div { class: "quick-actions",
                for action in dashboard.actions.iter() {
                    Card {
                        class: format!("quick-action quick-action--{}", action.view.slug()),
                        onclick: {
                            let view = action.view;
                            move |_| app.dispatch(AppAction::Navigate(view))
                        },
                        div { class: "quick-action__icon", "{action.icon}" }
                        h3 { class: "quick-action__title", "{action.title}" }
                        p { class: "quick-action__description", "{action.description}" }
                    }
                }
            }
        }
    }
}
