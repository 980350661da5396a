//! Root component, router and the handle views use to reach app state.

use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::content::ContentBundle;
use crate::i18n::{self, Locale};
use crate::marketplace::Catalog;
use crate::state::{AppAction, AppState, AuthModal, RouteEffect, Session, ViewState};
use crate::views::{Analysis, Community, DashboardHome, DashboardShell, Landing, Marketplace};

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Landing {},
        #[nest("/dashboard")]
            #[layout(DashboardShell)]
                #[route("/")]
                DashboardHome {},
                #[route("/analysis")]
                Analysis {},
                #[route("/marketplace")]
                Marketplace {},
                #[route("/community")]
                Community {},
}

impl From<ViewState> for Route {
    fn from(view: ViewState) -> Self {
        match view {
            ViewState::Landing => Route::Landing {},
            ViewState::DashboardHome => Route::DashboardHome {},
            ViewState::Analysis => Route::Analysis {},
            ViewState::Marketplace => Route::Marketplace {},
            ViewState::Community => Route::Community {},
        }
    }
}

impl From<&Route> for ViewState {
    fn from(route: &Route) -> Self {
        match route {
            Route::Landing {} => ViewState::Landing,
            Route::DashboardHome {} => ViewState::DashboardHome,
            Route::Analysis {} => ViewState::Analysis,
            Route::Marketplace {} => ViewState::Marketplace,
            Route::Community {} => ViewState::Community,
        }
    }
}

/// Copyable access to the shared state plus the router, for components
/// rendered inside the `Router`.
#[derive(Clone, Copy)]
pub struct AppHandle {
    state: Signal<AppState>,
    catalog: Signal<Catalog>,
    navigator: Navigator,
}

impl AppHandle {
    pub fn locale(&self) -> Locale {
        self.state.read().locale
    }

    pub fn content(&self) -> &'static ContentBundle {
        i18n::content(self.locale())
    }

    pub fn session(&self) -> Option<Session> {
        self.state.read().session.clone()
    }

    pub fn auth_modal(&self) -> AuthModal {
        self.state.read().auth_modal
    }

    pub fn view(&self) -> ViewState {
        self.state.read().view
    }

    /// Run the reducer, then carry out the effects it asked for.
    pub fn dispatch(&mut self, action: AppAction) {
        let effects = self.state.write().dispatch(action);

        if let Some(locale) = effects.persist_locale {
            i18n::persist_locale(locale);
        }
        if effects.reset_catalog {
            self.catalog.write().reset();
        }
        match effects.route {
            Some(RouteEffect::Push(view)) => {
                self.navigator.push(Route::from(view));
            }
            Some(RouteEffect::Replace(view)) => {
                self.navigator.replace(Route::from(view));
            }
            None => {}
        }
    }
}

pub fn use_app() -> AppHandle {
    AppHandle {
        state: use_context::<Signal<AppState>>(),
        catalog: use_context::<Signal<Catalog>>(),
        navigator: use_navigator(),
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(AppConfig::from_env);
    use_context_provider(|| Signal::new(AppState::with_locale(i18n::load_persisted_locale())));
    use_context_provider(|| Signal::new(Catalog::seeded()));

    rsx! {
        document::Title { "FarmSmart" }
        document::Style { "{THEME_CSS}" }
        Router::<Route> {}
    }
}

/// Outer layout: feeds every route change through the navigation guard.
#[component]
fn Shell() -> Element {
    let route = use_route::<Route>();
    let mut app = use_app();
    let routed = ViewState::from(&route);

    use_effect(use_reactive((&routed,), move |(routed,)| {
        app.dispatch(AppAction::RouteChanged(routed));
    }));

    rsx! {
        Outlet::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_and_views_correspond() {
        for view in [
            ViewState::Landing,
            ViewState::DashboardHome,
            ViewState::Analysis,
            ViewState::Marketplace,
            ViewState::Community,
        ] {
            assert_eq!(ViewState::from(&Route::from(view)), view);
        }
    }

    #[test]
    fn route_paths() {
        assert_eq!(Route::Landing {}.to_string(), "/");
        assert!(Route::DashboardHome {}.to_string().starts_with("/dashboard"));
        assert_eq!(Route::Analysis {}.to_string(), "/dashboard/analysis");
        assert_eq!(Route::Marketplace {}.to_string(), "/dashboard/marketplace");
        assert_eq!(Route::Community {}.to_string(), "/dashboard/community");
    }

    #[test]
    fn theme_is_embedded() {
        assert!(THEME_CSS.contains(".hero"));
    }
}
