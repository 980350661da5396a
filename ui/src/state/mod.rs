//! Application state and its single reducer.
//!
//! `AppState` holds the locale, the session, the current view and the auth
//! modal. Every change goes through [`AppState::dispatch`], which returns the
//! side effects (route change, locale persistence, catalog reset) as data for
//! the component layer to carry out.

mod navigation;
mod session;

pub use navigation::ViewState;
pub use session::{sign_in, AuthModal, AuthMode, Session};

use tracing::{debug, info};

use crate::i18n::Locale;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub locale: Locale,
    pub session: Option<Session>,
    pub view: ViewState,
    pub auth_modal: AuthModal,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    SetLocale(Locale),
    OpenAuth(AuthMode),
    CloseAuth,
    ToggleAuthMode,
    SubmitAuth { email: String, password: String },
    Logout,
    /// User asked for a view (nav link, quick action, brand).
    Navigate(ViewState),
    /// The router landed on a view (address bar, history).
    RouteChanged(ViewState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteEffect {
    Push(ViewState),
    Replace(ViewState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Effects {
    pub route: Option<RouteEffect>,
    pub persist_locale: Option<Locale>,
    /// Listings added during the session are discarded.
    pub reset_catalog: bool,
}

impl AppState {
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn dispatch(&mut self, action: AppAction) -> Effects {
        let mut effects = Effects::default();

        match action {
            AppAction::SetLocale(locale) => {
                if self.locale != locale {
                    info!(from = %self.locale, to = %locale, "locale changed");
                    self.locale = locale;
                    effects.persist_locale = Some(locale);
                }
            }
            AppAction::OpenAuth(mode) => {
                self.auth_modal = AuthModal { open: true, mode };
            }
            AppAction::CloseAuth => {
                self.auth_modal.open = false;
            }
            AppAction::ToggleAuthMode => {
                self.auth_modal.mode = self.auth_modal.mode.toggled();
            }
            AppAction::SubmitAuth { email, password } => match sign_in(&email, &password) {
                Some(session) => {
                    info!(email = %session.email, "signed in");
                    self.session = Some(session);
                    self.auth_modal.open = false;
                    self.view = ViewState::DashboardHome;
                    effects.route = Some(RouteEffect::Push(ViewState::DashboardHome));
                }
                None => debug!("sign-in rejected: email is blank"),
            },
            AppAction::Logout => {
                if let Some(session) = self.session.take() {
                    info!(email = %session.email, "signed out");
                }
                self.view = ViewState::Landing;
                effects.route = Some(RouteEffect::Push(ViewState::Landing));
                effects.reset_catalog = true;
            }
            AppAction::Navigate(target) => {
                let resolved = target.resolve(self.is_authenticated());
                debug!(target = target.slug(), resolved = resolved.slug(), "navigate");
                self.view = resolved;
                effects.route = Some(RouteEffect::Push(resolved));
            }
            AppAction::RouteChanged(routed) => {
                let resolved = routed.resolve(self.is_authenticated());
                self.view = resolved;
                if resolved != routed {
                    debug!(routed = routed.slug(), "route rejected by guard");
                    effects.route = Some(RouteEffect::Replace(resolved));
                }
            }
        }

        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(email: &str) -> AppAction {
        AppAction::SubmitAuth {
            email: email.to_string(),
            password: "anything".to_string(),
        }
    }

    #[test]
    fn starts_on_landing_without_session() {
        let state = AppState::default();
        assert_eq!(state.view, ViewState::Landing);
        assert_eq!(state.locale, Locale::En);
        assert!(state.session.is_none());
        assert!(!state.auth_modal.open);
    }

    #[test]
    fn successful_login_closes_modal_and_opens_dashboard() {
        let mut state = AppState::default();
        state.dispatch(AppAction::OpenAuth(AuthMode::Login));
        let effects = state.dispatch(submit("asha@farm.in"));

        assert!(!state.auth_modal.open);
        assert_eq!(state.view, ViewState::DashboardHome);
        assert_eq!(
            effects.route,
            Some(RouteEffect::Push(ViewState::DashboardHome))
        );
    }

    #[test]
    fn blank_email_keeps_modal_open() {
        let mut state = AppState::default();
        state.dispatch(AppAction::OpenAuth(AuthMode::Signup));
        let before = state.clone();
        let effects = state.dispatch(submit("  "));

        assert_eq!(state, before);
        assert_eq!(effects, Effects::default());
    }

    #[test]
    fn dashboard_views_require_session() {
        let mut state = AppState::default();
        let effects = state.dispatch(AppAction::Navigate(ViewState::Marketplace));
        assert_eq!(state.view, ViewState::Landing);
        assert_eq!(effects.route, Some(RouteEffect::Push(ViewState::Landing)));

        let effects = state.dispatch(AppAction::RouteChanged(ViewState::Analysis));
        assert_eq!(state.view, ViewState::Landing);
        assert_eq!(effects.route, Some(RouteEffect::Replace(ViewState::Landing)));
    }

    #[test]
    fn permitted_route_change_needs_no_redirect() {
        let mut state = AppState::default();
        state.dispatch(submit("ravi@farm.in"));
        let effects = state.dispatch(AppAction::RouteChanged(ViewState::Community));
        assert_eq!(state.view, ViewState::Community);
        assert_eq!(effects.route, None);
    }

    #[test]
    fn logout_always_returns_to_landing() {
        let mut state = AppState::default();
        state.dispatch(submit("asha@farm.in"));
        state.dispatch(AppAction::Navigate(ViewState::Analysis));

        let effects = state.dispatch(AppAction::Logout);
        assert!(state.session.is_none());
        assert_eq!(state.view, ViewState::Landing);
        assert_eq!(effects.route, Some(RouteEffect::Push(ViewState::Landing)));
        assert!(effects.reset_catalog);
    }

    #[test]
    fn only_logout_resets_the_catalog() {
        let mut state = AppState::default();
        assert!(!state.dispatch(submit("asha@farm.in")).reset_catalog);
        assert!(!state.dispatch(AppAction::Navigate(ViewState::Marketplace)).reset_catalog);
        assert!(!state.dispatch(AppAction::SetLocale(Locale::Hi)).reset_catalog);
    }

    #[test]
    fn locale_change_is_persisted_once() {
        let mut state = AppState::default();
        let effects = state.dispatch(AppAction::SetLocale(Locale::Hi));
        assert_eq!(state.locale, Locale::Hi);
        assert_eq!(effects.persist_locale, Some(Locale::Hi));

        let effects = state.dispatch(AppAction::SetLocale(Locale::Hi));
        assert_eq!(effects.persist_locale, None);
    }

    #[test]
    fn auth_mode_toggle_keeps_modal_open() {
        let mut state = AppState::default();
        state.dispatch(AppAction::OpenAuth(AuthMode::Login));
        state.dispatch(AppAction::ToggleAuthMode);
        assert_eq!(
            state.auth_modal,
            AuthModal {
                open: true,
                mode: AuthMode::Signup
            }
        );
        state.dispatch(AppAction::CloseAuth);
        assert!(!state.auth_modal.open);
    }
}
