//! The five-state view machine and its authentication guard.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewState {
    #[default]
    Landing,
    DashboardHome,
    Analysis,
    Marketplace,
    Community,
}

impl ViewState {
    pub fn is_dashboard(self) -> bool {
        !matches!(self, ViewState::Landing)
    }

    /// Apply the guard: dashboard views need a session, otherwise the landing
    /// page is shown instead.
    pub fn resolve(self, authenticated: bool) -> ViewState {
        if self.is_dashboard() && !authenticated {
            ViewState::Landing
        } else {
            self
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            ViewState::Landing => "landing",
            ViewState::DashboardHome => "dashboard-home",
            ViewState::Analysis => "analysis",
            ViewState::Marketplace => "marketplace",
            ViewState::Community => "community",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ViewState; 5] = [
        ViewState::Landing,
        ViewState::DashboardHome,
        ViewState::Analysis,
        ViewState::Marketplace,
        ViewState::Community,
    ];

    #[test]
    fn guard_sends_anonymous_users_to_landing() {
        for view in ALL {
            assert_eq!(view.resolve(false), ViewState::Landing);
        }
    }

    #[test]
    fn guard_lets_sessions_through() {
        for view in ALL {
            assert_eq!(view.resolve(true), view);
        }
    }

    #[test]
    fn slugs_match_serialized_names() {
        for view in ALL {
            let json = serde_json::to_string(&view).unwrap();
            assert_eq!(json, format!("\"{}\"", view.slug()));
        }
    }
}
