//! Placeholder authentication.
//!
//! This is a stand-in for a real identity provider: any non-blank email is
//! accepted and the password is never inspected. Sessions live in memory only.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
}

impl Session {
    /// Local part of the email (before `@`), if there is one.
    pub fn display_name(&self) -> Option<&str> {
        let local = self.email.split('@').next().unwrap_or_default().trim();
        (!local.is_empty()).then_some(local)
    }
}

/// Accepts any non-blank email. The password is captured by the form but not
/// checked.
pub fn sign_in(email: &str, _password: &str) -> Option<Session> {
    let email = email.trim();
    if email.is_empty() {
        return None;
    }
    Some(Session {
        email: email.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthModal {
    pub open: bool,
    pub mode: AuthMode,
}
