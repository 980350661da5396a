//! Reusable building blocks shared by the landing page and the dashboard.

mod app_navbar;
mod auth_modal;
mod button;
mod card;
mod locale_select;
mod modal;

pub use app_navbar::AppNavbar;
pub use auth_modal::AuthModal;
pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use locale_select::LocaleSelect;
pub use modal::Modal;
