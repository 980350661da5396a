//! Shared UI crate for FarmSmart. State, content, components, views and the
//! router live here; the platform crates only launch [`App`].

pub mod analysis;
pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod core;
pub mod i18n;
pub mod marketplace;
pub mod state;
pub mod views;

pub use app::{use_app, App, AppHandle, Route};
