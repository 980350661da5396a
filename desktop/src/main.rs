#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::tao::{dpi::LogicalSize, window::WindowBuilder};
#[cfg(feature = "desktop")]
use dioxus::desktop::Config;
#[cfg(any(feature = "desktop", feature = "server"))]
use dioxus::prelude::*;

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("FarmSmart – v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(LogicalSize::new(1280.0, 860.0)),
            ),
        )
        .launch(ui::App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(ui::App);
}
