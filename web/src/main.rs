//! Browser entry point. Everything, including the theme, comes from `ui::App`.

fn main() {
    dioxus::launch(ui::App);
}
