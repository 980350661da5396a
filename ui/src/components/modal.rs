use dioxus::prelude::*;

/// Centered dialog over a dimmed backdrop. Clicking the backdrop or the close
/// button calls `on_close`; clicks inside the panel do not.
#[component]
pub fn Modal(
    title: String,
    close_label: String,
    on_close: EventHandler<()>,
    #[props(default)] wide: bool,
    children: Element,
) -> Element {
    let panel_class = if wide {
        "modal__panel modal__panel--wide"
    } else {
        "modal__panel"
    };

    rsx! {
        div {
            class: "modal",
            role: "dialog",
            "aria-modal": "true",
            onclick: move |_| on_close.call(()),
            div {
                class: panel_class,
                onclick: move |evt| evt.stop_propagation(),
                div { class: "modal__header",
                    h2 { class: "modal__title", "{title}" }
                    button {
                        class: "modal__close",
                        r#type: "button",
                        title: "{close_label}",
                        "aria-label": "{close_label}",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                {children}
            }
        }
    }
}
