use dioxus::prelude::*;

/// White rounded panel used for features, quick actions, listings and reports.
#[component]
pub fn Card(
    #[props(default)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let clickable = onclick.is_some();
    rsx! {
        div {
            class: "card {class}",
            "data-clickable": clickable,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
