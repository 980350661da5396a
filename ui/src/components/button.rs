use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    White,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn--primary",
            ButtonVariant::Outline => "btn btn--outline",
            ButtonVariant::White => "btn btn--white",
            ButtonVariant::Ghost => "btn btn--ghost",
        }
    }
}

/// Shared button. Defaults to `type="button"` so it never submits a form by
/// accident; pass `kind: "submit"` for form buttons.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "button")] kind: &'static str,
    #[props(default)] disabled: bool,
    #[props(default)] block: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let class = if block {
        format!("{} btn--block", variant.class())
    } else {
        variant.class().to_string()
    };

    rsx! {
        button {
            class: "{class}",
            r#type: kind,
            disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
