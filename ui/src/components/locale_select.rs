use dioxus::prelude::*;

use crate::app::use_app;
use crate::i18n::Locale;
use crate::state::AppAction;

/// Language picker bound to the app locale.
#[component]
pub fn LocaleSelect() -> Element {
    let mut app = use_app();
    let current = app.locale();
    let label = app.content().nav.language_label.clone();

    let on_change = move |evt: FormEvent| {
        if let Some(locale) = Locale::from_token(&evt.value()) {
            app.dispatch(AppAction::SetLocale(locale));
        }
    };

    rsx! {
        label { class: "locale-select",
            span { class: "visually-hidden", "{label}" }
            select {
                class: "locale-select__input",
                "aria-label": "{label}",
                value: current.token(),
                onchange: on_change,
                for locale in Locale::ALL {
                    option {
                        value: locale.token(),
                        selected: locale == current,
                        {locale.display_name()}
                    }
                }
            }
        }
    }
}
