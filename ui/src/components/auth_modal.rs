use dioxus::prelude::*;

use crate::app::use_app;
use crate::components::{Button, ButtonVariant, Modal};
use crate::state::{AppAction, AuthMode};

/// Login / signup dialog. Only the email is required; the remaining fields
/// are collected for the form's sake and dropped on submit.
#[component]
pub fn AuthModal() -> Element {
    let mut app = use_app();
    let modal = app.auth_modal();
    let auth = &app.content().auth;
    let copy = auth.mode(modal.mode);
    let is_signup = modal.mode == AuthMode::Signup;

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        app.dispatch(AppAction::SubmitAuth {
            email: email(),
            password: password(),
        });
    };

    rsx! {
        Modal {
            title: copy.title.clone(),
            close_label: auth.close.clone(),
            on_close: move |_| app.dispatch(AppAction::CloseAuth),
            p { class: "modal__subtitle", "{copy.subtitle}" }
            form { class: "form", onsubmit: on_submit,
                if is_signup {
                    input {
                        class: "form__input",
                        r#type: "text",
                        name: "name",
                        placeholder: "{auth.fields.name}",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                input {
                    class: "form__input",
                    r#type: "email",
                    name: "email",
                    required: true,
                    placeholder: "{auth.fields.email}",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    class: "form__input",
                    r#type: "password",
                    name: "password",
                    placeholder: "{auth.fields.password}",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                if is_signup {
                    input {
                        class: "form__input",
                        r#type: "password",
                        name: "confirm-password",
                        placeholder: "{auth.fields.confirm_password}",
                        value: "{confirm}",
                        oninput: move |evt| confirm.set(evt.value()),
                    }
                }
                Button { kind: "submit", block: true, "{copy.button}" }
            }
            p { class: "modal__switch",
                "{copy.alt_text} "
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| app.dispatch(AppAction::ToggleAuthMode),
                    "{copy.alt_action}"
                }
            }
        }
    }
}
