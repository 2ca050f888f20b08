use crate::api::use_api;
use crate::routes::Route;
use crate::session::use_session;
use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardHeader, CardTitle, Input};

/// Login page with email/password. On success the session (token +
/// user) is persisted, the one-shot alert flag is armed, and the user
/// lands on the expedientes list.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let api = use_api();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: skip the form entirely.
    if session.is_authenticated() {
        navigator().push(Route::Expedientes {});
    }

    let handle_login = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);

            match api.login(email(), password()).await {
                Ok(sesion) => {
                    session.iniciar(sesion);
                    navigator().push(Route::Expedientes {});
                }
                Err(err) => {
                    error_msg.set(Some(err.to_string()));
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-intro",
                h1 { "Sistema Judicial" }
                p { "Te ayuda a gestionar y optimizar tus procesos legales de forma eficiente." }
            }
            Card {
                CardHeader {
                    CardTitle { "Iniciar Sesión" }
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }
                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Input {
                                input_type: "email",
                                label: "Correo electrónico",
                                placeholder: "ejemplo@correo.com",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                input_type: "password",
                                label: "Contraseña",
                                placeholder: "********",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { "Ingresando..." } else { "Ingresar" }
                        }
                    }
                }
            }
        }
    }
}
