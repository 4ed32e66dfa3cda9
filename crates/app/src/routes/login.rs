use crate::routes::Route;
use crate::session::BrowserSessionStore;
use client::{sign_in, SearchClient};
use dioxus::prelude::*;
use shared_types::{FilterState, LoginRequest};
use shared_ui::{Button, Card, CardContent, CardHeader, CardTitle, Input, Label};
use std::collections::HashMap;

/// Username/password gate. Any non-empty password is accepted; the username
/// must resolve to a public profile.
#[component]
pub fn Login() -> Element {
    let client = use_context::<SearchClient>();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        async move {
            if loading() {
                return;
            }
            loading.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let request = LoginRequest::new(&username(), &password());
            match sign_in(&client, &BrowserSessionStore, &request).await {
                Ok(_) => {
                    navigator().push(Route::Home {
                        filters: FilterState::default(),
                    });
                }
                Err(err) => {
                    field_errors.set(err.field_errors.clone());
                    error_msg.set(Some(err.friendly_message()));
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "💻 Login now!" }
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", role: "alert", "{err}" }
                    }

                    form { class: "auth-form", onsubmit: handle_login,
                        div { class: "auth-field",
                            Label { html_for: "username", "Username" }
                            Input {
                                id: "username",
                                placeholder: "belter",
                                value: username(),
                                on_input: move |evt: FormEvent| username.set(evt.value()),
                            }
                            if let Some(err) = field_errors().get("username") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }

                        div { class: "auth-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                id: "password",
                                input_type: "password",
                                placeholder: "enter 12345",
                                value: password(),
                                on_input: move |evt: FormEvent| password.set(evt.value()),
                            }
                            if let Some(err) = field_errors().get("password") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }

                        Button {
                            class: "auth-submit",
                            button_type: "submit",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Login" }
                        }
                    }
                }
            }
        }
    }
}
