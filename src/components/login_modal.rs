//! Login dialog: DNI and password with inline per-field errors.

#[cfg(test)]
#[path = "login_modal_test.rs"]
mod login_modal_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::routing::{Redirect, home_for};
use crate::state::ui::UiState;

pub const MSG_MISSING_DNI: &str = "Ingrese DNI";
pub const MSG_MISSING_PASSWORD: &str = "Ingrese contraseña";
pub const MSG_BAD_CREDENTIALS: &str = "Datos incorrectos";

/// Inline error under each login field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub dni: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    pub fn is_empty(self) -> bool {
        self.dni.is_none() && self.password.is_none()
    }

    /// Shown on both fields when the backend refuses the credentials.
    pub fn bad_credentials() -> Self {
        Self { dni: Some(MSG_BAD_CREDENTIALS), password: Some(MSG_BAD_CREDENTIALS) }
    }
}

pub fn validate_login_input(dni: &str, password: &str) -> LoginErrors {
    LoginErrors {
        dni: dni.trim().is_empty().then_some(MSG_MISSING_DNI),
        password: password.is_empty().then_some(MSG_MISSING_PASSWORD),
    }
}

#[component]
pub fn LoginModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let api = expect_context::<ApiClient>();

    let dni = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(LoginErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let dni_value = dni.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        let found = validate_login_input(&dni_value, &password_value);
        errors.set(found);
        if !found.is_empty() {
            return;
        }
        busy.set(true);

        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.sign_in(&dni_value, &password_value).await {
                Ok(session) => {
                    ui.update(UiState::close_all);
                    ui.redirect(home_for(session.role));
                }
                Err(err) => {
                    log::info!("login refused: {err}");
                    errors.set(LoginErrors::bad_credentials());
                    dni.set(String::new());
                    password.set(String::new());
                }
            }
            busy.set(false);
        });
    };

    let on_close = move |_| ui.update(UiState::close_all);
    let on_register = move |_| ui.update(UiState::open_register);
    let on_forgot = move |_| ui.update(UiState::open_forgot_password);

    view! {
        <div class="dialog-backdrop" on:click=on_close>
            <div class="dialog dialog--login" on:click=move |ev| ev.stop_propagation()>
                <h2>"Iniciar sesión"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        inputmode="numeric"
                        maxlength="8"
                        placeholder="DNI"
                        prop:value=move || dni.get()
                        on:input=move |ev| dni.set(event_target_value(&ev))
                    />
                    <Show when=move || errors.get().dni.is_some()>
                        <p class="auth-error">{move || errors.get().dni.unwrap_or_default()}</p>
                    </Show>
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Contraseña"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || errors.get().password.is_some()>
                        <p class="auth-error">{move || errors.get().password.unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Ingresar"
                    </button>
                </form>
                <div class="dialog__links">
                    <button class="btn btn--link" on:click=on_forgot>"¿Olvidó su contraseña?"</button>
                    <button class="btn btn--link" on:click=on_register>"Crear cuenta"</button>
                </div>
            </div>
        </div>
    }
}
