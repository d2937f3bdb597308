//! Registration dialog with live password rules and backend error mapping.

#[cfg(test)]
#[path = "register_modal_test.rs"]
mod register_modal_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::error::{ApiError, ValidationIssue};
use crate::net::types::RegisterRequest;
use crate::state::ui::UiState;
use crate::util::password::PasswordChecks;

pub const MSG_REGISTERED: &str = "¡Registro exitoso! Ya puede iniciar sesión.";

/// Build the request, or `None` while any field is blank.
pub fn register_request(dni: &str, telefono: &str, email: &str, password: &str) -> Option<RegisterRequest> {
    let (dni, telefono, email) = (dni.trim(), telefono.trim(), email.trim());
    if dni.is_empty() || telefono.is_empty() || email.is_empty() || password.is_empty() {
        return None;
    }
    Some(RegisterRequest {
        numero_de_dni: dni.to_owned(),
        telefono: telefono.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Message shown for a failed registration.
pub fn register_error_message(err: &ApiError) -> String {
    const UNEXPECTED: &str = "Error inesperado. Intente más tarde.";
    match err.status() {
        Some(422) => match err.first_validation_issue().map(ValidationIssue::field) {
            Some(Some("numero_de_dni")) => "El DNI debe tener 8 dígitos.",
            Some(Some("telefono")) => "El teléfono debe tener 9 dígitos.",
            Some(Some("email")) => "El correo electrónico no es válido.",
            Some(_) => "Revise los datos ingresados.",
            None => UNEXPECTED,
        }
        .to_owned(),
        Some(400) => match err.detail_message() {
            Some(detail) => {
                let lower = detail.to_lowercase();
                if lower.contains("ya está registrado") {
                    "El DNI, correo o teléfono ya existe.".to_owned()
                } else if lower.contains("contraseña no cumple") {
                    "La contraseña no cumple los requisitos.".to_owned()
                } else {
                    detail.to_owned()
                }
            }
            None => UNEXPECTED.to_owned(),
        },
        Some(404) => err.detail_message().unwrap_or(UNEXPECTED).to_owned(),
        Some(500) => "Error del servidor. Por favor, intente de nuevo más tarde.".to_owned(),
        _ => UNEXPECTED.to_owned(),
    }
}

#[component]
pub fn RegisterModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let api = expect_context::<ApiClient>();

    let dni = RwSignal::new(String::new());
    let telefono = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let message = RwSignal::new(None::<(String, bool)>);
    let busy = RwSignal::new(false);

    let checks = Memo::new(move |_| PasswordChecks::evaluate(&password.get()));
    let form_invalid = move || {
        register_request(&dni.get(), &telefono.get(), &email.get(), &password.get()).is_none()
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(request) = register_request(
            &dni.get_untracked(),
            &telefono.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        ) else {
            return;
        };
        message.set(None);
        busy.set(true);

        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.register(&request).await {
                Ok(_) => {
                    log::info!("registration accepted");
                    message.set(Some((MSG_REGISTERED.to_owned(), false)));
                    #[cfg(feature = "csr")]
                    {
                        let delay = u64::from(api.config().modal_close_delay_ms);
                        gloo_timers::future::sleep(std::time::Duration::from_millis(delay)).await;
                    }
                    ui.update(UiState::close_all);
                }
                Err(err) => {
                    log::warn!("registration failed: {err}");
                    message.set(Some((register_error_message(&err), true)));
                }
            }
            busy.set(false);
        });
    };

    let on_close = move |_| ui.update(UiState::close_all);
    let on_login = move |_| ui.update(UiState::open_login);

    let rule = move |ok: bool, label: &'static str| {
        view! { <li class="password-rules__item" class:password-rules__item--ok=ok>{label}</li> }
    };

    view! {
        <div class="dialog-backdrop" on:click=on_close>
            <div class="dialog dialog--register" on:click=move |ev| ev.stop_propagation()>
                <h2>"Registrarse"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        maxlength="8"
                        placeholder="DNI"
                        prop:value=move || dni.get()
                        on:input=move |ev| dni.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="tel"
                        maxlength="9"
                        placeholder="Teléfono"
                        prop:value=move || telefono.get()
                        on:input=move |ev| telefono.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Correo electrónico"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type=move || if show_password.get() { "text" } else { "password" }
                        placeholder="Contraseña"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button type="button" class="btn btn--link" on:click=move |_| show_password.update(|v| *v = !*v)>
                        {move || if show_password.get() { "Ocultar" } else { "Mostrar" }}
                    </button>
                    <ul class="password-rules">
                        {move || {
                            let c = checks.get();
                            vec![
                                rule(c.length, "Entre 8 y 16 caracteres"),
                                rule(c.has_symbol, "Al menos un símbolo"),
                                rule(c.has_digit, "Al menos un número"),
                                rule(c.has_upper, "Al menos una mayúscula"),
                            ]
                        }}
                    </ul>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get() || form_invalid()>
                        "Registrarse"
                    </button>
                </form>
                <Show when=move || message.get().is_some()>
                    <p class:auth-error=move || message.get().is_some_and(|(_, e)| e)>
                        {move || message.get().map(|(m, _)| m).unwrap_or_default()}
                    </p>
                </Show>
                <button class="btn btn--link" on:click=on_login>"¿Ya tiene cuenta? Inicie sesión"</button>
            </div>
        </div>
    }
}
