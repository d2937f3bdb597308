//! Forgot-password dialog rendering the three wizard steps.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::DeliveryMethod;
use crate::state::password_reset::{PasswordResetWizard, ResetStep};
use crate::state::ui::UiState;

#[derive(Clone, Copy)]
enum Submit {
    Request,
    Verify,
    Reset,
}

#[component]
pub fn ForgotPasswordModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let api = expect_context::<ApiClient>();

    let wizard = RwSignal::new(PasswordResetWizard::default());
    let busy = RwSignal::new(false);

    // The wizard runs on a copy so no signal borrow is held across the await.
    let run = Callback::new(move |step: Submit| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let mut current = wizard.get_untracked();
            match step {
                Submit::Request => current.submit_request(&api).await,
                Submit::Verify => current.submit_verification(&api).await,
                Submit::Reset => current.submit_reset(&api).await,
            }
            let completed = current.is_completed();
            wizard.update(|w| w.absorb_outcome(&current));
            busy.set(false);

            if completed {
                #[cfg(feature = "csr")]
                {
                    let delay = u64::from(api.config().modal_close_delay_ms);
                    gloo_timers::future::sleep(std::time::Duration::from_millis(delay)).await;
                }
                ui.update(|state| {
                    state.close_all();
                    state.open_login();
                });
            }
        });
    });

    let on_close = move |_| ui.update(UiState::close_all);
    let step = move || wizard.with(PasswordResetWizard::step);
    let checks = move || wizard.with(PasswordResetWizard::password_checks);
    let method_is = move |m: DeliveryMethod| wizard.with(|w| w.method == Some(m));

    let rule = move |ok: bool, label: &'static str| {
        view! { <li class="password-rules__item" class:password-rules__item--ok=ok>{label}</li> }
    };

    view! {
        <div class="dialog-backdrop" on:click=on_close>
            <div class="dialog dialog--forgot" on:click=move |ev| ev.stop_propagation()>
                <h2>"Recuperar contraseña"</h2>

                <Show when=move || step() == ResetStep::Request>
                    <form
                        class="auth-form"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            run.run(Submit::Request);
                        }
                    >
                        <input
                            class="auth-input"
                            type="text"
                            maxlength="8"
                            placeholder="DNI"
                            prop:value=move || wizard.with(|w| w.dni.clone())
                            on:input=move |ev| wizard.update(|w| w.dni = event_target_value(&ev))
                        />
                        <div class="method-picker">
                            <button
                                type="button"
                                class="btn"
                                class:btn--selected=move || method_is(DeliveryMethod::Email)
                                on:click=move |_| wizard.update(|w| w.select_method(DeliveryMethod::Email))
                            >
                                "Correo"
                            </button>
                            <button
                                type="button"
                                class="btn"
                                class:btn--selected=move || method_is(DeliveryMethod::Whatsapp)
                                on:click=move |_| wizard.update(|w| w.select_method(DeliveryMethod::Whatsapp))
                            >
                                "WhatsApp"
                            </button>
                        </div>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Enviar código"
                        </button>
                    </form>
                </Show>

                <Show when=move || step() == ResetStep::Verify>
                    <form
                        class="auth-form"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            run.run(Submit::Verify);
                        }
                    >
                        <input
                            class="auth-input"
                            type="text"
                            maxlength="6"
                            placeholder="Código"
                            prop:value=move || wizard.with(|w| w.code.clone())
                            on:input=move |ev| wizard.update(|w| w.code = event_target_value(&ev))
                        />
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Verificar"
                        </button>
                    </form>
                </Show>

                <Show when=move || step() == ResetStep::Reset>
                    <form
                        class="auth-form"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            run.run(Submit::Reset);
                        }
                    >
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Nueva contraseña"
                            prop:value=move || wizard.with(|w| w.new_password.clone())
                            on:input=move |ev| wizard.update(|w| w.new_password = event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Confirmar contraseña"
                            prop:value=move || wizard.with(|w| w.confirm_password.clone())
                            on:input=move |ev| wizard.update(|w| w.confirm_password = event_target_value(&ev))
                        />
                        <ul class="password-rules">
                            {move || {
                                let c = checks();
                                vec![
                                    rule(c.length, "Entre 8 y 16 caracteres"),
                                    rule(c.has_symbol, "Al menos un símbolo"),
                                    rule(c.has_digit, "Al menos un número"),
                                    rule(c.has_upper, "Al menos una mayúscula"),
                                ]
                            }}
                        </ul>
                        <button
                            class="btn btn--primary"
                            type="submit"
                            disabled=move || busy.get() || wizard.with(PasswordResetWizard::is_completed)
                        >
                            "Cambiar contraseña"
                        </button>
                    </form>
                </Show>

                <Show when=move || wizard.with(|w| w.notice().is_some())>
                    <p class:auth-error=move || wizard.with(|w| w.notice().is_some_and(|n| n.is_error))>
                        {move || wizard.with(|w| w.notice().map(|n| n.text.clone()).unwrap_or_default())}
                    </p>
                </Show>
            </div>
        </div>
    }
}
