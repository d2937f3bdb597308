//! Property creation dialog.
//!
//! Shown by the rancher dashboard when the account has no properties yet, or
//! when "crear nuevo" is picked from the property selector. The department
//! list is loaded from the backend each time the dialog mounts.

#[cfg(test)]
#[path = "predio_modal_test.rs"]
mod predio_modal_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::{Departamento, Predio, PredioCreate};
use crate::util::lifetime::page_alive_flag;

pub const MSG_INCOMPLETE: &str = "Por favor, completa todos los campos.";
pub const MSG_DEPARTAMENTOS_FAILED: &str = "No se pudieron cargar los departamentos. Intente de nuevo.";
const FALLBACK_CREATE: &str = "Ocurrió un error inesperado.";

/// Shortest accepted property name, in characters.
pub const MIN_NOMBRE_LEN: usize = 3;

/// Builds the creation payload, or the message to show when the form is not
/// complete.
///
/// # Errors
///
/// Returns [`MSG_INCOMPLETE`] when a field is blank or the name is shorter
/// than [`MIN_NOMBRE_LEN`].
pub fn predio_create_request(
    nombre: &str,
    departamento: &str,
    ubicacion: &str,
) -> Result<PredioCreate, &'static str> {
    let (nombre, departamento, ubicacion) = (nombre.trim(), departamento.trim(), ubicacion.trim());
    if nombre.chars().count() < MIN_NOMBRE_LEN || departamento.is_empty() || ubicacion.is_empty() {
        return Err(MSG_INCOMPLETE);
    }
    Ok(PredioCreate {
        nombre_predio: nombre.to_owned(),
        departamento: departamento.to_owned(),
        ubicacion: ubicacion.to_owned(),
    })
}

/// Without `on_cancel` the dialog cannot be dismissed; a first property is
/// required before the dashboard has anything to show.
#[component]
pub fn PredioModal(on_created: Callback<Predio>, #[prop(optional)] on_cancel: Option<Callback<()>>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let alive = page_alive_flag();

    let nombre = RwSignal::new(String::new());
    let departamento = RwSignal::new(String::new());
    let ubicacion = RwSignal::new(String::new());
    let departamentos = RwSignal::new(Vec::<Departamento>::new());
    let loading_departamentos = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    {
        let api = api.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let loaded = api.departamentos().await;
            if !alive.is_alive() {
                return;
            }
            loading_departamentos.set(false);
            match loaded {
                Ok(list) => departamentos.set(list),
                Err(err) => {
                    log::warn!("departamentos unavailable: {err}");
                    error.set(Some(MSG_DEPARTAMENTOS_FAILED.to_owned()));
                }
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match predio_create_request(
            &nombre.get_untracked(),
            &departamento.get_untracked(),
            &ubicacion.get_untracked(),
        ) {
            Ok(request) => request,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        let api = api.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let created = api.create_predio(&request).await;
            if !alive.is_alive() {
                return;
            }
            busy.set(false);
            match created {
                Ok(predio) => {
                    log::info!("predio {} created", predio.codigo_predio);
                    on_created.run(predio);
                }
                Err(err) => error.set(Some(err.user_message(FALLBACK_CREATE))),
            }
        });
    };

    let dismiss = move || {
        if let Some(cancel) = on_cancel {
            cancel.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| dismiss()>
            <div class="dialog dialog--predio" on:click=move |ev| ev.stop_propagation()>
                <h2>"Registrar predio"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Nombre del predio"
                        prop:value=move || nombre.get()
                        on:input=move |ev| nombre.set(event_target_value(&ev))
                    />
                    <select
                        class="auth-input"
                        disabled=move || loading_departamentos.get()
                        on:change=move |ev| departamento.set(event_target_value(&ev))
                    >
                        <option value="" selected=move || departamento.with(String::is_empty)>
                            {move || if loading_departamentos.get() { "Cargando..." } else { "Departamento" }}
                        </option>
                        <For
                            each=move || departamentos.get()
                            key=|d| d.nombre.clone()
                            children=move |d| {
                                let value = d.nombre.clone();
                                view! { <option value=value>{d.nombre}</option> }
                            }
                        />
                    </select>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Ubicación"
                        prop:value=move || ubicacion.get()
                        on:input=move |ev| ubicacion.set(event_target_value(&ev))
                    />
                    <div class="dialog__actions">
                        <Show when=move || on_cancel.is_some()>
                            <button type="button" class="btn" on:click=move |_| dismiss()>
                                "Cancelar"
                            </button>
                        </Show>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Guardar"
                        </button>
                    </div>
                </form>
                <Show when=move || error.with(Option::is_some)>
                    <p class="auth-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
