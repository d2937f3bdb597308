//! Top navigation bar with login/register entry points and logout.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::ApiClient;
use crate::routing::{LANDING, PUBLICATIONS, Redirect, home_for};
use crate::state::session::SessionStore;
use crate::state::ui::UiState;

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let api = expect_context::<ApiClient>();

    let role = move || session.with(SessionStore::role);
    let home = move || role().map_or(LANDING, home_for).to_owned();

    let on_logout = move |_| {
        api.sign_out();
        log::info!("signed out");
        ui.update(UiState::close_all);
        ui.redirect(LANDING);
    };

    view! {
        <header class="site-header">
            <span class="site-header__brand">
                <A href=home>"SNIUGB"</A>
            </span>
            <nav class="site-header__nav">
                <A href=PUBLICATIONS>"Publicaciones"</A>
            </nav>
            <div class="site-header__actions">
                <Show
                    when=move || role().is_some()
                    fallback=move || {
                        view! {
                            <button class="btn" on:click=move |_| ui.update(UiState::open_login)>
                                "Iniciar sesión"
                            </button>
                            <button class="btn btn--primary" on:click=move |_| ui.update(UiState::open_register)>
                                "Registrarse"
                            </button>
                        }
                    }
                >
                    <span class="site-header__role">{move || role().map(|r| r.to_string()).unwrap_or_default()}</span>
                    <button class="btn" on:click=on_logout.clone()>"Cerrar sesión"</button>
                </Show>
            </div>
        </header>
    }
}
