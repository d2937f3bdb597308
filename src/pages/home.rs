//! Public landing page with the login/register entry points.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::ApiClient;
use crate::net::types::Publicacion;
use crate::routing::publication_path;
use crate::state::ui::UiState;
use crate::util::lifetime::page_alive_flag;

const FEATURED_COUNT: usize = 3;

/// Landing page for anonymous visitors.
#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let api = expect_context::<ApiClient>();

    let featured = RwSignal::new(Vec::<Publicacion>::new());
    let alive = page_alive_flag();
    leptos::task::spawn_local(async move {
        let loaded = api.publications(None).await;
        if !alive.is_alive() {
            return;
        }
        match loaded {
            Ok(mut list) => {
                list.truncate(FEATURED_COUNT);
                featured.set(list);
            }
            Err(err) => log::warn!("featured publications unavailable: {err}"),
        }
    });

    view! {
        <section class="hero">
            <h1>"Sistema Nacional de Identificación Única del Ganado Bovino"</h1>
            <p>"Registre su hato, controle su producción y gestione transferencias entre predios."</p>
            <div class="hero__actions">
                <button class="btn btn--primary" on:click=move |_| ui.update(UiState::open_register)>
                    "Crear cuenta"
                </button>
                <button class="btn" on:click=move |_| ui.update(UiState::open_login)>
                    "Iniciar sesión"
                </button>
            </div>
        </section>
        <section class="featured">
            <For
                each=move || featured.get()
                key=|p| p.id
                children=|p| {
                    view! {
                        <article class="featured__card">
                            <h3>
                                <A href=publication_path(p.id)>{p.titulo}</A>
                            </h3>
                            <p>{p.resumen}</p>
                        </article>
                    }
                }
            />
        </section>
    }
}
