//! Public article listing with a category filter.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::ApiClient;
use crate::net::types::Publicacion;
use crate::routing::publication_path;
use crate::util::lifetime::page_alive_flag;

#[component]
pub fn PublicationsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let alive = page_alive_flag();

    let categories = RwSignal::new(Vec::<String>::new());
    let selected = RwSignal::new(None::<String>);
    let articles = RwSignal::new(Vec::<Publicacion>::new());
    let error = RwSignal::new(None::<String>);

    {
        let api = api.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let loaded = api.publication_categories().await;
            if alive.is_alive() {
                match loaded {
                    Ok(list) => categories.set(list),
                    Err(err) => log::warn!("publication categories unavailable: {err}"),
                }
            }
        });
    }

    Effect::new(move || {
        let categoria = selected.get();
        let api = api.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let loaded = api.publications(categoria.as_deref()).await;
            if !alive.is_alive() {
                return;
            }
            match loaded {
                Ok(list) => {
                    error.set(None);
                    articles.set(list);
                }
                Err(err) => error.set(Some(err.user_message("No se pudieron cargar las publicaciones."))),
            }
        });
    });

    view! {
        <section class="publications">
            <h1>"Publicaciones"</h1>
            <div class="publications__filters">
                <button
                    class="btn"
                    class:btn--selected=move || selected.with(Option::is_none)
                    on:click=move |_| selected.set(None)
                >
                    "Todas"
                </button>
                <For
                    each=move || categories.get()
                    key=Clone::clone
                    children=move |c| {
                        let value = c.clone();
                        let is_selected = c.clone();
                        view! {
                            <button
                                class="btn"
                                class:btn--selected=move || selected.with(|s| s.as_deref() == Some(is_selected.as_str()))
                                on:click=move |_| selected.set(Some(value.clone()))
                            >
                                {c}
                            </button>
                        }
                    }
                />
            </div>
            <Show when=move || error.with(Option::is_some)>
                <p class="auth-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <For
                each=move || articles.get()
                key=|p| p.id
                children=|p| {
                    view! {
                        <article class="publications__card">
                            <span class="publications__category">{p.categoria}</span>
                            <h3>
                                <A href=publication_path(p.id)>{p.titulo}</A>
                            </h3>
                            <p>{p.resumen}</p>
                            <time>{p.fecha_publicacion}</time>
                        </article>
                    }
                }
            />
        </section>
    }
}
