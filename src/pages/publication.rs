//! Single article view at `/publicaciones/:id`.

#[cfg(test)]
#[path = "publication_test.rs"]
mod publication_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::net::api::ApiClient;
use crate::net::types::Publicacion;
use crate::routing::PUBLICATIONS;
use crate::util::lifetime::page_alive_flag;

const MSG_NOT_FOUND: &str = "La publicación no existe.";
const FALLBACK_LOAD: &str = "No se pudo cargar la publicación.";

/// Article id from the route parameter. Only positive integers name an article.
pub fn parse_publication_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

#[component]
pub fn PublicationPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let params = use_params_map();
    let alive = page_alive_flag();

    let article = RwSignal::new(None::<Publicacion>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(id) = params.with(|p| parse_publication_id(p.get("id").as_deref())) else {
            article.set(None);
            error.set(Some(MSG_NOT_FOUND.to_owned()));
            return;
        };
        let api = api.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let loaded = api.publication(id).await;
            if !alive.is_alive() {
                return;
            }
            match loaded {
                Ok(found) => {
                    error.set(None);
                    article.set(Some(found));
                }
                Err(err) => {
                    log::warn!("publication {id} unavailable: {err}");
                    article.set(None);
                    let fallback = if err.status() == Some(404) { MSG_NOT_FOUND } else { FALLBACK_LOAD };
                    error.set(Some(err.user_message(fallback)));
                }
            }
        });
    });

    view! {
        <section class="publication">
            <A href=PUBLICATIONS>"Volver a publicaciones"</A>
            <Show when=move || error.with(Option::is_some)>
                <p class="auth-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || {
                article
                    .get()
                    .map(|p| {
                        view! {
                            <article class="publication__body">
                                <span class="publications__category">{p.categoria}</span>
                                <h1>{p.titulo}</h1>
                                <time>{p.fecha_publicacion}</time>
                                <img class="publication__image" src=p.imagen_principal alt=""/>
                                <div class="publication__content" inner_html=p.contenido_html></div>
                            </article>
                        }
                    })
            }}
        </section>
    }
}
