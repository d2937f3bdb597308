//! Administrator home.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::UserProfile;
use crate::util::lifetime::page_alive_flag;

#[component]
pub fn AdminHomePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let profile = RwSignal::new(None::<UserProfile>);
    let alive = page_alive_flag();
    leptos::task::spawn_local(async move {
        let loaded = api.current_user().await;
        if !alive.is_alive() {
            return;
        }
        match loaded {
            Ok(user) => profile.set(Some(user)),
            Err(err) => log::warn!("admin profile unavailable: {err}"),
        }
    });

    view! {
        <section class="admin-home">
            <h1>"Panel de administración"</h1>
            <Show when=move || profile.with(Option::is_some)>
                <p class="admin-home__welcome">
                    "Bienvenido, "
                    {move || profile.with(|p| p.as_ref().map(|u| u.nombre.clone()).unwrap_or_default())}
                </p>
            </Show>
        </section>
    }
}
