//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::header::Header;
use crate::components::modal_host::ModalHost;
use crate::components::route_gate::RouteGate;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::interceptor::AuthInterceptor;
use crate::net::transport::FetchTransport;
use crate::pages::{
    admin_home::AdminHomePage, home::HomePage, publication::PublicationPage, publications::PublicationsPage,
    user_home::UserHomePage,
};
use crate::routing::guards::{ADMIN_ROUTE, PUBLIC_ROUTE, RANCHER_ROUTE};
use crate::state::session::SessionStore;
use crate::state::ui::UiState;
use crate::util::storage::default_storage;

fn load_config() -> ClientConfig {
    ClientConfig::from_env().unwrap_or_else(|err| {
        log::warn!("invalid build configuration, using defaults: {err}");
        ClientConfig::default()
    })
}

/// Root application component.
///
/// Provides the session, UI state and API client contexts and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::load(default_storage()));
    let ui = RwSignal::new(UiState::default());
    let interceptor = AuthInterceptor::new(Arc::new(session), Arc::new(ui));
    let api = ApiClient::new(load_config(), Arc::new(FetchTransport), interceptor);

    provide_context(session);
    provide_context(ui);
    provide_context(api);

    view! {
        <Title text="SNIUGB"/>

        <Router>
            <RedirectListener/>
            <Header/>
            <main>
                <Routes fallback=|| "Página no encontrada.".into_view()>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <RouteGate guards=PUBLIC_ROUTE><HomePage/></RouteGate> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <RouteGate guards=ADMIN_ROUTE><AdminHomePage/></RouteGate> }
                    />
                    <Route
                        path=StaticSegment("user")
                        view=|| view! { <RouteGate guards=RANCHER_ROUTE><UserHomePage/></RouteGate> }
                    />
                    <Route path=StaticSegment("publicaciones") view=PublicationsPage/>
                    <Route path=(StaticSegment("publicaciones"), ParamSegment("id")) view=PublicationPage/>
                </Routes>
            </main>
            <ModalHost/>
        </Router>
    }
}

/// Performs navigation requested through `UiState::pending_redirect`.
#[component]
fn RedirectListener() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if ui.with(|s| s.pending_redirect.is_none()) {
            return;
        }
        if let Some(path) = ui.try_update(UiState::take_redirect).flatten() {
            navigate(&path, NavigateOptions::default());
        }
    });
}
