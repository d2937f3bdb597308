//! Render gate for guarded routes.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routing::guards::Guard;
use crate::state::session::SessionStore;
use crate::util::auth::{install_route_guards, route_allowed};

/// Builds `children` only while the session passes `guards`, and navigates
/// to the first guard's redirect otherwise. A denied page never mounts, so
/// its loads never start.
#[component]
pub fn RouteGate(guards: &'static [Guard], children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    install_route_guards(session, guards, use_navigate());
    let allowed = Memo::new(move |_| session.with(|store| route_allowed(guards, store)));

    view! { <Show when=move || allowed.get()>{children()}</Show> }
}
