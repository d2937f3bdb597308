//! Shared route-guard wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded route installs the same effect: evaluate its guard chain
//! whenever the session changes and navigate away on the first redirect.
//! `components::route_gate` pairs that effect with a render gate so a denied
//! page is never built.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routing::guards::{Guard, GuardOutcome, run_guards};
use crate::state::session::SessionStore;

/// Target to navigate to when `store` may not enter a route guarded by `guards`.
pub fn guard_redirect(guards: &[Guard], store: &SessionStore) -> Option<&'static str> {
    match run_guards(guards, store.session()) {
        GuardOutcome::Allow => None,
        GuardOutcome::Redirect(path) => Some(path),
    }
}

/// True when `store` may see a route guarded by `guards`.
pub fn route_allowed(guards: &[Guard], store: &SessionStore) -> bool {
    guard_redirect(guards, store).is_none()
}

/// Re-run `guards` whenever the session changes and navigate on denial.
pub fn install_route_guards<F>(session: RwSignal<SessionStore>, guards: &'static [Guard], navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let target = session.with(|store| guard_redirect(guards, store));
        if let Some(path) = target {
            log::debug!("route guard redirect to {path}");
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
