use futures::executor::block_on;
use leptos::prelude::*;
use serde_json::json;

use super::*;
use crate::net::transport::Method;
use crate::state::session::{Role, Session, SessionAccess, SessionStore};
use crate::state::ui::UiState;
use crate::testing::{Harness, MockTransport, RecordingRedirect, SharedSession};
use crate::util::storage::MemoryStorage;

fn interceptor(session: &SharedSession, redirect: &RecordingRedirect) -> AuthInterceptor {
    AuthInterceptor::new(Arc::new(session.clone()), Arc::new(redirect.clone()))
}

// =============================================================
// Request stage
// =============================================================

#[test]
fn prepare_attaches_bearer_when_signed_in() {
    let session = SharedSession::signed_in("X", Role::Rancher);
    let mut request = HttpRequest::new(Method::Get, "http://api.test/predios/me");
    interceptor(&session, &RecordingRedirect::default()).prepare(&mut request);
    assert_eq!(request.header("authorization"), Some("Bearer X"));
}

#[test]
fn prepare_leaves_anonymous_requests_untouched() {
    let session = SharedSession::anonymous();
    let mut request = HttpRequest::new(Method::Get, "http://api.test/publicaciones/");
    let before = request.clone();
    interceptor(&session, &RecordingRedirect::default()).prepare(&mut request);
    assert_eq!(request, before);
}

#[test]
fn prepare_replaces_stale_authorization_header() {
    let session = SharedSession::signed_in("fresh", Role::Admin);
    let mut request = HttpRequest::new(Method::Get, "http://api.test/users/me");
    request.set_header("Authorization", "Bearer stale");
    interceptor(&session, &RecordingRedirect::default()).prepare(&mut request);
    assert_eq!(request.header("Authorization"), Some("Bearer fresh"));
    assert_eq!(request.headers.len(), 1);
}

// =============================================================
// Response stage
// =============================================================

#[test]
fn unauthorized_clears_session_redirects_and_reraises() {
    let session = SharedSession::signed_in("X", Role::Admin);
    let redirect = RecordingRedirect::default();
    let result = interceptor(&session, &redirect)
        .inspect(HttpResponse { status: 401, body: r#"{"detail":"Token expirado"}"#.to_owned() });

    assert_eq!(result, Err(ApiError::Unauthorized { detail: Some("Token expirado".to_owned()) }));
    assert_eq!(session.current(), None);
    assert!(session.storage.is_empty());
    assert_eq!(redirect.taken(), vec!["/".to_owned()]);
}

#[test]
fn other_errors_pass_through_without_side_effects() {
    let session = SharedSession::signed_in("X", Role::Rancher);
    let redirect = RecordingRedirect::default();
    let result = interceptor(&session, &redirect).inspect(HttpResponse { status: 404, body: "{}".to_owned() });

    assert_eq!(result.unwrap_err().status(), Some(404));
    assert!(session.current().is_some());
    assert!(redirect.taken().is_empty());
}

#[test]
fn success_is_returned_unchanged() {
    let session = SharedSession::anonymous();
    let response = HttpResponse { status: 201, body: "{}".to_owned() };
    let result = interceptor(&session, &RecordingRedirect::default()).inspect(response.clone());
    assert_eq!(result, Ok(response));
}

// =============================================================
// Through the client
// =============================================================

#[test]
fn any_endpoint_returning_401_ends_the_session() {
    let calls: [(&str, fn(&Harness)); 3] = [
        ("users", |h| {
            let _ = block_on(h.api.current_user());
        }),
        ("kpis", |h| {
            let _ = block_on(h.api.dashboard_kpis("PR-1", crate::state::ui::KpiPeriod::Week));
        }),
        ("notifications", |h| {
            let _ = block_on(h.api.notifications());
        }),
    ];
    for (name, call) in calls {
        let h = Harness::new(SharedSession::signed_in("X", Role::Rancher));
        h.transport.respond(401, json!({ "detail": "Could not validate credentials" }));
        call(&h);
        assert_eq!(h.session.current(), None, "{name} left the session alive");
        assert_eq!(h.redirect.taken(), vec!["/".to_owned()], "{name} did not redirect");
    }
}

#[test]
fn transport_failure_does_not_touch_session() {
    let session = SharedSession::signed_in("X", Role::Rancher);
    let redirect = RecordingRedirect::default();
    let transport = MockTransport::default();
    transport.fail(ApiError::Network("offline".to_owned()));

    let request = HttpRequest::new(Method::Get, "http://api.test/users/me");
    let result = block_on(interceptor(&session, &redirect).send(&transport, request));

    assert_eq!(result, Err(ApiError::Network("offline".to_owned())));
    assert!(session.current().is_some());
    assert!(redirect.taken().is_empty());
    assert_eq!(transport.last_request().header("Authorization"), Some("Bearer X"));
}

// =============================================================
// Through the signals the app provides
// =============================================================

#[test]
fn unauthorized_through_app_signals_clears_store_and_queues_redirect() {
    let owner = Owner::new();
    owner.set();
    let storage = MemoryStorage::new();
    let session = RwSignal::new(SessionStore::load(Arc::new(storage.clone())));
    session.set_session(Session::new("X", Role::Rancher));
    let ui = RwSignal::new(UiState::default());
    ui.update(UiState::open_login);

    let result = AuthInterceptor::new(Arc::new(session), Arc::new(ui))
        .inspect(HttpResponse { status: 401, body: "{}".to_owned() });

    assert_eq!(result, Err(ApiError::Unauthorized { detail: None }));
    assert!(!session.with_untracked(SessionStore::is_authenticated));
    assert!(storage.is_empty());
    assert_eq!(ui.with_untracked(|u| u.pending_redirect.clone()), Some("/".to_owned()));
    assert!(ui.with_untracked(UiState::is_login_open));
}

#[test]
fn bearer_comes_from_the_session_signal() {
    let owner = Owner::new();
    owner.set();
    let session = RwSignal::new(SessionStore::load(Arc::new(MemoryStorage::new())));
    let ui = RwSignal::new(UiState::default());
    let interceptor = AuthInterceptor::new(Arc::new(session), Arc::new(ui));

    let mut request = HttpRequest::new(Method::Get, "http://api.test/predios/me");
    interceptor.prepare(&mut request);
    assert_eq!(request.header("Authorization"), None);

    session.set_session(Session::new("fresh", Role::Admin));
    interceptor.prepare(&mut request);
    assert_eq!(request.header("Authorization"), Some("Bearer fresh"));
}
