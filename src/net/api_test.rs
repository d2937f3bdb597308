use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::types::DeliveryMethod;
use crate::routing::home_for;
use crate::state::session::{Role, SessionAccess};
use crate::testing::{Harness, SharedSession};

// =============================================================
// Endpoint helpers
// =============================================================

#[test]
fn predio_animals_endpoint_adds_estado_filter() {
    assert_eq!(predio_animals_endpoint("PR-1", HerdFilter::Active), "/predios/PR-1/animales?estado=activo");
    assert_eq!(
        predio_animals_endpoint("PR-1", HerdFilter::Trashed),
        "/predios/PR-1/animales?estado=en_papelera"
    );
}

#[test]
fn dashboard_kpis_endpoint_adds_periodo() {
    assert_eq!(dashboard_kpis_endpoint("PR-9", KpiPeriod::Month), "/dashboard/PR-9/kpis?periodo=mes");
}

#[test]
fn calendar_events_endpoint_formats_year_month() {
    assert_eq!(calendar_events_endpoint(2025, 3), "/calendario/eventos/2025/3");
}

#[test]
fn publications_endpoint_encodes_category() {
    assert_eq!(publications_endpoint(None), "/publicaciones/");
    assert_eq!(publications_endpoint(Some("")), "/publicaciones/");
    assert_eq!(publications_endpoint(Some("sanidad animal")), "/publicaciones/?categoria=sanidad+animal");
}

#[test]
fn login_form_is_url_encoded() {
    assert_eq!(login_form("12345678", "Secreta1!"), "username=12345678&password=Secreta1%21");
}

// =============================================================
// Login
// =============================================================

#[test]
fn sign_in_stores_session_from_backend() {
    let h = Harness::anonymous();
    h.transport.respond(200, json!({ "access_token": "abc", "token_type": "bearer", "rol": "admin" }));

    let session = block_on(h.api.sign_in("12345678", "Secreta1!")).unwrap();

    assert_eq!(session, Session::new("abc", Role::Admin));
    assert_eq!(h.session.current(), Some(Session::new("abc", Role::Admin)));
    assert_eq!(home_for(session.role), "/admin");

    let request = h.transport.last_request();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, "http://api.test/auth/login");
    assert_eq!(request.body, Body::Form("username=12345678&password=Secreta1%21".to_owned()));
    assert_eq!(request.header("Authorization"), None);
}

#[test]
fn sign_in_failure_leaves_session_anonymous() {
    let h = Harness::anonymous();
    h.transport.respond(401, json!({ "detail": "DNI o contraseña incorrectos" }));

    let err = block_on(h.api.sign_in("12345678", "wrong")).unwrap_err();

    assert_eq!(err.detail_message(), Some("DNI o contraseña incorrectos"));
    assert!(!h.session.is_authenticated());
}

#[test]
fn sign_out_clears_session() {
    let h = Harness::new(SharedSession::signed_in("abc", Role::Rancher));
    h.api.sign_out();
    assert_eq!(h.session.current(), None);
    assert!(h.transport.requests().is_empty());
}

// =============================================================
// JSON endpoints
// =============================================================

#[test]
fn forgot_password_posts_json_body() {
    let h = Harness::anonymous();
    h.transport.respond(200, json!({ "message": "Se envió un código a su método de recuperación." }));

    let data = ForgotPasswordRequest { numero_de_dni: "12345678".to_owned(), method: DeliveryMethod::Email };
    let resp = block_on(h.api.forgot_password(&data)).unwrap();

    assert_eq!(resp.message, "Se envió un código a su método de recuperación.");
    let request = h.transport.last_request();
    assert_eq!(request.url, "http://api.test/auth/forgot-password");
    let Body::Json(raw) = request.body else { panic!("expected JSON body") };
    let sent: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(sent, json!({ "numero_de_dni": "12345678", "method": "email" }));
}

#[test]
fn authenticated_get_carries_bearer_and_decodes() {
    let h = Harness::new(SharedSession::signed_in("tok", Role::Rancher));
    h.transport.respond(
        200,
        json!([{ "codigo_predio": "PR-1", "nombre_predio": "La Esperanza", "departamento": "Cusco", "ubicacion": "Km 3" }]),
    );

    let predios = block_on(h.api.my_predios()).unwrap();

    assert_eq!(predios.len(), 1);
    assert_eq!(predios[0].nombre_predio, "La Esperanza");
    let request = h.transport.last_request();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.url, "http://api.test/predios/me");
    assert_eq!(request.header("Authorization"), Some("Bearer tok"));
}

#[test]
fn malformed_body_is_decode_error() {
    let h = Harness::new(SharedSession::signed_in("tok", Role::Rancher));
    h.transport.respond(200, json!({ "unexpected": true }));

    let err = block_on(h.api.unread_notifications()).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn rejected_request_surfaces_backend_detail() {
    let h = Harness::new(SharedSession::signed_in("tok", Role::Rancher));
    h.transport.respond(404, json!({ "detail": "Predio no encontrado o no te pertenece." }));

    let err = block_on(h.api.dashboard_kpis("PR-X", KpiPeriod::Today)).unwrap_err();

    assert_eq!(err.user_message("Error"), "Predio no encontrado o no te pertenece.");
    assert!(h.session.is_authenticated());
}
