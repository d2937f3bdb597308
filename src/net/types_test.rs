use super::*;

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn login_response_into_session_uses_backend_role() {
    let resp: LoginResponse =
        serde_json::from_str(r#"{"access_token":"abc","token_type":"bearer","rol":"admin"}"#).unwrap();
    assert_eq!(resp.into_session(), Session::new("abc", Role::Admin));
}

#[test]
fn login_response_without_role_defaults_to_rancher() {
    let resp: LoginResponse = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
    assert_eq!(resp.token_type, "");
    assert_eq!(resp.into_session().role, Role::Rancher);
}

#[test]
fn forgot_password_request_serializes_method_lowercase() {
    let req = ForgotPasswordRequest { numero_de_dni: "12345678".to_owned(), method: DeliveryMethod::Whatsapp };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "numero_de_dni": "12345678", "method": "whatsapp" })
    );
}

#[test]
fn user_profile_reads_backend_aliases() {
    let profile: UserProfile = serde_json::from_value(serde_json::json!({
        "numero_de_dni": "12345678",
        "nombre_completo": "Ana Quispe",
        "email": "ana@example.com",
        "estado": "activo",
        "fecha_de_registro": "2025-01-02T03:04:05"
    }))
    .unwrap();
    assert_eq!(profile.dni, "12345678");
    assert_eq!(profile.nombre, "Ana Quispe");
}

// =============================================================
// Resource payloads
// =============================================================

#[test]
fn animal_deserializes_nested_breed() {
    let animal: Animal = serde_json::from_value(serde_json::json!({
        "cui": "PE-001",
        "nombre": "Lola",
        "raza": { "nombre": "Brown Swiss" },
        "sexo": "hembra",
        "fecha_nacimiento": "2022-05-01",
        "peso": "420",
        "predio_codigo": "PR-1",
        "estado": "activo"
    }))
    .unwrap();
    assert_eq!(animal.raza.nombre, "Brown Swiss");
}

#[test]
fn notification_link_is_optional() {
    let n: Notificacion = serde_json::from_value(serde_json::json!({
        "id": 7,
        "mensaje": "Recordatorio de vacunación",
        "leida": false,
        "fecha_creacion": "2025-03-01T10:00:00"
    }))
    .unwrap();
    assert_eq!(n.link, None);
}
