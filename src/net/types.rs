//! Wire DTOs for the SNIUGB REST backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON exactly (Spanish, snake_case); Rust
//! names are only changed where a `rename` keeps call sites readable.
//! Timestamps stay as the ISO strings the backend sends since the client only
//! displays them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::session::{Role, Session};

// =============================================================
// Auth
// =============================================================

/// `POST /auth/login` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub rol: Option<String>,
}

impl LoginResponse {
    /// Session granted by this response. A missing or unknown role is
    /// treated as a rancher account.
    pub fn into_session(self) -> Session {
        let role = self.rol.as_deref().and_then(Role::parse).unwrap_or(Role::Rancher);
        Session { token: self.access_token, role }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub numero_de_dni: String,
    pub telefono: String,
    pub email: String,
    pub password: String,
}

/// Channel the one-time reset code is delivered through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    Email,
    Whatsapp,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ForgotPasswordRequest {
    pub numero_de_dni: String,
    pub method: DeliveryMethod,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VerifyCodeRequest {
    pub numero_de_dni: String,
    pub code: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResetPasswordRequest {
    pub numero_de_dni: String,
    pub code: String,
    pub new_password: String,
}

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "numero_de_dni")]
    pub dni: String,
    #[serde(rename = "nombre_completo")]
    pub nombre: String,
    pub email: String,
    pub estado: String,
    pub fecha_de_registro: String,
}

// =============================================================
// Properties and herd
// =============================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Predio {
    pub codigo_predio: String,
    pub nombre_predio: String,
    pub departamento: String,
    pub ubicacion: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PredioCreate {
    pub nombre_predio: String,
    pub departamento: String,
    pub ubicacion: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Raza {
    pub nombre: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub cui: String,
    pub nombre: String,
    pub raza: Raza,
    pub sexo: String,
    pub fecha_nacimiento: String,
    pub peso: String,
    pub predio_codigo: String,
    pub estado: String,
}

/// Entry of `GET /utils/departamentos`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Departamento {
    pub nombre: String,
}

/// Which animals of a property to list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HerdFilter {
    #[default]
    Active,
    Trashed,
}

impl HerdFilter {
    pub fn as_query(self) -> &'static str {
        match self {
            Self::Active => "activo",
            Self::Trashed => "en_papelera",
        }
    }
}

// =============================================================
// Dashboard, calendar, notifications
// =============================================================

/// `GET /dashboard/{predio}/kpis`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    pub total_hato: i64,
    pub alertas_salud: i64,
    pub tareas_para_hoy: i64,
    pub produccion_reciente_carne: f64,
    pub produccion_reciente_leche: f64,
    pub solicitudes_transferencia: i64,
}

/// Calendar entry: a user reminder or a system-generated event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Evento {
    pub id: i64,
    pub fecha_evento: String,
    pub titulo: String,
    pub descripcion: Option<String>,
    pub tipo: String,
    pub es_completado: bool,
    pub estado_color: String,
    #[serde(default)]
    pub origen_tipo: Option<String>,
    pub es_editable: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notificacion {
    pub id: i64,
    pub mensaje: String,
    pub leida: bool,
    pub fecha_creacion: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// `GET /notificaciones/contador-no-leidas`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct UnreadCount {
    pub no_leidas: u32,
}

// =============================================================
// Publications and catalogues
// =============================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Publicacion {
    pub id: i64,
    pub titulo: String,
    pub resumen: String,
    pub contenido_html: String,
    pub imagen_principal: String,
    pub categoria: String,
    pub fecha_publicacion: String,
}
