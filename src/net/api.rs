//! Typed REST client for the SNIUGB backend.
//!
//! Every call goes through the [`AuthInterceptor`], so callers never attach
//! credentials themselves and never handle session expiry themselves.
//!
//! ERROR HANDLING
//! ==============
//! Methods return `Result<_, ApiError>`. Callers turn failures into displayed
//! messages with [`ApiError::user_message`]; nothing here panics or retries.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use url::form_urlencoded;

use super::error::ApiError;
use super::interceptor::AuthInterceptor;
use super::transport::{Body, HttpRequest, HttpResponse, Method, Transport};
use super::types::{
    Animal, Departamento, Evento, ForgotPasswordRequest, HerdFilter, Kpis, LoginResponse, MessageResponse,
    Notificacion, Predio, PredioCreate, Publicacion, RegisterRequest, ResetPasswordRequest, UnreadCount,
    UserProfile, VerifyCodeRequest,
};
use crate::config::ClientConfig;
use crate::state::session::Session;
use crate::state::ui::KpiPeriod;

fn with_query(path: &str, pairs: &[(&str, &str)]) -> String {
    if pairs.is_empty() {
        return path.to_owned();
    }
    let query = form_urlencoded::Serializer::new(String::new()).extend_pairs(pairs).finish();
    format!("{path}?{query}")
}

fn login_form(dni: &str, password: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("username", dni)
        .append_pair("password", password)
        .finish()
}

fn predio_animals_endpoint(codigo: &str, filter: HerdFilter) -> String {
    with_query(&format!("/predios/{codigo}/animales"), &[("estado", filter.as_query())])
}

fn dashboard_kpis_endpoint(codigo: &str, period: KpiPeriod) -> String {
    with_query(&format!("/dashboard/{codigo}/kpis"), &[("periodo", period.as_query())])
}

fn calendar_events_endpoint(year: i32, month: u32) -> String {
    format!("/calendario/eventos/{year}/{month}")
}

fn publications_endpoint(categoria: Option<&str>) -> String {
    match categoria.filter(|c| !c.is_empty()) {
        Some(c) => with_query("/publicaciones/", &[("categoria", c)]),
        None => "/publicaciones/".to_owned(),
    }
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Cloneable handle shared through context by every view.
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
    interceptor: AuthInterceptor,
}

impl ApiClient {
    pub fn new(config: ClientConfig, transport: Arc<dyn Transport>, interceptor: AuthInterceptor) -> Self {
        Self { config: Arc::new(config), transport, interceptor }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.interceptor.send(self.transport.as_ref(), request).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(HttpRequest::new(Method::Get, self.config.endpoint(path))).await?;
        decode(&response)
    }

    /// Bodiless state change (`PUT`/`PATCH` on an action route).
    async fn send_empty<T: DeserializeOwned>(&self, method: Method, path: &str) -> Result<T, ApiError> {
        let response = self.execute(HttpRequest::new(method, self.config.endpoint(path))).await?;
        decode(&response)
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let raw = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let request = HttpRequest::new(method, self.config.endpoint(path)).with_body(Body::Json(raw));
        let response = self.execute(request).await?;
        decode(&response)
    }

    // =============================================================
    // Auth
    // =============================================================

    /// `POST /auth/login` (form-encoded `username`, `password`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] for bad credentials.
    pub async fn login(&self, dni: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let request = HttpRequest::new(Method::Post, self.config.endpoint("/auth/login"))
            .with_body(Body::Form(login_form(dni, password)));
        let response = self.execute(request).await?;
        decode(&response)
    }

    /// Log in and store the granted session.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiClient::login`] failures; the session is untouched then.
    pub async fn sign_in(&self, dni: &str, password: &str) -> Result<Session, ApiError> {
        let session = self.login(dni, password).await?.into_session();
        self.interceptor.session().set_session(session.clone());
        Ok(session)
    }

    pub fn sign_out(&self) {
        self.interceptor.session().clear();
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns the backend rejection (duplicate, invalid field, weak password).
    pub async fn register(&self, data: &RegisterRequest) -> Result<UserProfile, ApiError> {
        self.send_json(Method::Post, "/auth/register", data).await
    }

    /// `POST /auth/forgot-password`.
    ///
    /// # Errors
    ///
    /// Returns the backend rejection or a transport failure.
    pub async fn forgot_password(&self, data: &ForgotPasswordRequest) -> Result<MessageResponse, ApiError> {
        self.send_json(Method::Post, "/auth/forgot-password", data).await
    }

    /// `POST /auth/verify-code`.
    ///
    /// # Errors
    ///
    /// Returns a 400 rejection when the code is wrong or expired.
    pub async fn verify_code(&self, data: &VerifyCodeRequest) -> Result<MessageResponse, ApiError> {
        self.send_json(Method::Post, "/auth/verify-code", data).await
    }

    /// `POST /auth/reset-password`.
    ///
    /// # Errors
    ///
    /// Returns a 400/404 rejection when the code or user is invalid.
    pub async fn reset_password(&self, data: &ResetPasswordRequest) -> Result<MessageResponse, ApiError> {
        self.send_json(Method::Post, "/auth/reset-password", data).await
    }

    /// `GET /users/me`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] when the token is stale.
    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.get_json("/users/me").await
    }

    // =============================================================
    // Properties and herd
    // =============================================================

    /// `GET /predios/me`.
    ///
    /// # Errors
    ///
    /// Returns any backend or transport failure.
    pub async fn my_predios(&self) -> Result<Vec<Predio>, ApiError> {
        self.get_json("/predios/me").await
    }

    /// `POST /predios/`.
    ///
    /// # Errors
    ///
    /// Returns any backend or transport failure.
    pub async fn create_predio(&self, data: &PredioCreate) -> Result<Predio, ApiError> {
        self.send_json(Method::Post, "/predios/", data).await
    }

    /// `GET /predios/{codigo}/animales?estado=`.
    ///
    /// # Errors
    ///
    /// Returns any backend or transport failure.
    pub async fn predio_animals(&self, codigo: &str, filter: HerdFilter) -> Result<Vec<Animal>, ApiError> {
        self.get_json(&predio_animals_endpoint(codigo, filter)).await
    }

    /// `GET /utils/departamentos`, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns any backend or transport failure.
    pub async fn departamentos(&self) -> Result<Vec<Departamento>, ApiError> {
        self.get_json("/utils/departamentos").await
    }

    // =============================================================
    // Dashboard, calendar, notifications
    // =============================================================

    /// `GET /dashboard/{codigo}/kpis?periodo=`.
    ///
    /// # Errors
    ///
    /// Returns a 404 rejection when the property is not the caller's.
    pub async fn dashboard_kpis(&self, codigo: &str, period: KpiPeriod) -> Result<Kpis, ApiError> {
        self.get_json(&dashboard_kpis_endpoint(codigo, period)).await
    }

    /// `GET /calendario/recordatorios-activos`.
    ///
    /// # Errors
    ///
    /// Returns any backend or transport failure.
    pub async fn active_reminders(&self) -> Result<Vec<Evento>, ApiError> {
        self.get_json("/calendario/recordatorios-activos").await
    }

    /// `GET /calendario/eventos/{year}/{month}`.
    ///
    /// # Errors
    ///
    /// Returns any backend or transport failure.
    pub async fn calendar_events(&self, year: i32, month: u32) -> Result<Vec<Evento>, ApiError> {
        self.get_json(&calendar_events_endpoint(year, month)).await
    }

    /// `PUT /calendario/recordatorios/{id}/toggle-complete`.
    ///
    /// # Errors
    ///
    /// Returns a 404 rejection for a system event or someone else's reminder.
    pub async fn toggle_reminder(&self, id: i64) -> Result<Evento, ApiError> {
        self.send_empty(Method::Put, &format!("/calendario/recordatorios/{id}/toggle-complete")).await
    }

    /// `GET /notificaciones/`.
    ///
    /// # Errors
    ///
    /// Returns any backend or transport failure.
    pub async fn notifications(&self) -> Result<Vec<Notificacion>, ApiError> {
        self.get_json("/notificaciones/").await
    }

    /// `GET /notificaciones/contador-no-leidas`.
    ///
    /// # Errors
    ///
    /// Returns any backend or transport failure.
    pub async fn unread_notifications(&self) -> Result<UnreadCount, ApiError> {
        self.get_json("/notificaciones/contador-no-leidas").await
    }

    /// `PATCH /notificaciones/{id}`: mark as read and return it with its link.
    ///
    /// # Errors
    ///
    /// Returns a 404 rejection when the notification is not the caller's.
    pub async fn mark_notification_read(&self, id: i64) -> Result<Notificacion, ApiError> {
        self.send_empty(Method::Patch, &format!("/notificaciones/{id}")).await
    }

    // =============================================================
    // Publications and catalogues
    // =============================================================

    /// `GET /publicaciones/?categoria=`.
    ///
    /// # Errors
    ///
    /// Returns any backend or transport failure.
    pub async fn publications(&self, categoria: Option<&str>) -> Result<Vec<Publicacion>, ApiError> {
        self.get_json(&publications_endpoint(categoria)).await
    }

    /// `GET /publicaciones/{id}`.
    ///
    /// # Errors
    ///
    /// Returns a 404 rejection for an unknown article.
    pub async fn publication(&self, id: i64) -> Result<Publicacion, ApiError> {
        self.get_json(&format!("/publicaciones/{id}")).await
    }

    /// `GET /publicaciones/categorias`.
    ///
    /// # Errors
    ///
    /// Returns any backend or transport failure.
    pub async fn publication_categories(&self) -> Result<Vec<String>, ApiError> {
        self.get_json("/publicaciones/categorias").await
    }
}
