//! Auth interceptor applied to every REST call.
//!
//! SYSTEM CONTEXT
//! ==============
//! Outgoing requests get the session's bearer token. A 401 from any endpoint
//! ends the session: the store is cleared, navigation to the landing route is
//! requested, and the error still reaches the caller. Nothing is retried,
//! queued, or refreshed.

#[cfg(test)]
#[path = "interceptor_test.rs"]
mod interceptor_test;

use std::sync::Arc;

use super::error::ApiError;
use super::transport::{HttpRequest, HttpResponse, Transport};
use crate::routing::{LANDING, Redirect};
use crate::state::session::SessionAccess;

#[derive(Clone)]
pub struct AuthInterceptor {
    session: Arc<dyn SessionAccess>,
    redirect: Arc<dyn Redirect>,
}

impl AuthInterceptor {
    pub fn new(session: Arc<dyn SessionAccess>, redirect: Arc<dyn Redirect>) -> Self {
        Self { session, redirect }
    }

    pub fn session(&self) -> &dyn SessionAccess {
        self.session.as_ref()
    }

    /// Attach `Authorization: Bearer <token>` when signed in.
    pub fn prepare(&self, request: &mut HttpRequest) {
        if let Some(token) = self.session.token() {
            request.set_header("Authorization", format!("Bearer {token}"));
        }
    }

    /// Turn a non-2xx response into an error, ending the session on 401.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] for any non-success status.
    pub fn inspect(&self, response: HttpResponse) -> Result<HttpResponse, ApiError> {
        if response.is_success() {
            return Ok(response);
        }
        let err = ApiError::from_status(response.status, &response.body);
        if matches!(err, ApiError::Unauthorized { .. }) {
            log::warn!("401 from backend; ending session");
            self.session.clear();
            self.redirect.redirect(LANDING);
        }
        Err(err)
    }

    /// Run `request` through the transport with both interceptor stages.
    ///
    /// # Errors
    ///
    /// Returns transport failures unchanged and non-2xx statuses as
    /// classified by [`AuthInterceptor::inspect`].
    pub async fn send(&self, transport: &dyn Transport, mut request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.prepare(&mut request);
        let response = transport.send(request).await?;
        self.inspect(response)
    }
}
