//! Forgot-password wizard: request a code, verify it, set a new password.
//!
//! DESIGN
//! ======
//! The wizard is a plain value the modal keeps in a signal. Each `submit_*`
//! step validates locally first and only then calls the backend, so a local
//! failure never produces a request. Steps only move forward; a submit for a
//! step other than the current one is ignored.

#[cfg(test)]
#[path = "password_reset_test.rs"]
mod password_reset_test;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{DeliveryMethod, ForgotPasswordRequest, ResetPasswordRequest, VerifyCodeRequest};
use crate::util::password::PasswordChecks;

pub const MSG_MISSING_DNI: &str = "Por favor, ingresa tu DNI.";
pub const MSG_MISSING_METHOD: &str = "Por favor, seleccione un método.";
pub const MSG_MISSING_CODE: &str = "Por favor, ingresa el código.";
pub const MSG_PASSWORD_MISMATCH: &str = "Las contraseñas no coinciden.";
pub const MSG_PASSWORD_WEAK: &str = "La contraseña no cumple los requisitos.";
pub const MSG_RESET_DONE: &str = "Contraseña actualizada. Ya puede iniciar sesión.";

const FALLBACK_REQUEST: &str = "No se pudo procesar la solicitud.";
const FALLBACK_VERIFY: &str = "No se pudo verificar el código.";
const FALLBACK_RESET: &str = "El código es inválido o ha expirado.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResetStep {
    #[default]
    Request,
    Verify,
    Reset,
}

/// Message shown under the active step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordResetWizard {
    pub dni: String,
    pub method: Option<DeliveryMethod>,
    pub code: String,
    pub new_password: String,
    pub confirm_password: String,
    step: ResetStep,
    notice: Option<Notice>,
    completed: bool,
}

impl PasswordResetWizard {
    pub fn step(&self) -> ResetStep {
        self.step
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// True once the new password was accepted; the view closes the modal.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn password_checks(&self) -> PasswordChecks {
        PasswordChecks::evaluate(&self.new_password)
    }

    /// Take the step, notice and completion from a finished submit while
    /// keeping the form fields as they are now, so typing during a pending
    /// request is not overwritten.
    pub fn absorb_outcome(&mut self, finished: &Self) {
        self.step = finished.step;
        self.notice.clone_from(&finished.notice);
        self.completed = finished.completed;
    }

    pub fn select_method(&mut self, method: DeliveryMethod) {
        self.method = Some(method);
        self.notice = None;
    }

    fn fail(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice { text: text.into(), is_error: true });
    }

    fn inform(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice { text: text.into(), is_error: false });
    }

    fn fail_with(&mut self, err: &ApiError, fallback: &str) {
        log::debug!("password reset step {:?} failed: {err}", self.step);
        self.fail(err.user_message(fallback));
    }

    /// Local checks for step one. The identifier is checked before the method.
    fn request_payload(&self) -> Result<ForgotPasswordRequest, &'static str> {
        let dni = self.dni.trim();
        if dni.is_empty() {
            return Err(MSG_MISSING_DNI);
        }
        let method = self.method.ok_or(MSG_MISSING_METHOD)?;
        Ok(ForgotPasswordRequest { numero_de_dni: dni.to_owned(), method })
    }

    fn verify_payload(&self) -> Result<VerifyCodeRequest, &'static str> {
        let code = self.code.trim();
        if code.is_empty() {
            return Err(MSG_MISSING_CODE);
        }
        Ok(VerifyCodeRequest { numero_de_dni: self.dni.trim().to_owned(), code: code.to_owned() })
    }

    fn reset_payload(&self) -> Result<ResetPasswordRequest, &'static str> {
        if self.new_password != self.confirm_password {
            return Err(MSG_PASSWORD_MISMATCH);
        }
        if !self.password_checks().all_pass() {
            return Err(MSG_PASSWORD_WEAK);
        }
        Ok(ResetPasswordRequest {
            numero_de_dni: self.dni.trim().to_owned(),
            code: self.code.trim().to_owned(),
            new_password: self.new_password.clone(),
        })
    }

    /// Step one: ask the backend to send a one-time code.
    pub async fn submit_request(&mut self, api: &ApiClient) {
        if self.step != ResetStep::Request {
            return;
        }
        self.notice = None;
        let payload = match self.request_payload() {
            Ok(p) => p,
            Err(msg) => return self.fail(msg),
        };
        match api.forgot_password(&payload).await {
            Ok(resp) => {
                self.inform(resp.message);
                self.step = ResetStep::Verify;
                log::info!("password reset code requested");
            }
            Err(err) => self.fail_with(&err, FALLBACK_REQUEST),
        }
    }

    /// Step two: check the code the user received.
    pub async fn submit_verification(&mut self, api: &ApiClient) {
        if self.step != ResetStep::Verify {
            return;
        }
        self.notice = None;
        let payload = match self.verify_payload() {
            Ok(p) => p,
            Err(msg) => return self.fail(msg),
        };
        match api.verify_code(&payload).await {
            Ok(_) => self.step = ResetStep::Reset,
            Err(err) => self.fail_with(&err, FALLBACK_VERIFY),
        }
    }

    /// Step three: set the new password.
    pub async fn submit_reset(&mut self, api: &ApiClient) {
        if self.step != ResetStep::Reset || self.completed {
            return;
        }
        self.notice = None;
        let payload = match self.reset_payload() {
            Ok(p) => p,
            Err(msg) => return self.fail(msg),
        };
        match api.reset_password(&payload).await {
            Ok(_) => {
                self.inform(MSG_RESET_DONE);
                self.completed = true;
                log::info!("password reset completed");
            }
            Err(err) => self.fail_with(&err, FALLBACK_RESET),
        }
    }
}
