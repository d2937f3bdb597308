//! REST error taxonomy and user-facing message selection.
//!
//! ERROR HANDLING
//! ==============
//! Every failed call becomes an [`ApiError`]. Views never propagate it: they
//! pick a message with [`ApiError::user_message`], which prefers the backend's
//! own `detail` text and otherwise falls back to a caller-supplied default.
//! A 401 is additionally handled by the auth interceptor before the caller
//! ever sees it.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::{Deserialize, Serialize};

/// `detail` payload of a backend error body: either a message or a list of
/// per-field validation failures (422).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Validation(Vec<ValidationIssue>),
}

/// One entry of a 422 `detail` list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Location path, e.g. `["body", "email"]`.
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
    #[serde(default)]
    pub msg: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

impl ValidationIssue {
    /// Offending field name: the entry right after the location root, when it
    /// is a string. Nested or indexed locations name no field.
    pub fn field(&self) -> Option<&str> {
        self.loc.get(1).and_then(serde_json::Value::as_str)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<ErrorDetail>,
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Rejected locally before any request was made.
    #[error("{0}")]
    Validation(String),
    /// 401. The session has already been cleared by the interceptor.
    #[error("unauthorized")]
    Unauthorized { detail: Option<String> },
    /// Any other 4xx.
    #[error("request rejected ({status})")]
    Rejected { status: u16, detail: Option<ErrorDetail> },
    /// 5xx.
    #[error("server error ({status})")]
    Server { status: u16 },
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
    /// No HTTP transport in this build (native/test).
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-success response.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.detail);
        match status {
            401 => Self::Unauthorized {
                detail: match detail {
                    Some(ErrorDetail::Message(m)) => Some(m),
                    _ => None,
                },
            },
            s if s >= 500 => Self::Server { status },
            _ => Self::Rejected { status, detail },
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Rejected { status, .. } | Self::Server { status } => Some(*status),
            _ => None,
        }
    }

    /// The backend's verbatim message, when it sent one.
    pub fn detail_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { detail: Some(m) } | Self::Rejected { detail: Some(ErrorDetail::Message(m)), .. } => {
                Some(m.as_str())
            }
            _ => None,
        }
    }

    /// The first entry of a 422 validation list, if the body carried one.
    pub fn first_validation_issue(&self) -> Option<&ValidationIssue> {
        match self {
            Self::Rejected { detail: Some(ErrorDetail::Validation(issues)), .. } => issues.first(),
            _ => None,
        }
    }

    /// Message to show the user: local validation text, else backend detail,
    /// else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(m) => m.clone(),
            other => other.detail_message().unwrap_or(fallback).to_owned(),
        }
    }
}
