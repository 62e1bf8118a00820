use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::FailureKind;

/// Signed-in identity returned by the authentication SDK.
///
/// The orchestrator only checks that one is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSuccess {
    /// Provider-scoped unique user id
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

impl AuthSuccess {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: None,
            display_name: None,
        }
    }
}

/// Structured failure reported by the authentication SDK
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{code}: {}", .message.as_deref().unwrap_or("no message"))]
pub struct AuthFailure {
    /// Provider-defined code, e.g. `auth/popup-blocked`
    pub code: String,
    /// Human-readable fallback
    pub message: Option<String>,
}

impl AuthFailure {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: None,
        }
    }
    
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
    
    pub fn kind(&self) -> FailureKind {
        FailureKind::from_code(&self.code)
    }
}

/// What a single sign-in attempt reduced to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AttemptOutcome {
    /// Identity received; the navigator was sent to `route`
    Navigated { route: String },
    /// The provider settled without an identity and without a failure
    NoIdentity,
    /// The provider failed; `message` was reported through `on_error`
    Failed { kind: FailureKind, message: String },
}

impl AttemptOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AttemptOutcome::Navigated { .. })
    }
    
    pub fn error_message(&self) -> Option<&str> {
        match self {
            AttemptOutcome::Failed { message, .. } => Some(message),
            AttemptOutcome::Navigated { .. } | AttemptOutcome::NoIdentity => None,
        }
    }
}
