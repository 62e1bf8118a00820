//! Classification of provider failures into user-facing messages

use serde::{Deserialize, Serialize};

use crate::provider::Provider;

/// Failure codes reported by the authentication SDK.
///
/// The SDK delivers them namespaced (`auth/popup-blocked`); the bare form is
/// accepted as well.
pub mod codes {
    pub const AUTH_PREFIX: &str = "auth/";
    
    pub const POPUP_CLOSED_BY_USER: &str = "popup-closed-by-user";
    pub const POPUP_BLOCKED: &str = "popup-blocked";
    pub const ACCOUNT_EXISTS_WITH_DIFFERENT_CREDENTIAL: &str =
        "account-exists-with-different-credential";
    pub const CANCELLED_POPUP_REQUEST: &str = "cancelled-popup-request";
    pub const NETWORK_REQUEST_FAILED: &str = "network-request-failed";
    pub const UNAUTHORIZED_DOMAIN: &str = "unauthorized-domain";
}

/// Display strings for the known failure codes
pub mod messages {
    pub const SIGN_IN_CANCELLED: &str = "Sign-in was cancelled. Please try again.";
    pub const POPUP_BLOCKED: &str = "Popup was blocked by your browser. Please allow popups for this site and try again. You can usually do this by clicking the popup blocker icon in your browser's address bar.";
    pub const ACCOUNT_EXISTS: &str = "An account already exists with the same email address but different sign-in credentials. Please try signing in with your original method.";
    pub const POPUP_ALREADY_OPEN: &str = "Another sign-in popup is already open. Please close it and try again.";
    pub const NETWORK_ERROR: &str = "Network error. Please check your internet connection and try again.";
    pub const UNAUTHORIZED_DOMAIN: &str = "This domain is not authorized for OAuth operations. Please contact support.";
}

/// Failure taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Popup closed, or a second popup requested while one is open
    UserCancelled,
    /// The browser blocked the popup
    EnvironmentBlocked,
    /// An account exists for the email under a different sign-in method
    AccountConflict,
    /// Transport failure
    Network,
    /// The domain is not allow-listed with the provider
    Authorization,
    Unknown,
}

impl FailureKind {
    pub fn from_code(code: &str) -> Self {
        match normalize(code) {
            codes::POPUP_CLOSED_BY_USER | codes::CANCELLED_POPUP_REQUEST => FailureKind::UserCancelled,
            codes::POPUP_BLOCKED => FailureKind::EnvironmentBlocked,
            codes::ACCOUNT_EXISTS_WITH_DIFFERENT_CREDENTIAL => FailureKind::AccountConflict,
            codes::NETWORK_REQUEST_FAILED => FailureKind::Network,
            codes::UNAUTHORIZED_DOMAIN => FailureKind::Authorization,
            _ => FailureKind::Unknown,
        }
    }
}

fn normalize(code: &str) -> &str {
    code.strip_prefix(codes::AUTH_PREFIX).unwrap_or(code)
}

/// Fixed message for a known code, `None` otherwise
pub fn known_message(code: &str) -> Option<&'static str> {
    match normalize(code) {
        codes::POPUP_CLOSED_BY_USER => Some(messages::SIGN_IN_CANCELLED),
        codes::POPUP_BLOCKED => Some(messages::POPUP_BLOCKED),
        codes::ACCOUNT_EXISTS_WITH_DIFFERENT_CREDENTIAL => Some(messages::ACCOUNT_EXISTS),
        codes::CANCELLED_POPUP_REQUEST => Some(messages::POPUP_ALREADY_OPEN),
        codes::NETWORK_REQUEST_FAILED => Some(messages::NETWORK_ERROR),
        codes::UNAUTHORIZED_DOMAIN => Some(messages::UNAUTHORIZED_DOMAIN),
        _ => None,
    }
}

/// Message used when the code is unknown and the provider gave no message
pub fn generic_message(provider: Provider) -> String {
    format!("Failed to sign in with {provider}. Please try again.")
}

/// Reduce a provider failure to the string shown to the user.
///
/// Known codes always win over `fallback`. For unknown codes a non-empty
/// `fallback` is returned verbatim, otherwise the generic message.
pub fn classify(code: &str, fallback: Option<&str>, provider: Provider) -> String {
    if let Some(message) = known_message(code) {
        return message.to_string();
    }
    
    match fallback {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => generic_message(provider),
    }
}
