use async_trait::async_trait;
use error_common::SocialLoginError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::{AuthFailure, AuthSuccess};

/// Identity providers offered on the sign-in screen.
///
/// Closed on purpose: adding a variant forces every match over providers,
/// including the orchestrator's dispatch, to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    Facebook,
}

impl Provider {
    /// Both providers, in display order
    pub const ALL: [Provider; 2] = [Provider::Google, Provider::Facebook];
    
    /// Lowercase identifier, as used in messages and logs
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::Facebook => "facebook",
        }
    }
    
    /// Button label
    pub fn display_name(self) -> &'static str {
        match self {
            Provider::Google => "Google",
            Provider::Facebook => "Facebook",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = SocialLoginError;
    
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(Provider::Google),
            "facebook" => Ok(Provider::Facebook),
            _ => Err(SocialLoginError::UnsupportedProvider(s.to_string())),
        }
    }
}

/// Outcome of one popup sign-in call.
///
/// `Ok(None)` means the call settled without an identity.
pub type SignInResult = Result<Option<AuthSuccess>, AuthFailure>;

/// External authentication SDK performing the popup flow
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthenticationProvider: Send + Sync {
    async fn sign_in_with_google(&self) -> SignInResult;
    
    async fn sign_in_with_facebook(&self) -> SignInResult;
}
