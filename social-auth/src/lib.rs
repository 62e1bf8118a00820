//! Social sign-in orchestration for RustCare front ends
//! 
//! This crate drives the "continue with Google / Facebook" buttons of a
//! sign-in screen:
//! - Dispatches a user-selected [`Provider`] to an external
//!   [`AuthenticationProvider`] that runs the popup flow
//! - Tracks the busy flag and the error line through [`LoginCallbacks`]
//! - Sends the [`Navigator`] to the post-login route on success
//! - Classifies failures into display strings with [`classify`]
//! 
//! Token exchange, popup lifecycle and credential issuance belong to the
//! authentication SDK behind [`AuthenticationProvider`].
//! 
//! # Example
//! 
//! ```rust
//! use async_trait::async_trait;
//! use config_engine::LoginConfig;
//! use social_auth::*;
//! 
//! struct PopupBlocked;
//! 
//! #[async_trait]
//! impl AuthenticationProvider for PopupBlocked {
//!     async fn sign_in_with_google(&self) -> SignInResult {
//!         Err(AuthFailure::new("auth/popup-blocked"))
//!     }
//!     
//!     async fn sign_in_with_facebook(&self) -> SignInResult {
//!         Err(AuthFailure::new("auth/popup-blocked"))
//!     }
//! }
//! 
//! #[tokio::main]
//! async fn main() {
//!     let login = SocialLogin::new(PopupBlocked, TracingNavigator, &LoginConfig::default());
//!     let state = LoginAttemptState::new();
//!     
//!     let outcome = login.attempt_login(Provider::Google, &state).await;
//!     
//!     assert!(!state.is_busy());
//!     assert!(state.error_message().starts_with("Popup was blocked"));
//!     assert_eq!(outcome.error_message(), Some(state.error_message().as_str()));
//! }
//! ```

pub mod buttons;
pub mod error;
pub mod models;
pub mod navigator;
pub mod orchestrator;
pub mod provider;
pub mod state;

pub use buttons::*;
pub use error::*;
pub use models::*;
pub use navigator::*;
pub use orchestrator::*;
pub use provider::*;
pub use state::*;
