//! Common error handling utilities for the social login workspace
//! 
//! This crate provides the application-level error type shared by the
//! configuration, logging and CLI crates. Sign-in failures reported by an
//! identity provider are NOT modelled here: those are recovered locally by
//! `social-auth` and turned into display strings.
//! 
//! # Error Categories
//! 
//! - **ConfigError**: Configuration loading and validation errors
//! - **LoggingError**: Tracing subscriber initialisation errors
//! - **UnsupportedProvider**: An unknown provider identifier at a boundary
//! - **InternalError**: Anything else that should never happen
//! 
//! # Example
//! 
//! ```rust
//! use error_common::{log_error, Result, SocialLoginError};
//! 
//! fn parse_route(route: &str) -> Result<&str> {
//!     if !route.starts_with('/') {
//!         return Err(SocialLoginError::ConfigError(format!(
//!             "route must start with '/': {route}"
//!         )));
//!     }
//!     Ok(route)
//! }
//! 
//! if let Err(e) = parse_route("dashboard") {
//!     log_error("startup", &e);
//! }
//! ```

pub mod types;

pub use types::*;
