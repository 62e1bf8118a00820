//! Layered configuration for the social login workspace
//! 
//! Configuration is assembled from, in increasing priority:
//! - Built-in defaults (`LoginConfig::default()`)
//! - A local file, TOML or YAML depending on its extension
//! - Environment variables prefixed with `SOCIAL_LOGIN_`, using `__` to
//!   reach nested keys (`SOCIAL_LOGIN_LOGGING__LEVEL=debug`)
//! 
//! The merged result is validated before it is handed out.
//! 
//! # Example
//! 
//! ```rust,no_run
//! use config_engine::{ConfigEngine, ConfigSource};
//! 
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigEngine::new()
//!         .add_source(ConfigSource::file("social-login.toml"))
//!         .add_source(ConfigSource::env())
//!         .build()?;
//!     
//!     println!("After sign-in users land on {}", config.destination_route);
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod providers;
pub mod settings;
pub mod validation;
pub mod error;

pub use engine::*;
pub use providers::*;
pub use settings::*;
pub use error::*;
