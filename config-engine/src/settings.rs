use logger_redacted::LoggerConfig;
use serde::{Deserialize, Serialize};

/// Default file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "social-login.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "SOCIAL_LOGIN_";

/// Top-level social login configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginConfig {
    /// Route handed to the navigator after a successful sign-in
    #[serde(default = "default_destination_route")]
    pub destination_route: String,
    
    /// Diagnostic logging and redaction
    #[serde(default)]
    pub logging: LoggerConfig,
}

fn default_destination_route() -> String { "/dashboard".to_string() }

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            destination_route: default_destination_route(),
            logging: LoggerConfig::default(),
        }
    }
}
