// Validation of the merged configuration
use crate::error::{ConfigError, Result};
use crate::settings::LoginConfig;

/// Reject configurations the orchestrator cannot work with.
///
/// # Errors
///
/// Returns [`ConfigError::ValidationError`] naming the offending key.
pub fn validate(config: &LoginConfig) -> Result<()> {
    let route = &config.destination_route;
    
    if route.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "destination_route must not be empty".to_string(),
        ));
    }
    
    if !route.starts_with('/') {
        return Err(ConfigError::ValidationError(format!(
            "destination_route must be an absolute path, got '{route}'"
        )));
    }
    
    if route.chars().any(char::is_whitespace) {
        return Err(ConfigError::ValidationError(format!(
            "destination_route must not contain whitespace, got '{route}'"
        )));
    }
    
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    
    fn with_route(route: &str) -> LoginConfig {
        LoginConfig {
            destination_route: route.to_string(),
            ..Default::default()
        }
    }
    
    #[test]
    fn test_default_is_valid() {
        assert!(validate(&LoginConfig::default()).is_ok());
    }
    
    #[test]
    fn test_rejects_bad_routes() {
        assert!(validate(&with_route("")).is_err());
        assert!(validate(&with_route("dashboard")).is_err());
        assert!(validate(&with_route("/my dashboard")).is_err());
        assert!(validate(&with_route("/home")).is_ok());
    }
}
