use thiserror::Error;

/// Application error enum shared across crates
#[derive(Error, Debug)]
pub enum SocialLoginError {
    /// Configuration loading or validation errors
    #[error("Configuration error: {0}")]
    ConfigError(String),
    
    /// Tracing subscriber initialisation errors
    #[error("Logging error: {0}")]
    LoggingError(String),
    
    /// Provider identifier that is not one of the supported providers
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),
    
    /// Internal system errors
    #[error("Internal error: {0}")]
    InternalError(String),
    
    /// Wrapped external errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for social login operations
pub type Result<T> = std::result::Result<T, SocialLoginError>;

/// Log an application error with the context it surfaced in
pub fn log_error(context: &str, error: &SocialLoginError) {
    tracing::error!(
        context = context,
        error = %error,
        "Social login error occurred"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_error_display() {
        let err = SocialLoginError::UnsupportedProvider("twitter".to_string());
        assert_eq!(err.to_string(), "Unsupported provider: twitter");
        
        let err = SocialLoginError::ConfigError("missing route".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing route");
    }
    
    #[test]
    fn test_anyhow_is_transparent() {
        let err: SocialLoginError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
