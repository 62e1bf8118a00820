use error_common::SocialLoginError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration source not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),
    
    #[error("Configuration parsing failed: {0}")]
    ParseError(Box<figment::Error>),
    
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::ParseError(Box::new(err))
    }
}

impl From<ConfigError> for SocialLoginError {
    fn from(err: ConfigError) -> Self {
        SocialLoginError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
