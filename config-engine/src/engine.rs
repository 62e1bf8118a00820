use figment::providers::Serialized;
use figment::Figment;
use std::path::Path;

use crate::error::Result;
use crate::providers::ConfigSource;
use crate::settings::{LoginConfig, DEFAULT_CONFIG_FILE};
use crate::validation;

/// Builder that merges configuration sources in the order they were added
#[derive(Debug, Clone, Default)]
pub struct ConfigEngine {
    sources: Vec<ConfigSource>,
}

impl ConfigEngine {
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Standard layering: an explicit file (required) or the default file
    /// (optional), then the environment.
    pub fn standard(explicit_file: Option<&Path>) -> Self {
        let file = match explicit_file {
            Some(path) => ConfigSource::required_file(path),
            None => ConfigSource::file(DEFAULT_CONFIG_FILE),
        };
        Self::new().add_source(file).add_source(ConfigSource::env())
    }
    
    pub fn add_source(mut self, source: ConfigSource) -> Self {
        self.sources.push(source);
        self
    }
    
    /// Merge all sources over the defaults, extract and validate.
    ///
    /// # Errors
    ///
    /// Fails when a required file is missing, a file has an unknown format,
    /// a value does not deserialize, or validation rejects the result.
    pub fn build(self) -> Result<LoginConfig> {
        let mut figment = Figment::from(Serialized::defaults(LoginConfig::default()));
        for source in &self.sources {
            figment = source.merge_into(figment)?;
        }
        
        let config: LoginConfig = figment.extract()?;
        validation::validate(&config)?;
        
        tracing::debug!(
            destination_route = %config.destination_route,
            log_level = %config.logging.level,
            "Configuration loaded"
        );
        Ok(config)
    }
}
