// Configuration sources (file, environment)
use figment::providers::{Env, Format, Toml, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::settings::ENV_PREFIX;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A TOML or YAML file; `required` sources fail when the file is missing
    File { path: PathBuf, required: bool },
    /// `SOCIAL_LOGIN_*` environment variables
    Env { prefix: String },
}

impl ConfigSource {
    /// Optional file source
    pub fn file(path: impl Into<PathBuf>) -> Self {
        ConfigSource::File { path: path.into(), required: false }
    }
    
    /// File source that must exist
    pub fn required_file(path: impl Into<PathBuf>) -> Self {
        ConfigSource::File { path: path.into(), required: true }
    }
    
    pub fn env() -> Self {
        ConfigSource::Env { prefix: ENV_PREFIX.to_string() }
    }
    
    /// Layer this source on top of `figment`.
    pub(crate) fn merge_into(&self, figment: Figment) -> Result<Figment> {
        match self {
            ConfigSource::File { path, required } => {
                if !path.exists() {
                    if *required {
                        return Err(ConfigError::SourceNotFound(path.clone()));
                    }
                    tracing::debug!(path = %path.display(), "Optional config file not found, skipping");
                    return Ok(figment);
                }
                match FileFormat::from_path(path)? {
                    FileFormat::Toml => Ok(figment.merge(Toml::file_exact(path))),
                    FileFormat::Yaml => Ok(figment.merge(Yaml::file_exact(path))),
                }
            }
            ConfigSource::Env { prefix } => {
                Ok(figment.merge(Env::prefixed(prefix).split("__")))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Yaml,
}

impl FileFormat {
    fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        
        match extension.as_deref() {
            Some("toml") => Ok(FileFormat::Toml),
            Some("yaml" | "yml") => Ok(FileFormat::Yaml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
