// Logger configuration
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default verbosity when `RUST_LOG` is not set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggerConfig {
    #[serde(default)]
    pub level: LogLevel,
    /// Structured JSON output instead of the human formatter
    #[serde(default)]
    pub json: bool,
    #[serde(default = "default_true")]
    pub redaction_enabled: bool,
    #[serde(default = "default_true")]
    pub hash_for_correlation: bool,
}

fn default_true() -> bool { true }

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            json: false,
            redaction_enabled: true,
            hash_for_correlation: true,
        }
    }
}

impl LoggerConfig {
    /// Redaction settings derived from this logging configuration
    pub fn redaction(&self) -> crate::RedactionConfig {
        crate::RedactionConfig {
            enabled: self.redaction_enabled,
            hash_for_correlation: self.hash_for_correlation,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.level, LogLevel::Info);
        assert!(!config.json);
        assert!(config.redaction_enabled);
        assert!(config.hash_for_correlation);
    }
    
    #[test]
    fn test_level_deserialization() {
        let config: LoggerConfig = serde_json::from_str(r#"{"level": "debug"}"#).unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert!(config.redaction_enabled);
        
        let bad = serde_json::from_str::<LoggerConfig>(r#"{"level": "loud"}"#);
        assert!(bad.is_err());
    }
    
    #[test]
    fn test_redaction_follows_flags() {
        let config = LoggerConfig {
            redaction_enabled: false,
            hash_for_correlation: false,
            ..Default::default()
        };
        let redaction = config.redaction();
        assert!(!redaction.enabled);
        assert!(!redaction.hash_for_correlation);
    }
}
