use regex::Regex;
use lazy_static::lazy_static;
use sha2::{Sha256, Digest};
use base64::{Engine as _, engine::general_purpose};

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();
    static ref IP_REGEX: Regex = Regex::new(r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b").unwrap();
    // Google access tokens, Facebook user/page tokens, and JWT-shaped ID tokens
    static ref TOKEN_REGEX: Regex = Regex::new(
        r"\b(?:ya29\.[A-Za-z0-9_\-]+|EAA[A-Za-z0-9]{20,}|eyJ[A-Za-z0-9_\-]+\.[A-Za-z0-9_\-]+\.[A-Za-z0-9_\-]+)"
    ).unwrap();
}

/// Redaction configuration
#[derive(Debug, Clone)]
pub struct RedactionConfig {
    /// Master switch; when off `redact` returns its input unchanged
    pub enabled: bool,
    pub redact_emails: bool,
    pub redact_ip_addresses: bool,
    pub redact_tokens: bool,
    pub hash_for_correlation: bool,
    pub custom_patterns: Vec<(Regex, String)>,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            redact_emails: true,
            redact_ip_addresses: true,
            redact_tokens: true,
            hash_for_correlation: true,
            custom_patterns: Vec::new(),
        }
    }
}

impl RedactionConfig {
    pub fn with_custom_pattern(mut self, pattern: Regex, replacement: impl Into<String>) -> Self {
        self.custom_patterns.push((pattern, replacement.into()));
        self
    }
}

/// Redactor for provider failure messages and other log text
#[derive(Debug, Clone, Default)]
pub struct PiiRedactor {
    config: RedactionConfig,
}

impl PiiRedactor {
    pub fn new(config: RedactionConfig) -> Self {
        Self { config }
    }
    
    pub fn redact(&self, text: &str) -> String {
        if !self.config.enabled {
            return text.to_string();
        }
        
        let mut result = text.to_string();
        
        // Tokens first: a JWT payload can contain an email-looking claim
        if self.config.redact_tokens {
            result = self.redact_tokens(&result);
        }
        
        if self.config.redact_emails {
            result = self.redact_emails(&result);
        }
        
        if self.config.redact_ip_addresses {
            result = self.redact_ip_addresses(&result);
        }
        
        for (pattern, replacement) in &self.config.custom_patterns {
            result = pattern.replace_all(&result, replacement.as_str()).to_string();
        }
        
        result
    }
    
    fn redact_tokens(&self, text: &str) -> String {
        TOKEN_REGEX.replace_all(text, |caps: &regex::Captures| {
            if self.config.hash_for_correlation {
                format!("TOKEN[{}]", self.hash_value(&caps[0]))
            } else {
                "TOKEN[REDACTED]".to_string()
            }
        }).to_string()
    }
    
    fn redact_emails(&self, text: &str) -> String {
        EMAIL_REGEX.replace_all(text, |caps: &regex::Captures| {
            let email = &caps[0];
            if self.config.hash_for_correlation {
                format!("EMAIL[{}]", self.hash_value(email))
            } else {
                match email.split_once('@') {
                    Some((local, domain)) => format!(
                        "{}***@{}***",
                        first_char(local),
                        first_char(domain)
                    ),
                    None => "***@***".to_string(),
                }
            }
        }).to_string()
    }
    
    fn redact_ip_addresses(&self, text: &str) -> String {
        IP_REGEX.replace_all(text, |caps: &regex::Captures| {
            if self.config.hash_for_correlation {
                format!("IP[{}]", self.hash_value(&caps[0]))
            } else {
                let ip = &caps[0];
                let parts: Vec<&str> = ip.split('.').collect();
                match (parts.first(), parts.get(3)) {
                    (Some(first), Some(last)) if parts.len() == 4 => {
                        format!("{first}.***.***.{last}")
                    }
                    _ => "***.***.***.***".to_string(),
                }
            }
        }).to_string()
    }
    
    fn hash_value(&self, value: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());
        let result = hasher.finalize();
        // First 8 bytes keep the marker short
        let prefix: Vec<u8> = result.iter().take(8).copied().collect();
        general_purpose::STANDARD.encode(prefix)
    }
}

fn first_char(s: &str) -> &str {
    s.char_indices()
        .nth(1)
        .map_or(s, |(idx, _)| &s[..idx])
}
