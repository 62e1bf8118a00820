pub mod redactor;
pub mod config;
pub mod subscriber;

pub use redactor::*;
pub use config::*;
pub use subscriber::*;

/// Diagnostic logging for social sign-in with automatic redaction
/// 
/// Identity providers put user data into their failure messages: the
/// "account exists with different credential" failure names the email
/// address, network failures can echo the client IP, and a misbehaving
/// adapter may even surface a bearer token. Raw failures are logged before
/// they are classified, so everything written here goes through a
/// [`PiiRedactor`] first.
/// 
/// # Detected Data Types
/// 
/// - **Email Addresses**: user@example.com → u***@e***
/// - **IP Addresses**: 192.168.1.1 → 192.***.***.1
/// - **Google Access Tokens**: ya29.a0Af... → TOKEN[REDACTED]
/// - **Facebook Access Tokens**: EAAB... → TOKEN[REDACTED]
/// - **JWTs / ID Tokens**: eyJ... → TOKEN[REDACTED]
/// - **Custom Patterns**: Configurable deployment-specific patterns
/// 
/// With `hash_for_correlation` enabled every redacted value is replaced by a
/// short hash instead (`EMAIL[q1w2e3r4t5y=]`) so repeated failures for the
/// same account can still be grouped.
/// 
/// # Example
/// 
/// ```rust
/// use logger_redacted::{PiiRedactor, RedactionConfig};
/// 
/// let redactor = PiiRedactor::new(RedactionConfig {
///     hash_for_correlation: false,
///     ..Default::default()
/// });
/// 
/// let redacted = redactor.redact("An account already exists for jane@example.com");
/// assert!(!redacted.contains("jane@example.com"));
/// ```
/// 
/// # Configuration
/// 
/// ```toml
/// [logging]
/// level = "info"
/// json = false
/// redaction_enabled = true
/// hash_for_correlation = true
/// ```
pub const LOG_TARGET: &str = "social_login";
