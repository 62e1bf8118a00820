use error_common::{Result, SocialLoginError};
use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LoggerConfig;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `config.level`. Output goes to stderr so binaries can
/// keep stdout for their own results.
///
/// # Errors
///
/// Returns [`SocialLoginError::LoggingError`] when a global subscriber is
/// already installed.
pub fn init_tracing(config: &LoggerConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if config.json {
        // Structured JSON logging for production
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| SocialLoginError::LoggingError(e.to_string()))
}
