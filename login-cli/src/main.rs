use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use config_engine::ConfigEngine;
use error_common::{log_error, Result};
use logger_redacted::LogLevel;
use social_auth::{AttemptOutcome, LoginAttemptState, Provider, SocialLogin, TracingNavigator};

mod scripted;

use scripted::{Script, ScriptedAuthenticator};

/// Run one social sign-in attempt against a scripted provider
#[derive(Parser, Debug)]
#[command(name = "social-login")]
#[command(about = "Exercise the social sign-in flow with a scripted provider outcome")]
struct Args {
    /// Provider to sign in with (google or facebook)
    #[arg(short, long)]
    provider: Provider,

    /// Make the provider fail with this code, e.g. auth/popup-blocked
    #[arg(long)]
    fail_code: Option<String>,

    /// Message attached to the scripted failure
    #[arg(long, requires = "fail_code")]
    fail_message: Option<String>,

    /// Make the provider settle without an identity
    #[arg(long, conflicts_with = "fail_code")]
    no_identity: bool,

    /// Configuration file (defaults to ./social-login.toml when present)
    #[arg(short, long, env = "SOCIAL_LOGIN_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn script(&self) -> Script {
        match (&self.fail_code, self.no_identity) {
            (Some(code), _) => Script::Fail {
                code: code.clone(),
                message: self.fail_message.clone(),
            },
            (None, true) => Script::SettleWithoutIdentity,
            (None, false) => Script::Succeed,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(outcome) if outcome.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            log_error("social-login", &e);
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}

async fn run(args: Args) -> Result<AttemptOutcome> {
    let mut config = ConfigEngine::standard(args.config.as_deref()).build()?;
    if args.verbose {
        config.logging.level = LogLevel::Debug;
    }

    logger_redacted::init_tracing(&config.logging)?;
    tracing::info!(
        target: logger_redacted::LOG_TARGET,
        provider = args.provider.as_str(),
        route = %config.destination_route,
        "Starting social-login"
    );

    let login = SocialLogin::new(
        ScriptedAuthenticator::new(args.script()),
        TracingNavigator,
        &config,
    );
    let state = LoginAttemptState::new();

    let outcome = login.attempt_login(args.provider, &state).await;

    match &outcome {
        AttemptOutcome::Navigated { route } => println!("navigated to {route}"),
        AttemptOutcome::NoIdentity => println!("sign-in settled without an identity"),
        AttemptOutcome::Failed { message, .. } => eprintln!("{message}"),
    }
    tracing::info!(
        target: logger_redacted::LOG_TARGET,
        success = outcome.is_success(),
        "social-login finished"
    );

    Ok(outcome)
}
