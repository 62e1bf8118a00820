use config_engine::LoginConfig;
use logger_redacted::{PiiRedactor, LOG_TARGET};
use tracing::Instrument;
use uuid::Uuid;

use crate::error::classify;
use crate::models::AttemptOutcome;
use crate::navigator::Navigator;
use crate::provider::{AuthenticationProvider, Provider, SignInResult};
use crate::state::{BusyGuard, LoginCallbacks};

/// Runs user-initiated social sign-in attempts.
///
/// One instance serves one sign-in screen. It does not guard against
/// overlapping attempts; the screen disables its buttons while busy.
pub struct SocialLogin<A, N> {
    authenticator: A,
    navigator: N,
    destination_route: String,
    redactor: PiiRedactor,
}

impl<A, N> SocialLogin<A, N>
where
    A: AuthenticationProvider,
    N: Navigator,
{
    pub fn new(authenticator: A, navigator: N, config: &LoginConfig) -> Self {
        Self {
            authenticator,
            navigator,
            destination_route: config.destination_route.clone(),
            redactor: PiiRedactor::new(config.logging.redaction()),
        }
    }
    
    pub fn destination_route(&self) -> &str {
        &self.destination_route
    }
    
    pub fn authenticator(&self) -> &A {
        &self.authenticator
    }
    
    pub fn navigator(&self) -> &N {
        &self.navigator
    }
    
    /// Run one sign-in attempt with `provider`.
    ///
    /// Sets the busy flag and clears the previous error, calls the provider,
    /// then navigates on success or reports a classified message on failure.
    /// The busy flag is cleared however the attempt ends. Failures are never
    /// returned as errors; the returned outcome mirrors what the callbacks saw.
    pub async fn attempt_login(
        &self,
        provider: Provider,
        callbacks: &dyn LoginCallbacks,
    ) -> AttemptOutcome {
        let attempt_id = Uuid::new_v4();
        let span = tracing::info_span!(
            target: LOG_TARGET,
            "social_login",
            %attempt_id,
            provider = provider.as_str()
        );
        self.run_attempt(provider, callbacks).instrument(span).await
    }
    
    async fn run_attempt(
        &self,
        provider: Provider,
        callbacks: &dyn LoginCallbacks,
    ) -> AttemptOutcome {
        let _busy = BusyGuard::engage(callbacks);
        callbacks.on_error("");
        
        tracing::debug!(target: LOG_TARGET, "Starting popup sign-in");
        
        match self.sign_in(provider).await {
            Ok(Some(_identity)) => {
                tracing::info!(
                    target: LOG_TARGET,
                    route = %self.destination_route,
                    "Sign-in succeeded"
                );
                self.navigator.navigate(&self.destination_route);
                AttemptOutcome::Navigated {
                    route: self.destination_route.clone(),
                }
            }
            Ok(None) => {
                tracing::warn!(target: LOG_TARGET, "Sign-in settled without an identity");
                AttemptOutcome::NoIdentity
            }
            Err(failure) => {
                let kind = failure.kind();
                let raw_message = failure.message.as_deref().unwrap_or_default();
                tracing::error!(
                    target: LOG_TARGET,
                    code = %failure.code,
                    provider_message = %self.redactor.redact(raw_message),
                    ?kind,
                    "{provider} login error"
                );
                
                let message = classify(&failure.code, failure.message.as_deref(), provider);
                callbacks.on_error(&message);
                AttemptOutcome::Failed { kind, message }
            }
        }
    }
    
    async fn sign_in(&self, provider: Provider) -> SignInResult {
        match provider {
            Provider::Google => self.authenticator.sign_in_with_google().await,
            Provider::Facebook => self.authenticator.sign_in_with_facebook().await,
        }
    }
}
