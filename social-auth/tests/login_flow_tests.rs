//! End-to-end sign-in attempts against scripted providers
//! 
//! Covers the callback ordering the sign-in screen relies on, and the busy
//! flag being released on every exit path (success, failure, panic, a
//! dropped attempt).

use async_trait::async_trait;
use config_engine::LoginConfig;
use parking_lot::Mutex;
use social_auth::*;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Loading(bool),
    Error(String),
}

/// Callbacks that record every call in order
#[derive(Default)]
struct RecordingCallbacks {
    events: Mutex<Vec<Event>>,
    state: LoginAttemptState,
}

impl RecordingCallbacks {
    fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }
}

impl LoginCallbacks for RecordingCallbacks {
    fn on_error(&self, message: &str) {
        self.events.lock().push(Event::Error(message.to_string()));
        self.state.on_error(message);
    }
    
    fn loading(&self) -> bool {
        self.state.loading()
    }
    
    fn set_loading(&self, loading: bool) {
        self.events.lock().push(Event::Loading(loading));
        self.state.set_loading(loading);
    }
}

#[derive(Default)]
struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.lock().push(route.to_string());
    }
}

/// Returns the same scripted result for both providers and remembers which
/// one was asked
struct ScriptedProvider {
    result: SignInResult,
    calls: Mutex<Vec<Provider>>,
}

impl ScriptedProvider {
    fn new(result: SignInResult) -> Self {
        Self {
            result,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl AuthenticationProvider for ScriptedProvider {
    async fn sign_in_with_google(&self) -> SignInResult {
        self.calls.lock().push(Provider::Google);
        self.result.clone()
    }
    
    async fn sign_in_with_facebook(&self) -> SignInResult {
        self.calls.lock().push(Provider::Facebook);
        self.result.clone()
    }
}

/// Popup that never closes
struct HangingProvider;

#[async_trait]
impl AuthenticationProvider for HangingProvider {
    async fn sign_in_with_google(&self) -> SignInResult {
        std::future::pending().await
    }
    
    async fn sign_in_with_facebook(&self) -> SignInResult {
        std::future::pending().await
    }
}

struct PanickingProvider;

#[async_trait]
impl AuthenticationProvider for PanickingProvider {
    async fn sign_in_with_google(&self) -> SignInResult {
        panic!("SDK crashed")
    }
    
    async fn sign_in_with_facebook(&self) -> SignInResult {
        panic!("SDK crashed")
    }
}

fn social_login<A: AuthenticationProvider>(authenticator: A) -> SocialLogin<A, RecordingNavigator> {
    SocialLogin::new(authenticator, RecordingNavigator::default(), &LoginConfig::default())
}

#[tokio::test]
async fn test_success_callback_order() {
    let login = social_login(ScriptedProvider::new(Ok(Some(AuthSuccess::new("uid-1")))));
    let callbacks = RecordingCallbacks::default();
    
    let outcome = login.attempt_login(Provider::Facebook, &callbacks).await;
    
    assert!(outcome.is_success());
    assert_eq!(
        callbacks.events(),
        vec![
            Event::Loading(true),
            Event::Error(String::new()),
            Event::Loading(false),
        ]
    );
    assert_eq!(*login.navigator().routes.lock(), vec!["/dashboard".to_string()]);
    assert_eq!(*login.authenticator().calls.lock(), vec![Provider::Facebook]);
}

#[tokio::test]
async fn test_failure_callback_order() {
    let failure = AuthFailure::new("auth/popup-closed-by-user").with_message("Firebase: Error");
    let login = social_login(ScriptedProvider::new(Err(failure)));
    let callbacks = RecordingCallbacks::default();
    
    let outcome = login.attempt_login(Provider::Google, &callbacks).await;
    
    assert_eq!(
        callbacks.events(),
        vec![
            Event::Loading(true),
            Event::Error(String::new()),
            Event::Error("Sign-in was cancelled. Please try again.".to_string()),
            Event::Loading(false),
        ]
    );
    assert_eq!(
        outcome,
        AttemptOutcome::Failed {
            kind: FailureKind::UserCancelled,
            message: "Sign-in was cancelled. Please try again.".to_string(),
        }
    );
    assert!(login.navigator().routes.lock().is_empty());
    assert_eq!(*login.authenticator().calls.lock(), vec![Provider::Google]);
}

#[tokio::test]
async fn test_generic_message_names_provider() {
    let login = social_login(ScriptedProvider::new(Err(AuthFailure::new("auth/internal-error"))));
    let state = LoginAttemptState::new();
    
    login.attempt_login(Provider::Facebook, &state).await;
    
    assert_eq!(
        state.error_message(),
        "Failed to sign in with facebook. Please try again."
    );
}

#[tokio::test]
async fn test_retry_after_failure_clears_error() {
    let state = LoginAttemptState::new();
    
    let failing = social_login(ScriptedProvider::new(Err(AuthFailure::new(
        "auth/network-request-failed",
    ))));
    failing.attempt_login(Provider::Google, &state).await;
    assert!(state.error_message().starts_with("Network error."));
    
    let succeeding = social_login(ScriptedProvider::new(Ok(Some(AuthSuccess::new("uid-2")))));
    succeeding.attempt_login(Provider::Google, &state).await;
    assert_eq!(state.snapshot(), AttemptSnapshot::default());
    assert_eq!(succeeding.navigator().routes.lock().len(), 1);
}

#[tokio::test]
async fn test_unsettled_attempt_stays_busy_until_dropped() {
    let login = social_login(HangingProvider);
    let state = LoginAttemptState::new();
    
    let mut attempt = Box::pin(login.attempt_login(Provider::Google, &state));
    let timed_out = tokio::time::timeout(Duration::from_millis(20), &mut attempt).await;
    
    assert!(timed_out.is_err());
    assert!(state.is_busy());
    
    drop(attempt);
    assert!(!state.is_busy());
    assert!(login.navigator().routes.lock().is_empty());
}

#[tokio::test]
async fn test_panicking_provider_releases_busy_flag() {
    let login = Arc::new(social_login(PanickingProvider));
    let state = Arc::new(LoginAttemptState::new());
    
    let task = {
        let login = Arc::clone(&login);
        let state = Arc::clone(&state);
        tokio::spawn(async move {
            login.attempt_login(Provider::Facebook, &*state).await
        })
    };
    
    let joined = task.await;
    assert!(joined.is_err());
    assert!(!state.is_busy());
}

#[tokio::test]
async fn test_panel_follows_attempt_state() {
    let login = social_login(HangingProvider);
    let state = LoginAttemptState::new();
    
    let idle = SocialButtonPanel::from_snapshot(&state.snapshot());
    let provider = idle.press(Provider::Google).unwrap();
    
    let mut attempt = Box::pin(login.attempt_login(provider, &state));
    let _ = tokio::time::timeout(Duration::from_millis(20), &mut attempt).await;
    
    let busy = SocialButtonPanel::from_snapshot(&state.snapshot());
    assert_eq!(busy.press(Provider::Google), None);
    assert_eq!(busy.press(Provider::Facebook), None);
    
    drop(attempt);
    let released = SocialButtonPanel::from_snapshot(&state.snapshot());
    assert_eq!(released.press(Provider::Facebook), Some(Provider::Facebook));
}
