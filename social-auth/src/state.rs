use parking_lot::RwLock;

/// Boundary between the orchestrator and the surrounding UI.
///
/// Mirrors the props a sign-in screen hands to its social buttons: an error
/// reporter, the busy flag, and its setter.
pub trait LoginCallbacks: Send + Sync {
    /// Report a display string; an empty string clears the current one
    fn on_error(&self, message: &str);
    
    fn loading(&self) -> bool;
    
    fn set_loading(&self, loading: bool);
}

/// Copy of the attempt state at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttemptSnapshot {
    pub busy: bool,
    pub error_message: String,
}

/// Attempt state owned by one sign-in screen.
///
/// Created with the screen, mutated per attempt, dropped with the screen.
/// Nothing here is persisted.
#[derive(Debug, Default)]
pub struct LoginAttemptState {
    inner: RwLock<AttemptSnapshot>,
}

impl LoginAttemptState {
    pub fn new() -> Self {
        Self::default()
    }
    
    pub fn snapshot(&self) -> AttemptSnapshot {
        self.inner.read().clone()
    }
    
    pub fn is_busy(&self) -> bool {
        self.inner.read().busy
    }
    
    pub fn error_message(&self) -> String {
        self.inner.read().error_message.clone()
    }
}

impl LoginCallbacks for LoginAttemptState {
    fn on_error(&self, message: &str) {
        let mut inner = self.inner.write();
        inner.error_message.clear();
        inner.error_message.push_str(message);
    }
    
    fn loading(&self) -> bool {
        self.is_busy()
    }
    
    fn set_loading(&self, loading: bool) {
        self.inner.write().busy = loading;
    }
}

/// Holds the busy flag for the lifetime of one attempt.
///
/// Clearing happens in `Drop`, so it runs on every exit path: success,
/// failure, a panicking provider, or the attempt future being dropped.
#[must_use = "the busy flag is cleared as soon as the guard is dropped"]
pub struct BusyGuard<'a> {
    callbacks: &'a dyn LoginCallbacks,
}

impl<'a> BusyGuard<'a> {
    pub fn engage(callbacks: &'a dyn LoginCallbacks) -> Self {
        callbacks.set_loading(true);
        Self { callbacks }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.callbacks.set_loading(false);
    }
}
