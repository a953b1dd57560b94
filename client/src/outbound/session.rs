//! In-process session store.
//!
//! Mirrors the auth slice a browser client keeps in memory: a pending login
//! request, a loading flag, and whether a session is active. Whatever drives
//! the actual token exchange takes the pending request and reports back via
//! [`InMemorySessionStore::finish_login`].

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{info, warn};

use crate::domain::LoginRequest;
use crate::domain::ports::SessionStore;

#[derive(Debug, Default)]
struct SessionState {
    is_loading: bool,
    is_logged_in: bool,
    pending: Option<LoginRequest>,
}

/// Session store kept in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    state: Mutex<SessionState>,
}

impl InMemorySessionStore {
    /// Empty, logged-out store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the login request waiting to be processed, if any.
    pub fn take_pending_login(&self) -> Option<LoginRequest> {
        self.lock().pending.take()
    }

    /// Record the result of a login attempt and clear the loading flag.
    pub fn finish_login(&self, logged_in: bool) {
        let mut state = self.lock();
        state.is_loading = false;
        state.is_logged_in = logged_in;
    }

    /// Whether a session is active.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.lock().is_logged_in
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for InMemorySessionStore {
    fn request_login(&self, request: LoginRequest) {
        info!(
            email = request.credentials.email(),
            prev_path = %request.prev_path,
            "login request queued"
        );
        let mut state = self.lock();
        state.is_loading = true;
        state.pending = Some(request);
    }

    fn invalidate(&self) {
        warn!("session invalidated after auth failure");
        let mut state = self.lock();
        *state = SessionState::default();
    }

    fn is_loading(&self) -> bool {
        self.lock().is_loading
    }
}
