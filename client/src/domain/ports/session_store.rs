//! Port for the external session (auth) store.
//!
//! The store owns authentication state and the login request lifecycle. Pages
//! only dispatch intents to it.

use crate::domain::LoginRequest;

/// Session store operations used by the page workflows.
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore: Send + Sync {
    /// Start a login with validated credentials.
    fn request_login(&self, request: LoginRequest);

    /// Drop any session state after the API reported an auth failure.
    fn invalidate(&self);

    /// Whether a login request is in progress.
    fn is_loading(&self) -> bool;
}
