//! Port for user-visible notifications (toasts).

/// Surfaces short messages to the user.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Show a success message.
    fn success(&self, message: &str);

    /// Show an error message.
    fn error(&self, message: &str);
}
