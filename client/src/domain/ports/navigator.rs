//! Port for client-side navigation.

/// Client-side router.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Navigate to `path`.
    fn push(&self, path: &str);
}
