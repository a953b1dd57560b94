//! User feedback adapters: notifications and navigation.
//!
//! Without a browser, toasts become log events and the router becomes an
//! in-memory history stack.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{error, info};

use crate::domain::ports::{Navigator, Notifier};
use crate::domain::routes;

/// Notifier that renders toasts as tracing events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(toast = "success", "{message}");
    }

    fn error(&self, message: &str) {
        error!(toast = "error", "{message}");
    }
}

/// Navigator that records pushed routes.
#[derive(Debug)]
pub struct HistoryNavigator {
    entries: Mutex<Vec<String>>,
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self {
            entries: Mutex::new(vec![routes::HOME.to_owned()]),
        }
    }
}

impl HistoryNavigator {
    /// History positioned at the home route.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Route currently displayed.
    #[must_use]
    pub fn current(&self) -> String {
        self.lock()
            .last()
            .cloned()
            .unwrap_or_else(|| routes::HOME.to_owned())
    }

    /// Every route visited, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Navigator for HistoryNavigator {
    fn push(&self, path: &str) {
        info!(path, "navigating");
        self.lock().push(path.to_owned());
    }
}
