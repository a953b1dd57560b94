//! Domain ports for the hexagonal boundary.

use std::sync::Arc;

mod macros;
pub(crate) use macros::define_port_error;

mod aluno_gateway;
mod navigator;
mod notifier;
mod session_store;

#[cfg(test)]
pub use aluno_gateway::MockAlunoGateway;
pub use aluno_gateway::{AlunoGateway, AlunoGatewayError};
#[cfg(test)]
pub use navigator::MockNavigator;
pub use navigator::Navigator;
#[cfg(test)]
pub use notifier::MockNotifier;
pub use notifier::Notifier;
#[cfg(test)]
pub use session_store::MockSessionStore;
pub use session_store::SessionStore;

/// Parameter object bundling the collaborators every page needs.
#[derive(Clone)]
pub struct PagePorts {
    /// Session/auth store.
    pub session: Arc<dyn SessionStore>,
    /// Toast notifications.
    pub notifier: Arc<dyn Notifier>,
    /// Client-side router.
    pub navigator: Arc<dyn Navigator>,
}
