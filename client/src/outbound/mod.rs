//! Outbound adapters implementing the domain ports.
//!
//! - `http`: reqwest adapter for the aluno API.
//! - `session`: in-process session store.
//! - `feedback`: tracing-backed notifications and an in-memory history.

pub mod feedback;
pub mod http;
pub mod session;

pub use feedback::{HistoryNavigator, TracingNotifier};
pub use http::AlunoHttpGateway;
pub use session::InMemorySessionStore;
