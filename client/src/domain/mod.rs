//! Domain primitives and page workflows.
//!
//! Purpose: hold the form state, validation rules, and submission workflows
//! for the Aluno and Login pages. Nothing in here performs I/O directly; all
//! side effects go through the traits in [`ports`].
//!
//! Public surface:
//! - `AlunoForm` / `LoginForm`: form state holders.
//! - `ValidationReport`: ordered validation messages.
//! - `AlunoPage` / `LoginPage`: submission coordinators.
//! - `WorkflowError`: failure taxonomy surfaced through outcomes.

pub mod aluno;
pub mod aluno_page;
pub mod auth;
pub mod error;
pub mod login_page;
pub mod ports;
pub mod routes;
pub mod validation;

pub use self::aluno::{AlunoField, AlunoForm, AlunoId, AlunoIdError, AlunoPayload, AlunoRecord};
pub use self::aluno_page::{AlunoPage, LoadOutcome};
pub use self::auth::{LoginCredentials, LoginField, LoginForm, LoginRequest};
pub use self::error::{SubmitOutcome, ValidationError, WorkflowError};
pub use self::login_page::LoginPage;
pub use self::validation::{ValidationReport, validate_aluno, validate_login};
