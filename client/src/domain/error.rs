//! Workflow failure taxonomy and submission outcomes.
//!
//! Failures never escape a workflow as `Err`: each page turns them into
//! notifications and reports what happened through [`SubmitOutcome`] or
//! [`crate::domain::LoadOutcome`].

use thiserror::Error;

use super::aluno::AlunoRecord;
use super::ports::AlunoGatewayError;
use super::validation::ValidationReport;

/// HTTP status that marks an expired or missing session.
pub const UNAUTHORIZED_STATUS: u16 = 401;

/// Local validation failure; never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("form failed {} validation rule(s)", .report.len())]
pub struct ValidationError {
    report: ValidationReport,
}

impl ValidationError {
    /// Wrap a report that contains at least one message.
    #[must_use]
    pub const fn new(report: ValidationReport) -> Self {
        Self { report }
    }

    /// Messages in rule order.
    #[must_use]
    pub const fn report(&self) -> &ValidationReport {
        &self.report
    }
}

/// Failure classification for one workflow action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// The form did not pass validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The API call failed.
    #[error("request failed: {0}")]
    Transport(AlunoGatewayError),
    /// The API rejected the session (status 401).
    #[error("session rejected: {0}")]
    Unauthorized(AlunoGatewayError),
}

impl From<AlunoGatewayError> for WorkflowError {
    fn from(error: AlunoGatewayError) -> Self {
        if error.status() == Some(UNAUTHORIZED_STATUS) {
            Self::Unauthorized(error)
        } else {
            Self::Transport(error)
        }
    }
}

/// What a submit action ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new record was created.
    Created(AlunoRecord),
    /// An existing record was updated.
    Updated(AlunoRecord),
    /// Credentials were handed to the session store.
    LoginRequested,
    /// The action failed; notifications have already been shown.
    Failed(WorkflowError),
}

impl SubmitOutcome {
    /// Whether the action failed.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}
