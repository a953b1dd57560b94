//! Port for the remote aluno API.
//!
//! The page workflows only see this trait, so tests can substitute a double
//! for the reqwest adapter in `outbound::http`.

use async_trait::async_trait;

use crate::domain::{AlunoId, AlunoPayload, AlunoRecord};

use super::define_port_error;

define_port_error! {
    /// Errors raised by aluno API adapters.
    pub enum AlunoGatewayError {
        /// The request never produced an HTTP response.
        Transport {
            /// Transport failure detail.
            message: String,
        } => "aluno API transport failed: {message}",
        /// The API answered with a non-success status.
        Rejected {
            /// HTTP status code.
            status: u16,
            /// Server-provided error list, which may be empty.
            messages: Vec<String>,
        } => "aluno API rejected the request with status {status}",
        /// A success response body could not be decoded.
        Decode {
            /// Decoder failure detail.
            message: String,
        } => "aluno API response could not be decoded: {message}",
    }
}

impl AlunoGatewayError {
    /// HTTP status of the failed response, when there was one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }

    /// Server-provided error messages; empty when none were sent.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        match self {
            Self::Rejected { messages, .. } => messages.as_slice(),
            Self::Transport { .. } | Self::Decode { .. } => &[],
        }
    }
}

/// Remote operations on aluno records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AlunoGateway: Send + Sync {
    /// Fetch an existing record (`GET /alunos/{id}`).
    async fn fetch(&self, id: &AlunoId) -> Result<AlunoRecord, AlunoGatewayError>;

    /// Create a record (`POST /alunos/`).
    async fn create(&self, payload: &AlunoPayload) -> Result<AlunoRecord, AlunoGatewayError>;

    /// Replace an existing record (`PUT /alunos/{id}`).
    async fn update(
        &self,
        id: &AlunoId,
        payload: &AlunoPayload,
    ) -> Result<AlunoRecord, AlunoGatewayError>;
}
