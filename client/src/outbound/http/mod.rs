//! HTTP adapters for the aluno API.
//!
//! This module provides a reqwest implementation of the `AlunoGateway` port.

mod aluno_http_gateway;
mod dto;

pub use aluno_http_gateway::AlunoHttpGateway;
