//! Client-side workflows for the Escola web client.
//!
//! The crate models two form-driven pages, Aluno (create/edit a student) and
//! Login, as plain Rust workflows. Every collaborator the pages talk to (the
//! HTTP API, the session store, toast notifications, and the router) sits
//! behind a port in [`domain::ports`], with concrete adapters in
//! [`outbound`].

pub mod config;
pub mod domain;
pub mod outbound;

pub use config::ClientSettings;
