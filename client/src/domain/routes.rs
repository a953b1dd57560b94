//! Client-side route paths.

use super::AlunoId;

/// Home route; failed loads return here.
pub const HOME: &str = "/";

/// Edit route for one aluno, e.g. `/aluno/5/edit`.
#[must_use]
pub fn aluno_edit(id: AlunoId) -> String {
    format!("/aluno/{id}/edit")
}
