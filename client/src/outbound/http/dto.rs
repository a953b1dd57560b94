//! DTOs for decoding aluno API responses.
//!
//! The adapter decodes into these transport DTOs first, then maps into the
//! domain `AlunoRecord` in one pass.

use serde::Deserialize;
use serde_json::Number;

use crate::domain::{AlunoId, AlunoRecord};

#[derive(Debug, Deserialize)]
pub(super) struct AlunoDto {
    #[serde(default)]
    pub(super) id: Option<u64>,
    #[serde(default)]
    pub(super) nome: Option<String>,
    #[serde(default)]
    pub(super) sobrenome: Option<String>,
    #[serde(default)]
    pub(super) email: Option<String>,
    #[serde(default)]
    pub(super) idade: Option<NumericDto>,
    #[serde(default)]
    pub(super) peso: Option<NumericDto>,
    #[serde(default)]
    pub(super) altura: Option<NumericDto>,
    #[serde(rename = "Fotos", default)]
    pub(super) fotos: Option<Vec<Option<FotoDto>>>,
}

/// Numeric column that may arrive as a JSON number or as a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum NumericDto {
    Number(Number),
    Text(String),
}

#[derive(Debug, Deserialize)]
pub(super) struct FotoDto {
    #[serde(default)]
    pub(super) url: Option<String>,
}

/// Error body; reads use `errors`, writes use `erros`. Either may be null.
#[derive(Debug, Default, Deserialize)]
pub(super) struct ErrorEnvelopeDto {
    #[serde(default)]
    pub(super) errors: Option<Vec<String>>,
    #[serde(default)]
    pub(super) erros: Option<Vec<String>>,
}

impl NumericDto {
    fn into_text(self) -> String {
        match self {
            Self::Number(number) => number.to_string(),
            Self::Text(text) => text,
        }
    }
}

impl AlunoDto {
    pub(super) fn into_domain(self) -> AlunoRecord {
        let foto_url = self
            .fotos
            .unwrap_or_default()
            .into_iter()
            .next()
            .flatten()
            .and_then(|foto| foto.url)
            .filter(|url| !url.is_empty());
        AlunoRecord {
            id: self.id.and_then(AlunoId::new),
            nome: self.nome.unwrap_or_default(),
            sobrenome: self.sobrenome.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            idade: self.idade.map(NumericDto::into_text).unwrap_or_default(),
            peso: self.peso.map(NumericDto::into_text).unwrap_or_default(),
            altura: self.altura.map(NumericDto::into_text).unwrap_or_default(),
            foto_url,
        }
    }
}

impl ErrorEnvelopeDto {
    /// Decode an error body, treating anything unreadable as "no messages".
    pub(super) fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    pub(super) fn into_messages(self) -> Vec<String> {
        let mut messages = self.errors.unwrap_or_default();
        messages.extend(self.erros.unwrap_or_default());
        messages
    }
}
