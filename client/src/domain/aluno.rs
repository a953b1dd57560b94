//! Aluno (student) record model and form state.

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Validation errors returned when parsing an [`AlunoId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlunoIdError {
    /// The identifier was blank.
    Empty,
    /// The identifier was not a positive integer.
    Invalid,
}

impl fmt::Display for AlunoIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "aluno id must not be empty"),
            Self::Invalid => write!(f, "aluno id must be a positive integer"),
        }
    }
}

impl std::error::Error for AlunoIdError {}

/// Server-assigned aluno identifier.
///
/// Route parameters arrive as text (`/aluno/5/edit`); a missing or zero
/// identifier means "new record", so zero is not representable here.
///
/// # Examples
/// ```
/// use escola_client::domain::AlunoId;
///
/// let id: AlunoId = "5".parse().unwrap();
/// assert_eq!(id.get(), 5);
/// assert!("0".parse::<AlunoId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlunoId(NonZeroU64);

impl AlunoId {
    /// Construct an identifier, returning `None` for zero.
    #[must_use]
    pub fn new(value: u64) -> Option<Self> {
        NonZeroU64::new(value).map(Self)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl FromStr for AlunoId {
    type Err = AlunoIdError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AlunoIdError::Empty);
        }
        trimmed
            .parse::<NonZeroU64>()
            .map(Self)
            .map_err(|_| AlunoIdError::Invalid)
    }
}

impl fmt::Display for AlunoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Editable fields of the Aluno form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlunoField {
    /// First name.
    Nome,
    /// Surname.
    Sobrenome,
    /// Contact email.
    Email,
    /// Age in whole years.
    Idade,
    /// Weight.
    Peso,
    /// Height.
    Altura,
}

/// Form state for the Aluno page.
///
/// Numeric fields are kept exactly as typed; the validator decides whether
/// they parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AlunoForm {
    /// Identifier of the record being edited; `None` in create mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<AlunoId>,
    /// First name.
    pub nome: String,
    /// Surname.
    pub sobrenome: String,
    /// Contact email.
    pub email: String,
    /// Age as typed.
    pub idade: String,
    /// Weight as typed.
    pub peso: String,
    /// Height as typed.
    pub altura: String,
}

impl AlunoForm {
    /// Empty form bound to an optional record identifier.
    #[must_use]
    pub fn for_id(id: Option<AlunoId>) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Replace one field's value.
    pub fn set(&mut self, field: AlunoField, value: impl Into<String>) {
        let text = value.into();
        match field {
            AlunoField::Nome => self.nome = text,
            AlunoField::Sobrenome => self.sobrenome = text,
            AlunoField::Email => self.email = text,
            AlunoField::Idade => self.idade = text,
            AlunoField::Peso => self.peso = text,
            AlunoField::Altura => self.altura = text,
        }
    }

    /// Current value of one field.
    #[must_use]
    pub fn get(&self, field: AlunoField) -> &str {
        match field {
            AlunoField::Nome => &self.nome,
            AlunoField::Sobrenome => &self.sobrenome,
            AlunoField::Email => &self.email,
            AlunoField::Idade => &self.idade,
            AlunoField::Peso => &self.peso,
            AlunoField::Altura => &self.altura,
        }
    }

    /// Copy every editable field from a fetched record.
    ///
    /// The identifier is left alone: it comes from the route, not the body.
    pub fn hydrate(&mut self, record: &AlunoRecord) {
        self.nome.clone_from(&record.nome);
        self.sobrenome.clone_from(&record.sobrenome);
        self.email.clone_from(&record.email);
        self.idade.clone_from(&record.idade);
        self.peso.clone_from(&record.peso);
        self.altura.clone_from(&record.altura);
    }
}

/// Aluno record as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlunoRecord {
    /// Identifier assigned by the server, when the response carried one.
    pub id: Option<AlunoId>,
    /// First name.
    pub nome: String,
    /// Surname.
    pub sobrenome: String,
    /// Contact email.
    pub email: String,
    /// Age rendered as text.
    pub idade: String,
    /// Weight rendered as text.
    pub peso: String,
    /// Height rendered as text.
    pub altura: String,
    /// URL of the first attached photo.
    pub foto_url: Option<String>,
}

/// Request body for create and update calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlunoPayload {
    /// First name.
    pub nome: String,
    /// Surname.
    pub sobrenome: String,
    /// Contact email.
    pub email: String,
    /// Age as typed.
    pub idade: String,
    /// Weight as typed.
    pub peso: String,
    /// Height as typed.
    pub altura: String,
}

impl From<&AlunoForm> for AlunoPayload {
    fn from(form: &AlunoForm) -> Self {
        Self {
            nome: form.nome.clone(),
            sobrenome: form.sobrenome.clone(),
            email: form.email.clone(),
            idade: form.idade.clone(),
            peso: form.peso.clone(),
            altura: form.altura.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("5", 5)]
    #[case(" 12 ", 12)]
    fn parses_positive_ids(#[case] raw: &str, #[case] expected: u64) {
        let id: AlunoId = raw.parse().expect("valid id");
        assert_eq!(id.get(), expected);
    }

    #[rstest]
    #[case("", AlunoIdError::Empty)]
    #[case("0", AlunoIdError::Invalid)]
    #[case("-3", AlunoIdError::Invalid)]
    #[case("abc", AlunoIdError::Invalid)]
    fn rejects_invalid_ids(#[case] raw: &str, #[case] expected: AlunoIdError) {
        let err = raw.parse::<AlunoId>().expect_err("invalid id");
        assert_eq!(err, expected);
    }

    #[test]
    fn hydrate_copies_fields_but_keeps_route_id() {
        let id = AlunoId::new(5);
        let mut form = AlunoForm::for_id(id);
        let record = AlunoRecord {
            id: AlunoId::new(9),
            nome: "Ana".to_owned(),
            sobrenome: "Silva".to_owned(),
            email: "a@b.com".to_owned(),
            idade: "30".to_owned(),
            peso: "60.5".to_owned(),
            altura: "1.7".to_owned(),
            foto_url: None,
        };

        form.hydrate(&record);

        assert_eq!(form.id, id);
        assert_eq!(form.nome, "Ana");
        assert_eq!(form.altura, "1.7");
    }

    #[test]
    fn payload_omits_identifier() {
        let mut form = AlunoForm::for_id(AlunoId::new(5));
        form.set(AlunoField::Nome, "Ana");
        let body = serde_json::to_value(AlunoPayload::from(&form)).expect("serialise payload");
        assert!(body.get("id").is_none());
        assert_eq!(body["nome"], "Ana");
    }
}
