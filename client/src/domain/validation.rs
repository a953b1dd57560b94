//! Form validation rules for the Aluno and Login pages.
//!
//! Every rule is evaluated on every call, so the returned report lists all
//! violations in a fixed order rather than stopping at the first one.
//! Numeric fields are checked through their string form: an empty `idade`
//! fails both the "required" and the "positive integer" rule.

use std::sync::OnceLock;

use regex::Regex;
use validator::ValidateEmail;

use super::aluno::AlunoForm;
use super::auth::LoginForm;
use super::error::ValidationError;

/// Minimum length for `nome` and `sobrenome`.
pub const NAME_MIN: usize = 3;
/// Maximum length for `nome` and `sobrenome`.
pub const NAME_MAX: usize = 255;
/// Minimum password length.
pub const PASSWORD_MIN: usize = 6;
/// Maximum password length.
pub const PASSWORD_MAX: usize = 50;

pub(crate) const NOME_EMPTY: &str = "Por favor, preencha o nome.";
pub(crate) const NOME_LENGTH: &str = "O nome deve ter entre 3 e 255 caracteres.";
pub(crate) const SOBRENOME_EMPTY: &str = "Por favor, preencha o sobrenome.";
pub(crate) const SOBRENOME_LENGTH: &str = "O sobrenome deve ter entre 3 e 255 caracteres.";
pub(crate) const EMAIL_INVALID: &str = "Por favor, preencha um email válido.";
pub(crate) const IDADE_EMPTY: &str = "Por favor, preencha a idade.";
pub(crate) const IDADE_INVALID: &str = "A idade deve ser um número inteiro positivo.";
pub(crate) const PESO_EMPTY: &str = "Por favor, preencha o peso.";
pub(crate) const PESO_INVALID: &str = "O peso deve ser um número válido.";
pub(crate) const ALTURA_EMPTY: &str = "Por favor, preencha a altura.";
pub(crate) const ALTURA_INVALID: &str = "A altura deve ser um número válido.";
pub(crate) const LOGIN_EMAIL_INVALID: &str = "E-mail inválido.";
pub(crate) const LOGIN_PASSWORD_INVALID: &str = "Senha inválida";

/// Ordered list of validation messages; empty means the form is valid.
///
/// # Examples
/// ```
/// use escola_client::domain::{AlunoForm, validate_aluno};
///
/// let report = validate_aluno(&AlunoForm::default());
/// assert!(report.has_errors());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    messages: Vec<String>,
}

impl ValidationReport {
    /// Whether any rule failed.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.messages.is_empty()
    }

    /// Number of failed rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the report is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages in rule order.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        self.messages.as_slice()
    }

    /// Convert into `Ok(())` when valid, or a [`ValidationError`] otherwise.
    ///
    /// # Errors
    ///
    /// Returns the report wrapped in [`ValidationError`] when it has errors.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.has_errors() {
            Err(ValidationError::new(self))
        } else {
            Ok(())
        }
    }

    fn check(&mut self, passed: bool, message: &str) {
        if !passed {
            self.messages.push(message.to_owned());
        }
    }
}

/// Run every Aluno rule against the current form values.
#[must_use]
pub fn validate_aluno(form: &AlunoForm) -> ValidationReport {
    let mut report = ValidationReport::default();
    report.check(!form.nome.is_empty(), NOME_EMPTY);
    report.check(length_within(&form.nome, NAME_MIN, NAME_MAX), NOME_LENGTH);
    report.check(!form.sobrenome.is_empty(), SOBRENOME_EMPTY);
    report.check(
        length_within(&form.sobrenome, NAME_MIN, NAME_MAX),
        SOBRENOME_LENGTH,
    );
    report.check(is_email(&form.email), EMAIL_INVALID);
    report.check(!form.idade.is_empty(), IDADE_EMPTY);
    report.check(is_positive_integer(&form.idade), IDADE_INVALID);
    report.check(!form.peso.is_empty(), PESO_EMPTY);
    report.check(is_non_negative_float(&form.peso), PESO_INVALID);
    report.check(!form.altura.is_empty(), ALTURA_EMPTY);
    report.check(is_non_negative_float(&form.altura), ALTURA_INVALID);
    report
}

/// Run every Login rule against the current form values.
#[must_use]
pub fn validate_login(form: &LoginForm) -> ValidationReport {
    let mut report = ValidationReport::default();
    report.check(is_email(form.email()), LOGIN_EMAIL_INVALID);
    report.check(
        length_within(form.password(), PASSWORD_MIN, PASSWORD_MAX),
        LOGIN_PASSWORD_INVALID,
    );
    report
}

/// Whether `value` is a well-formed email address.
///
/// On top of the syntax check the domain must be dotted and end in a
/// top-level label of at least two letters, or an `xn--` label.
#[must_use]
pub fn is_email(value: &str) -> bool {
    value.validate_email()
        && value
            .rsplit_once('@')
            .and_then(|(_, domain)| domain.rsplit_once('.'))
            .is_some_and(|(_, tld)| is_top_level_label(tld))
}

fn is_top_level_label(label: &str) -> bool {
    let lowered = label.to_ascii_lowercase();
    if let Some(rest) = lowered.strip_prefix("xn") {
        return rest.chars().count() >= 2
            && rest
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-');
    }
    label.chars().count() >= 2 && label.chars().all(char::is_alphabetic)
}

/// Whether `value` has between `min` and `max` UTF-16 code units, inclusive.
///
/// Characters outside the Basic Multilingual Plane count twice, as they do in
/// browser form inputs.
#[must_use]
pub fn length_within(value: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&value.encode_utf16().count())
}

/// Whether `value` is an integer of at least 1.
///
/// An optional sign is accepted and leading zeroes are allowed (`"+007"`).
#[must_use]
pub fn is_positive_integer(value: &str) -> bool {
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, value.get(1..).unwrap_or_default()),
        Some(b'+') => (false, value.get(1..).unwrap_or_default()),
        _ => (false, value),
    };
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return false;
    }
    !negative && digits.bytes().any(|byte| byte != b'0')
}

/// Whether `value` is a decimal number of at least 0.
///
/// Accepts an optional sign, optional integer and fractional parts, and an
/// optional exponent (`"72.5"`, `".5"`, `"1e3"`). Values that overflow `f64`
/// parse to infinity and pass when positive.
#[must_use]
pub fn is_non_negative_float(value: &str) -> bool {
    if matches!(value, "" | "." | "+" | "-") || !float_regex().is_match(value) {
        return false;
    }
    value
        .parse::<f64>()
        .is_ok_and(|parsed| parsed >= 0.0)
}

static FLOAT_RE: OnceLock<Regex> = OnceLock::new();

fn float_regex() -> &'static Regex {
    FLOAT_RE.get_or_init(|| {
        // Sign, digits and exponent only; the range check happens after parsing.
        let pattern = r"^[+-]?[0-9]*(?:\.[0-9]*)?(?:[eE][+-]?[0-9]+)?$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("float regex failed to compile: {error}"))
    })
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn valid_form() -> AlunoForm {
        AlunoForm {
            id: None,
            nome: "Ana".to_owned(),
            sobrenome: "Silva".to_owned(),
            email: "a@b.com".to_owned(),
            idade: "30".to_owned(),
            peso: "60.5".to_owned(),
            altura: "1.70".to_owned(),
        }
    }

    #[rstest]
    fn valid_form_has_no_errors(valid_form: AlunoForm) {
        let report = validate_aluno(&valid_form);
        assert!(!report.has_errors(), "unexpected errors: {report:?}");
    }

    #[rstest]
    fn empty_form_reports_every_rule_in_order() {
        let report = validate_aluno(&AlunoForm::default());
        assert_eq!(
            report.messages(),
            [
                NOME_EMPTY,
                NOME_LENGTH,
                SOBRENOME_EMPTY,
                SOBRENOME_LENGTH,
                EMAIL_INVALID,
                IDADE_EMPTY,
                IDADE_INVALID,
                PESO_EMPTY,
                PESO_INVALID,
                ALTURA_EMPTY,
                ALTURA_INVALID,
            ]
        );
    }

    #[rstest]
    fn empty_idade_yields_two_messages(mut valid_form: AlunoForm) {
        valid_form.idade.clear();
        let report = validate_aluno(&valid_form);
        assert_eq!(report.messages(), [IDADE_EMPTY, IDADE_INVALID]);
    }

    #[rstest]
    #[case("ab")]
    #[case(&"a".repeat(256))]
    fn short_or_long_names_fail_length_rule(mut valid_form: AlunoForm, #[case] nome: &str) {
        valid_form.nome = nome.to_owned();
        let report = validate_aluno(&valid_form);
        assert_eq!(report.messages(), [NOME_LENGTH]);
    }

    #[rstest]
    fn name_length_counts_characters_not_bytes(mut valid_form: AlunoForm) {
        valid_form.nome = "Zoë".to_owned();
        assert!(!validate_aluno(&valid_form).has_errors());
    }

    #[rstest]
    #[case::two_astral_chars("𝒜𝒷", true)]
    #[case::one_astral_char("𝒜", false)]
    #[case::one_astral_one_bmp("𝒜b", true)]
    fn astral_characters_count_as_two_units(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(length_within(value, NAME_MIN, NAME_MAX), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-1")]
    #[case("3.5")]
    #[case("")]
    #[case("abc")]
    #[case("+")]
    #[case("1e2")]
    fn rejects_non_positive_integers(#[case] idade: &str) {
        assert!(!is_positive_integer(idade));
    }

    #[rstest]
    #[case("1")]
    #[case("30")]
    #[case("+7")]
    #[case("007")]
    fn accepts_positive_integers(#[case] idade: &str) {
        assert!(is_positive_integer(idade));
    }

    #[rstest]
    #[case("0")]
    #[case("72.5")]
    #[case("1.70")]
    #[case(".5")]
    #[case("5.")]
    #[case("1e3")]
    #[case("-0")]
    #[case::overflows_to_infinity("1e400")]
    fn accepts_non_negative_floats(#[case] value: &str) {
        assert!(is_non_negative_float(value));
    }

    #[rstest]
    #[case("-1")]
    #[case("-0.5")]
    #[case("abc")]
    #[case("")]
    #[case(".")]
    #[case("1,5")]
    #[case("1e")]
    #[case("-.")]
    #[case::overflows_to_negative_infinity("-1e400")]
    fn rejects_negative_or_non_numeric_floats(#[case] value: &str) {
        assert!(!is_non_negative_float(value));
    }

    #[rstest]
    #[case("a@b.com", true)]
    #[case("not-an-email", false)]
    #[case::no_dot("a@b", false)]
    #[case::bare_host("user@localhost", false)]
    #[case::one_letter_tld("a@b.c", false)]
    #[case::numeric_tld("a@b.123", false)]
    #[case::subdomain("ana.silva@mail.escola.com.br", true)]
    #[case::punycode_tld("a@b.xn--p1ai", true)]
    #[case("", false)]
    fn email_rule(#[case] email: &str, #[case] expected: bool) {
        assert_eq!(is_email(email), expected);
    }

    #[rstest]
    #[case("abcde", vec![LOGIN_PASSWORD_INVALID])]
    #[case("abcdef", vec![])]
    #[case(&"x".repeat(50), vec![])]
    #[case(&"x".repeat(51), vec![LOGIN_PASSWORD_INVALID])]
    fn login_password_length(#[case] password: &str, #[case] expected: Vec<&str>) {
        let report = validate_login(&LoginForm::new("a@b.com", password));
        assert_eq!(report.messages(), expected.as_slice());
    }

    #[rstest]
    fn login_reports_email_before_password() {
        let report = validate_login(&LoginForm::new("not-an-email", "abc"));
        assert_eq!(
            report.messages(),
            [LOGIN_EMAIL_INVALID, LOGIN_PASSWORD_INVALID]
        );
    }
}
