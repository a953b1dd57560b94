//! Login form state and the credentials handed to the session store.
//!
//! Raw input lives in [`LoginForm`]. [`LoginCredentials`] can only be built
//! from a form that passes the login rules, so the session store never sees
//! unvalidated input.

use std::fmt;

use zeroize::Zeroizing;

use super::error::ValidationError;
use super::routes;
use super::validation::validate_login;

/// Editable fields of the Login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    /// Account email.
    Email,
    /// Account password.
    Password,
}

/// Form state for the Login page.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    email: String,
    password: Zeroizing<String>,
}

impl LoginForm {
    /// Form pre-filled with the given values.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Replace one field's value.
    pub fn set(&mut self, field: LoginField, value: impl Into<String>) {
        match field {
            LoginField::Email => self.email = value.into(),
            LoginField::Password => self.password = Zeroizing::new(value.into()),
        }
    }

    /// Email as typed.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password as typed.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Validated login credentials.
///
/// ## Invariants
/// - `email` is a well-formed address.
/// - `password` is between 6 and 50 characters long.
///
/// # Examples
/// ```
/// use escola_client::domain::{LoginCredentials, LoginForm};
///
/// let form = LoginForm::new("a@b.com", "abcdef");
/// let creds = LoginCredentials::try_from_form(&form).unwrap();
/// assert_eq!(creds.email(), "a@b.com");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Validate a login form and capture its values.
    ///
    /// # Errors
    ///
    /// Returns every violated login rule when the form is invalid.
    pub fn try_from_form(form: &LoginForm) -> Result<Self, ValidationError> {
        validate_login(form).into_result()?;
        Ok(Self {
            email: form.email.clone(),
            password: form.password.clone(),
        })
    }

    /// Account email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Account password.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Login intent dispatched to the session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    /// Credentials to authenticate with.
    pub credentials: LoginCredentials,
    /// Route to return to once authenticated.
    pub prev_path: String,
}

impl LoginRequest {
    /// Build a request, defaulting the return path to the home route.
    #[must_use]
    pub fn new(credentials: LoginCredentials, prev_path: Option<String>) -> Self {
        Self {
            credentials,
            prev_path: prev_path.unwrap_or_else(|| routes::HOME.to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("not-an-email", "abcdef", 1)]
    #[case("a@b.com", "abcde", 1)]
    #[case("", "", 2)]
    fn invalid_forms_are_rejected(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected_messages: usize,
    ) {
        let err = LoginCredentials::try_from_form(&LoginForm::new(email, password))
            .expect_err("invalid inputs must fail");
        assert_eq!(err.report().len(), expected_messages);
    }

    #[test]
    fn debug_output_hides_password() {
        let form = LoginForm::new("a@b.com", "hunter22");
        let creds = LoginCredentials::try_from_form(&form).expect("valid credentials");
        assert!(!format!("{form:?}").contains("hunter22"));
        assert!(!format!("{creds:?}").contains("hunter22"));
    }

    #[test]
    fn request_defaults_prev_path_to_home() {
        let creds = LoginCredentials::try_from_form(&LoginForm::new("a@b.com", "abcdef"))
            .expect("valid credentials");
        let request = LoginRequest::new(creds, None);
        assert_eq!(request.prev_path, "/");
    }
}
