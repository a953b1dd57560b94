//! Login workflow.
//!
//! The page never calls the API itself: once the form passes validation it
//! hands a [`LoginRequest`] to the session store, which owns the request and
//! the loading flag shown on this page.

use tracing::{debug, info};

use super::auth::{LoginCredentials, LoginField, LoginForm, LoginRequest};
use super::error::SubmitOutcome;
use super::ports::PagePorts;

/// Login page state plus its submission coordinator.
pub struct LoginPage {
    ports: PagePorts,
    form: LoginForm,
    prev_path: Option<String>,
}

impl LoginPage {
    /// Page that returns to `prev_path` (home when `None`) after login.
    #[must_use]
    pub fn new(ports: PagePorts, prev_path: Option<String>) -> Self {
        Self {
            ports,
            form: LoginForm::default(),
            prev_path,
        }
    }

    /// Heading shown above the form.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        "Login"
    }

    /// Current form values.
    #[must_use]
    pub const fn form(&self) -> &LoginForm {
        &self.form
    }

    /// Apply one user edit.
    pub fn set_field(&mut self, field: LoginField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Whether the session store is processing a login.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.ports.session.is_loading()
    }

    /// Validate the form and dispatch a login intent.
    pub fn submit(&mut self) -> SubmitOutcome {
        match LoginCredentials::try_from_form(&self.form) {
            Ok(credentials) => {
                let request = LoginRequest::new(credentials, self.prev_path.clone());
                info!(prev_path = %request.prev_path, "login requested");
                self.ports.session.request_login(request);
                SubmitOutcome::LoginRequested
            }
            Err(error) => {
                for message in error.report().messages() {
                    self.ports.notifier.error(message);
                }
                debug!(error_count = error.report().len(), "login form rejected");
                SubmitOutcome::Failed(error.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use std::sync::Arc;

    use super::*;
    use crate::domain::WorkflowError;
    use crate::domain::ports::{MockNavigator, MockNotifier, MockSessionStore};
    use crate::domain::validation::{LOGIN_EMAIL_INVALID, LOGIN_PASSWORD_INVALID};
    use rstest::rstest;

    fn page(session: MockSessionStore, notifier: MockNotifier, prev_path: Option<&str>) -> LoginPage {
        let mut navigator = MockNavigator::new();
        navigator.expect_push().times(0);
        let ports = PagePorts {
            session: Arc::new(session),
            notifier: Arc::new(notifier),
            navigator: Arc::new(navigator),
        };
        LoginPage::new(ports, prev_path.map(str::to_owned))
    }

    #[rstest]
    #[case(None, "/")]
    #[case(Some("/aluno/5/edit"), "/aluno/5/edit")]
    fn valid_form_dispatches_login_request(
        #[case] prev_path: Option<&str>,
        #[case] expected_path: &'static str,
    ) {
        let mut session = MockSessionStore::new();
        session
            .expect_request_login()
            .withf(move |request: &LoginRequest| {
                request.credentials.email() == "a@b.com"
                    && request.credentials.password() == "abcdef"
                    && request.prev_path == expected_path
            })
            .times(1)
            .return_const(());
        let mut notifier = MockNotifier::new();
        notifier.expect_error().times(0);
        let mut page = page(session, notifier, prev_path);
        page.set_field(LoginField::Email, "a@b.com");
        page.set_field(LoginField::Password, "abcdef");

        assert_eq!(page.submit(), SubmitOutcome::LoginRequested);
    }

    #[rstest]
    #[case("not-an-email", "abcdef", &[LOGIN_EMAIL_INVALID])]
    #[case("a@b.com", "abcde", &[LOGIN_PASSWORD_INVALID])]
    #[case("", "", &[LOGIN_EMAIL_INVALID, LOGIN_PASSWORD_INVALID])]
    fn invalid_form_notifies_and_skips_dispatch(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: &'static [&'static str],
    ) {
        let mut session = MockSessionStore::new();
        session.expect_request_login().times(0);
        let mut notifier = MockNotifier::new();
        let mut sequence = mockall::Sequence::new();
        for message in expected {
            notifier
                .expect_error()
                .withf(move |shown: &str| shown == *message)
                .times(1)
                .in_sequence(&mut sequence)
                .return_const(());
        }
        let mut page = page(session, notifier, None);
        page.set_field(LoginField::Email, email);
        page.set_field(LoginField::Password, password);

        let outcome = page.submit();

        assert!(matches!(
            outcome,
            SubmitOutcome::Failed(WorkflowError::Validation(_))
        ));
    }

    #[test]
    fn loading_flag_comes_from_session_store() {
        let mut session = MockSessionStore::new();
        session.expect_is_loading().times(1).return_const(true);
        let page = page(session, MockNotifier::new(), None);
        assert!(page.is_loading());
        assert_eq!(page.title(), "Login");
    }
}
