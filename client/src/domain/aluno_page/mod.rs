//! Aluno create/edit workflow.
//!
//! [`AlunoPage`] owns the form state for one page instance and coordinates the
//! two remote interactions: hydrating the form in edit mode and submitting it.
//!
//! Both operations take `&mut self`, so a page instance can have at most one
//! request in flight. Dropping a pending future drops its response with it;
//! nothing can write a stale response into the form afterwards.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::aluno::{AlunoField, AlunoForm, AlunoId, AlunoPayload, AlunoRecord};
use super::error::{SubmitOutcome, WorkflowError};
use super::ports::{AlunoGateway, AlunoGatewayError, PagePorts};
use super::routes;
use super::validation::validate_aluno;

pub(crate) const CREATED_MESSAGE: &str = "Aluno(a) criado(a) com sucesso!";
pub(crate) const UPDATED_MESSAGE: &str = "Aluno(a) editado(a) com sucesso!";
pub(crate) const UNKNOWN_ERROR_MESSAGE: &str = "Erro desconhecido.";

/// Status for which load failures surface the server's messages.
const LOAD_MESSAGES_STATUS: u16 = 400;

/// Result of [`AlunoPage::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Create mode; nothing to fetch.
    Skipped,
    /// The current identifier was already fetched.
    AlreadyLoaded,
    /// The form now holds the fetched record.
    Loaded,
    /// The fetch failed and the user was sent home.
    Failed(WorkflowError),
}

/// Aluno page state plus its submission coordinator.
pub struct AlunoPage {
    gateway: Arc<dyn AlunoGateway>,
    ports: PagePorts,
    form: AlunoForm,
    foto_url: Option<String>,
    loading: watch::Sender<bool>,
    loaded_for: Option<AlunoId>,
}

impl AlunoPage {
    /// Page for `id`, or a blank create page when `id` is `None`.
    #[must_use]
    pub fn new(gateway: Arc<dyn AlunoGateway>, ports: PagePorts, id: Option<AlunoId>) -> Self {
        let (loading, _) = watch::channel(false);
        Self {
            gateway,
            ports,
            form: AlunoForm::for_id(id),
            foto_url: None,
            loading,
            loaded_for: None,
        }
    }

    /// Identifier of the record being edited.
    #[must_use]
    pub const fn id(&self) -> Option<AlunoId> {
        self.form.id
    }

    /// Heading shown above the form.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        if self.form.id.is_some() {
            "Editar aluno"
        } else {
            "Novo Aluno"
        }
    }

    /// Current form values.
    #[must_use]
    pub const fn form(&self) -> &AlunoForm {
        &self.form
    }

    /// First photo URL of the fetched record.
    #[must_use]
    pub fn foto_url(&self) -> Option<&str> {
        self.foto_url.as_deref()
    }

    /// Apply one user edit.
    pub fn set_field(&mut self, field: AlunoField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Rebind the page to another route identifier.
    ///
    /// A different identifier makes the next [`AlunoPage::load`] fetch again;
    /// the same identifier is a no-op.
    pub fn set_id(&mut self, id: Option<AlunoId>) {
        self.form.id = id;
    }

    /// Whether a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Watch the loading flag, e.g. to drive a spinner.
    #[must_use]
    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    /// Fetch the record for the current identifier and populate the form.
    ///
    /// Runs once per distinct identifier. On failure the server's messages
    /// are shown for status 400 and the user is always sent to the home route.
    pub async fn load(&mut self) -> LoadOutcome {
        let Some(id) = self.form.id else {
            return LoadOutcome::Skipped;
        };
        if self.loaded_for == Some(id) {
            return LoadOutcome::AlreadyLoaded;
        }
        self.loaded_for = Some(id);

        debug!(aluno_id = %id, "fetching aluno");
        self.set_loading(true);
        let result = self.gateway.fetch(&id).await;
        self.set_loading(false);

        match result {
            Ok(record) => {
                self.form.hydrate(&record);
                self.foto_url = record.foto_url;
                LoadOutcome::Loaded
            }
            Err(error) => {
                warn!(aluno_id = %id, error = %error, "aluno fetch failed");
                if error.status() == Some(LOAD_MESSAGES_STATUS) {
                    for message in error.messages() {
                        self.ports.notifier.error(message);
                    }
                }
                self.ports.navigator.push(routes::HOME);
                LoadOutcome::Failed(WorkflowError::from(error))
            }
        }
    }

    /// Validate the form and create or update the record.
    ///
    /// Validation failures are shown one message each and stop before any
    /// request. Create mode keeps the typed values after success; edit mode
    /// navigates to the edit route of the returned identifier.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let report = validate_aluno(&self.form);
        if let Err(error) = report.into_result() {
            for message in error.report().messages() {
                self.ports.notifier.error(message);
            }
            debug!(error_count = error.report().len(), "aluno form rejected");
            return SubmitOutcome::Failed(error.into());
        }

        let payload = AlunoPayload::from(&self.form);
        self.set_loading(true);
        let result = match self.form.id {
            Some(id) => self.gateway.update(&id, &payload).await,
            None => self.gateway.create(&payload).await,
        };
        self.set_loading(false);

        match (self.form.id, result) {
            (Some(id), Ok(record)) => self.finish_update(id, record),
            (None, Ok(record)) => {
                info!(aluno_id = ?record.id, "aluno created");
                self.ports.notifier.success(CREATED_MESSAGE);
                SubmitOutcome::Created(record)
            }
            (_, Err(error)) => SubmitOutcome::Failed(self.report_submit_failure(error)),
        }
    }

    fn finish_update(&self, requested: AlunoId, record: AlunoRecord) -> SubmitOutcome {
        let id = record.id.unwrap_or(requested);
        info!(aluno_id = %id, "aluno updated");
        self.ports.notifier.success(UPDATED_MESSAGE);
        self.ports.navigator.push(&routes::aluno_edit(id));
        SubmitOutcome::Updated(record)
    }

    fn report_submit_failure(&self, error: AlunoGatewayError) -> WorkflowError {
        warn!(
            status = ?error.status(),
            error_count = error.messages().len(),
            error = %error,
            "aluno submission failed"
        );
        let classified = WorkflowError::from(error);
        let messages: &[String] = match &classified {
            WorkflowError::Transport(source) | WorkflowError::Unauthorized(source) => {
                source.messages()
            }
            WorkflowError::Validation(_) => &[],
        };

        if messages.is_empty() {
            self.ports.notifier.error(UNKNOWN_ERROR_MESSAGE);
            if matches!(classified, WorkflowError::Unauthorized(_)) {
                self.ports.session.invalidate();
            }
        } else {
            for message in messages {
                self.ports.notifier.error(message);
            }
        }
        classified
    }

    fn set_loading(&self, value: bool) {
        self.loading.send_replace(value);
    }
}
