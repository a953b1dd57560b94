//! Shared doubles for workflow integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use escola_client::domain::ports::{AlunoGateway, AlunoGatewayError, Notifier, PagePorts};
use escola_client::domain::{AlunoId, AlunoPayload, AlunoRecord};
use escola_client::outbound::{HistoryNavigator, InMemorySessionStore};

/// Gateway call as seen by the double.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    Fetch(AlunoId),
    Create(AlunoPayload),
    Update(AlunoId, AlunoPayload),
}

/// Gateway that records calls and replays one configured response.
pub struct ScriptedGateway {
    calls: Mutex<Vec<GatewayCall>>,
    response: Result<AlunoRecord, AlunoGatewayError>,
}

impl ScriptedGateway {
    pub fn new(response: Result<AlunoRecord, AlunoGatewayError>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            response,
        }
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn record(&self, call: GatewayCall) -> Result<AlunoRecord, AlunoGatewayError> {
        self.calls.lock().expect("calls lock").push(call);
        self.response.clone()
    }
}

#[async_trait]
impl AlunoGateway for ScriptedGateway {
    async fn fetch(&self, id: &AlunoId) -> Result<AlunoRecord, AlunoGatewayError> {
        self.record(GatewayCall::Fetch(*id))
    }

    async fn create(&self, payload: &AlunoPayload) -> Result<AlunoRecord, AlunoGatewayError> {
        self.record(GatewayCall::Create(payload.clone()))
    }

    async fn update(
        &self,
        id: &AlunoId,
        payload: &AlunoPayload,
    ) -> Result<AlunoRecord, AlunoGatewayError> {
        self.record(GatewayCall::Update(*id, payload.clone()))
    }
}

/// Notification as seen by the double.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toast {
    Success(String),
    Error(String),
}

/// Notifier that keeps every toast.
#[derive(Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().expect("toasts lock").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.toasts
            .lock()
            .expect("toasts lock")
            .push(Toast::Success(message.to_owned()));
    }

    fn error(&self, message: &str) {
        self.toasts
            .lock()
            .expect("toasts lock")
            .push(Toast::Error(message.to_owned()));
    }
}

/// Real in-memory adapters plus a recording notifier.
pub struct Collaborators {
    pub session: Arc<InMemorySessionStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub history: Arc<HistoryNavigator>,
}

impl Collaborators {
    pub fn new() -> Self {
        Self {
            session: Arc::new(InMemorySessionStore::new()),
            notifier: Arc::new(RecordingNotifier::default()),
            history: Arc::new(HistoryNavigator::new()),
        }
    }

    pub fn ports(&self) -> PagePorts {
        PagePorts {
            session: self.session.clone(),
            notifier: self.notifier.clone(),
            navigator: self.history.clone(),
        }
    }

    /// Routes pushed after the initial home entry.
    pub fn navigations(&self) -> Vec<String> {
        self.history.entries().into_iter().skip(1).collect()
    }
}
