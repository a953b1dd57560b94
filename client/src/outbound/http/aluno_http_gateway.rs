//! Reqwest-backed aluno API adapter.
//!
//! This adapter owns transport details only: URL construction, bearer token
//! and timeout handling, HTTP error mapping, and JSON decoding into domain
//! records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use url::Url;
use tracing::debug;

use super::dto::{AlunoDto, ErrorEnvelopeDto};
use crate::domain::ports::{AlunoGateway, AlunoGatewayError};
use crate::domain::{AlunoId, AlunoPayload, AlunoRecord};

const DEFAULT_USER_AGENT: &str = "escola-client/0.1";
const ALUNOS_PATH: &str = "alunos/";

/// Aluno gateway that talks JSON over HTTP to one API base URL.
pub struct AlunoHttpGateway {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl AlunoHttpGateway {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    /// ```rust,ignore
    /// let gateway = AlunoHttpGateway::new(base_url, Duration::from_secs(10))?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: with_trailing_slash(base_url),
            token: None,
        })
    }

    /// Send `Authorization: Bearer <token>` with every request.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn collection_url(&self) -> Result<Url, AlunoGatewayError> {
        self.endpoint(ALUNOS_PATH)
    }

    fn record_url(&self, id: AlunoId) -> Result<Url, AlunoGatewayError> {
        self.endpoint(&format!("{ALUNOS_PATH}{id}"))
    }

    fn endpoint(&self, path: &str) -> Result<Url, AlunoGatewayError> {
        self.base_url.join(path).map_err(|error| {
            AlunoGatewayError::transport(format!("invalid aluno API URL for {path}: {error}"))
        })
    }

    async fn send(&self, mut request: RequestBuilder) -> Result<AlunoRecord, AlunoGatewayError> {
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(status = status.as_u16(), bytes = body.len(), "aluno API responded");
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_record(body.as_ref())
    }
}

#[async_trait]
impl AlunoGateway for AlunoHttpGateway {
    async fn fetch(&self, id: &AlunoId) -> Result<AlunoRecord, AlunoGatewayError> {
        let url = self.record_url(*id)?;
        self.send(self.client.get(url)).await
    }

    async fn create(&self, payload: &AlunoPayload) -> Result<AlunoRecord, AlunoGatewayError> {
        let url = self.collection_url()?;
        self.send(self.client.post(url).json(payload)).await
    }

    async fn update(
        &self,
        id: &AlunoId,
        payload: &AlunoPayload,
    ) -> Result<AlunoRecord, AlunoGatewayError> {
        let url = self.record_url(*id)?;
        self.send(self.client.put(url).json(payload)).await
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn parse_record(body: &[u8]) -> Result<AlunoRecord, AlunoGatewayError> {
    let decoded: AlunoDto = serde_json::from_slice(body).map_err(|error| {
        AlunoGatewayError::decode(format!("invalid aluno JSON payload: {error}"))
    })?;
    Ok(decoded.into_domain())
}

fn map_transport_error(error: reqwest::Error) -> AlunoGatewayError {
    if error.is_timeout() {
        AlunoGatewayError::transport(format!("request timed out: {error}"))
    } else {
        AlunoGatewayError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> AlunoGatewayError {
    let messages = ErrorEnvelopeDto::from_body(body).into_messages();
    AlunoGatewayError::rejected(status.as_u16(), messages)
}
