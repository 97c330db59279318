//! Document ingestion into the remote RAG service

use crate::config::RagServiceConfig;
use crate::error::{RagDeskError, Result};
use crate::mode::{Dataset, DocumentKind};
use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

pub const CONNECTION_FAILED_MESSAGE: &str =
    "Cannot connect to the server. Please check your internet connection and try again.";
pub const ACCESS_DENIED_MESSAGE: &str = "Access denied. Please check your credentials.";
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Document size exceeds the maximum limit.";
pub const INGEST_FALLBACK_MESSAGE: &str = "Failed to process document. Please try again.";
pub const INGEST_SUCCESS_MESSAGE: &str = "Document successfully ingested";

/// Submits document references to a knowledge base dataset
#[async_trait]
pub trait Ingestor: Send + Sync {
    /// Ingest one document. Failures are reported in the outcome, never as `Err`.
    async fn ingest(&self, reference: &str, kind: DocumentKind) -> IngestOutcome;
}

/// Result of a single ingestion request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IngestOutcome {
    Ingested(IngestReceipt),
    Failed(IngestFailure),
}

impl IngestOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Ingested(_))
    }

    /// User-facing message for either outcome
    pub fn message(&self) -> &str {
        match self {
            Self::Ingested(receipt) => &receipt.message,
            Self::Failed(failure) => &failure.message,
        }
    }
}

/// Successful ingestion as acknowledged by the service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestReceipt {
    pub message: String,
    pub document_id: Option<String>,
    pub ingested_files: Option<u64>,
    pub dataset: Dataset,
}

/// Failed ingestion with its user-facing message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestFailure {
    pub kind: IngestFailureKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IngestFailureKind {
    /// No connection to the service
    Connection,
    /// HTTP 403
    AccessDenied,
    /// HTTP 413
    PayloadTooLarge,
    /// Any other non-success status, timeout, or malformed reply
    Upstream,
}

impl IngestFailure {
    fn new(kind: IngestFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
struct IngestRequest<'a> {
    files: [&'a str; 1],
    #[serde(rename = "datasetId")]
    dataset_id: Dataset,
}

/// Ingestor backed by the RAG service's `/ingest` endpoint
pub struct HttpIngestor {
    client: Client,
    base_url: String,
}

impl HttpIngestor {
    pub fn new(config: &RagServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("ragdesk/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.ingest_timeout_secs))
            .build()
            .map_err(RagDeskError::Http)?;
        Ok(Self::with_client(client, &config.url))
    }

    /// Create an ingestor with custom client
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn submit(&self, reference: &str, dataset: Dataset) -> IngestOutcome {
        let request = IngestRequest {
            files: [reference],
            dataset_id: dataset,
        };
        let url = format!("{}/ingest", self.base_url);

        tracing::debug!("Ingesting {} into {}", reference, dataset);

        let response = match self
            .client
            .post(&url)
            .header(header::ACCEPT, "application/json")
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return IngestOutcome::Failed(transport_failure(&e)),
        };

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            tracing::error!("Ingestion rejected (HTTP {}): {}", status.as_u16(), body);
            return IngestOutcome::Failed(status_failure(status, &body));
        }

        match serde_json::from_str::<Value>(&body) {
            Ok(value) if value.is_object() => {
                IngestOutcome::Ingested(receipt_from_response(&value, dataset))
            }
            _ => {
                tracing::error!("Malformed ingestion response: {}", body);
                IngestOutcome::Failed(IngestFailure::new(
                    IngestFailureKind::Upstream,
                    INGEST_FALLBACK_MESSAGE,
                ))
            }
        }
    }
}

#[async_trait]
impl Ingestor for HttpIngestor {
    async fn ingest(&self, reference: &str, kind: DocumentKind) -> IngestOutcome {
        self.submit(reference, kind.dataset()).await
    }
}

fn transport_failure(error: &reqwest::Error) -> IngestFailure {
    tracing::error!("Ingestion request failed: {}", error);
    if error.is_timeout() {
        IngestFailure::new(IngestFailureKind::Upstream, INGEST_FALLBACK_MESSAGE)
    } else {
        IngestFailure::new(IngestFailureKind::Connection, CONNECTION_FAILED_MESSAGE)
    }
}

fn status_failure(status: StatusCode, body: &str) -> IngestFailure {
    match status {
        StatusCode::FORBIDDEN => {
            IngestFailure::new(IngestFailureKind::AccessDenied, ACCESS_DENIED_MESSAGE)
        }
        StatusCode::PAYLOAD_TOO_LARGE => {
            IngestFailure::new(IngestFailureKind::PayloadTooLarge, PAYLOAD_TOO_LARGE_MESSAGE)
        }
        _ => IngestFailure::new(
            IngestFailureKind::Upstream,
            server_message(body).unwrap_or_else(|| INGEST_FALLBACK_MESSAGE.to_string()),
        ),
    }
}

/// Build a receipt from a 2xx reply, accepting numbers or strings for ids and counts
fn receipt_from_response(value: &Value, dataset: Dataset) -> IngestReceipt {
    IngestReceipt {
        message: non_empty_message(value)
            .unwrap_or_else(|| INGEST_SUCCESS_MESSAGE.to_string()),
        document_id: value.get("documentId").and_then(scalar_to_string),
        ingested_files: value.get("ingestedFiles").and_then(scalar_to_count),
        dataset,
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn scalar_to_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn non_empty_message(value: &Value) -> Option<String> {
    value
        .get("message")?
        .as_str()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// Extract a non-empty `message` string from a JSON error body
fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    non_empty_message(&value)
}
