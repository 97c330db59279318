//! Documents submitted during the current session

use crate::error::{RagDeskError, Result};
use crate::mode::DocumentKind;
use crate::rag::ingest::INGEST_FALLBACK_MESSAGE;
use crate::rag::{file_name_from_url, is_valid_document_url, IngestOutcome, Ingestor};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const BLANK_URL_MESSAGE: &str = "Please enter a document URL";
pub const INVALID_URL_MESSAGE: &str =
    "Invalid document URL. Please provide a direct link to a PDF, DOCX, DOC, or TXT file.";

/// A document accepted by the RAG service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub url: String,
    pub kind: DocumentKind,
    pub uploaded_at: DateTime<Utc>,
}

/// Session-scoped list of ingested documents
#[derive(Debug, Default)]
pub struct KnowledgeBase {
    documents: Vec<Document>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate, ingest and record a document reference.
    ///
    /// Invalid references are rejected before any request is sent.
    pub async fn submit(
        &mut self,
        ingestor: &dyn Ingestor,
        url: &str,
        kind: DocumentKind,
    ) -> Result<&Document> {
        let url = url.trim();
        if url.is_empty() {
            return Err(RagDeskError::InvalidInput(BLANK_URL_MESSAGE.to_string()));
        }
        if !is_valid_document_url(url) {
            return Err(RagDeskError::InvalidInput(INVALID_URL_MESSAGE.to_string()));
        }

        let receipt = match ingestor.ingest(url, kind).await {
            IngestOutcome::Ingested(receipt) => receipt,
            IngestOutcome::Failed(failure) => return Err(RagDeskError::Ingest(failure.message)),
        };

        let uploaded_at = Utc::now();
        let id = receipt
            .document_id
            .unwrap_or_else(|| uploaded_at.timestamp_millis().to_string());

        tracing::debug!("Recorded document {} ({})", id, receipt.dataset);

        self.documents.push(Document {
            id,
            name: file_name_from_url(url),
            url: url.to_string(),
            kind,
            uploaded_at,
        });
        self.documents
            .last()
            .ok_or_else(|| RagDeskError::Ingest(INGEST_FALLBACK_MESSAGE.to_string()))
    }

    /// Forget a document; returns whether it was present
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.documents.len();
        self.documents.retain(|doc| doc.id != id);
        self.documents.len() != before
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
