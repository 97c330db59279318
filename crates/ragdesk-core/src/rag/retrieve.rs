//! Fragment retrieval from the remote RAG service

use crate::config::RagServiceConfig;
use crate::error::{RagDeskError, Result};
use crate::mode::{AssistantMode, Dataset};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Text chunk returned by the retrieval service, in relevance order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievedFragment {
    pub chunk: String,
}

/// Source of knowledge base context for chat turns
#[async_trait]
pub trait Retriever: Send + Sync {
    /// Fetch fragments relevant to `query` from the dataset bound to `mode`
    async fn retrieve(&self, query: &str, mode: AssistantMode) -> Result<Vec<RetrievedFragment>>;
}

/// Retriever backed by the RAG service's `/retrieve` endpoint
pub struct HttpRetriever {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct RetrieveRequest<'a> {
    prompt: &'a str,
    #[serde(rename = "datasetId")]
    dataset_id: Dataset,
}

#[derive(Deserialize)]
struct RetrieveResponse {
    // Absent or null results mean "nothing found", not a malformed reply.
    #[serde(default)]
    results: Option<Vec<RetrievedFragment>>,
}

impl HttpRetriever {
    pub fn new(config: &RagServiceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("ragdesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(RagDeskError::Http)?;
        Ok(Self::with_client(client, &config.url))
    }

    /// Create a retriever with custom client
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Retriever for HttpRetriever {
    async fn retrieve(&self, query: &str, mode: AssistantMode) -> Result<Vec<RetrievedFragment>> {
        let request = RetrieveRequest {
            prompt: query,
            dataset_id: mode.dataset(),
        };
        let url = format!("{}/retrieve", self.base_url);

        tracing::debug!("Retrieving context from {} ({})", url, request.dataset_id);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| RagDeskError::Retrieval(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RagDeskError::Retrieval(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body
            )));
        }

        let parsed: RetrieveResponse = response
            .json()
            .await
            .map_err(|e| RagDeskError::Retrieval(format!("malformed response: {}", e)))?;

        let fragments = parsed.results.unwrap_or_default();
        tracing::debug!("Retrieved {} fragments", fragments.len());
        Ok(fragments)
    }
}
