//! HTTP client for OpenAI-compatible chat completion services

use crate::config::LLMServiceConfig;
use crate::error::{RagDeskError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Trait for LLM service clients
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Generate a chat completion.
    ///
    /// Returns `Ok(None)` when the service answered but the first choice
    /// carries no text content.
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        params: SamplingParams,
    ) -> Result<Option<String>>;

    /// Get model name
    fn model_name(&self) -> &str;
}

/// Speaker of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Chat message for completion requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Sampling parameters sent with a completion request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplingParams {
    pub temperature: f32,
    pub max_tokens: u32,
    pub presence_penalty: f32,
    pub frequency_penalty: f32,
}

/// OpenAI-compatible completion client
pub struct HttpLLMClient {
    http_client: reqwest::Client,
    config: LLMServiceConfig,
}

impl HttpLLMClient {
    /// Create new client from configuration
    pub fn new(config: LLMServiceConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("ragdesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(RagDeskError::Http)?;

        Ok(Self {
            http_client,
            config,
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.config.url.trim_end_matches('/'))
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(flatten)]
    params: SamplingParams,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl LLMClient for HttpLLMClient {
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        params: SamplingParams,
    ) -> Result<Option<String>> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: &messages,
            params,
        };

        tracing::debug!(
            "Requesting completion from {} ({} messages, temperature {})",
            self.config.model,
            messages.len(),
            params.temperature
        );

        let mut req = self.http_client.post(self.completions_url()).json(&request);

        if let Some(ref api_key) = self.config.api_key {
            req = req.bearer_auth(api_key);
        }

        let response = req.send().await.map_err(RagDeskError::Http)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RagDeskError::ExternalError(format!(
                "LLM service error (HTTP {}): {}",
                status, body
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(RagDeskError::Http)?;

        let choice = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| RagDeskError::Llm("No response from LLM".to_string()))?;

        Ok(choice.message.content)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
