//! CLI command handlers

pub mod ask;
pub mod chat;
pub mod config;
pub mod ingest;
pub mod retrieve;
pub mod validate;

use anyhow::Result;
use ragdesk_core::{ChatOrchestrator, Config, HttpLLMClient, HttpRetriever};
use std::sync::Arc;

/// Wire the retrieval and completion clients described by `config`
pub(crate) fn build_orchestrator(config: &Config) -> Result<ChatOrchestrator> {
    if config.llm_service.api_key.is_none() {
        tracing::warn!("No LLM API key configured (set RAGDESK_LLM_API_KEY or OPENAI_API_KEY)");
    }
    let retriever = HttpRetriever::new(&config.rag_service)?;
    let llm = HttpLLMClient::new(config.llm_service.clone())?;
    Ok(ChatOrchestrator::new(Arc::new(retriever), Arc::new(llm)))
}
