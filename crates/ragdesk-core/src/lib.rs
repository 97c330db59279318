//! Ragdesk Core Library
//!
//! Client-side pipeline for a retrieval-augmented business assistant.
//!
//! # Features
//! - Document reference validation and ingestion into a remote RAG service
//! - Fragment retrieval scoped to a fixed dataset per assistant mode
//! - Context formatting and prompt composition for chat completions
//! - OpenAI-compatible chat completion client with per-mode sampling
//! - Transient chat and knowledge base session state

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod mode;
pub mod rag;
pub mod session;

pub use chat::{ChatOrchestrator, ConversationTurn, TurnRole, NO_RESPONSE_FALLBACK};
pub use config::{Config, LLMServiceConfig, RagServiceConfig};
pub use error::{Error, RagDeskError, Result};
pub use llm::{ChatMessage, HttpLLMClient, LLMClient, Role, SamplingParams};
pub use mode::{AssistantMode, Dataset, DocumentKind};
pub use rag::{
    file_name_from_url, format_retrieved_content, is_valid_document_url, HttpIngestor,
    HttpRetriever, IngestFailure, IngestFailureKind, IngestOutcome, IngestReceipt, Ingestor,
    RetrievedFragment, Retriever,
};
pub use session::{ChatSession, Document, KnowledgeBase};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "ragdesk";

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "RAGDESK_CONFIG";
