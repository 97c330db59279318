//! LLM integration
//!
//! OpenAI-compatible chat completion client used by the chat orchestrator.

mod client;

pub use client::{ChatMessage, HttpLLMClient, LLMClient, Role, SamplingParams};
