//! Chat turn orchestration: retrieval, prompt composition, completion

use super::ConversationTurn;
use crate::error::{RagDeskError, Result};
use crate::llm::{ChatMessage, LLMClient};
use crate::mode::AssistantMode;
use crate::rag::{format_retrieved_content, Retriever};
use std::sync::Arc;

/// Introduces the retrieved context inside the system message
pub const CONTEXT_PREAMBLE: &str =
    "Use the following retrieved information to enhance your response:";

/// Reply used when the model answers without text content
pub const NO_RESPONSE_FALLBACK: &str =
    "I apologize, but I couldn't generate a response. Please try again.";

pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate response. Please try again.";

/// Produces assistant replies grounded in knowledge base context
pub struct ChatOrchestrator {
    retriever: Arc<dyn Retriever>,
    llm: Arc<dyn LLMClient>,
}

impl ChatOrchestrator {
    pub fn new(retriever: Arc<dyn Retriever>, llm: Arc<dyn LLMClient>) -> Self {
        Self { retriever, llm }
    }

    /// Generate the assistant reply to the last turn of `transcript`.
    ///
    /// A retrieval failure degrades the turn to an un-augmented prompt; only a
    /// completion failure is returned as an error.
    pub async fn respond(
        &self,
        transcript: &[ConversationTurn],
        mode: AssistantMode,
    ) -> Result<String> {
        let context = match transcript.last().filter(|turn| turn.is_user()) {
            Some(turn) => self.retrieve_context(&turn.content, mode).await,
            None => String::new(),
        };

        let messages = build_messages(transcript, mode, &context);

        match self.llm.chat_completion(messages, mode.sampling()).await {
            Ok(Some(content)) => Ok(content),
            Ok(None) => Ok(NO_RESPONSE_FALLBACK.to_string()),
            Err(e) => {
                tracing::error!("Completion failed ({}): {}", self.llm.model_name(), e);
                Err(RagDeskError::Generation(GENERATION_FAILED_MESSAGE.to_string()))
            }
        }
    }

    async fn retrieve_context(&self, query: &str, mode: AssistantMode) -> String {
        match self.retriever.retrieve(query, mode).await {
            Ok(fragments) => format_retrieved_content(&fragments),
            Err(e) => {
                // Knowledge base outages fall back to an un-augmented reply.
                tracing::warn!("Retrieval failed, continuing without context: {}", e);
                String::new()
            }
        }
    }
}

/// System message for `mode` followed by the transcript, unmodified
fn build_messages(
    transcript: &[ConversationTurn],
    mode: AssistantMode,
    context: &str,
) -> Vec<ChatMessage> {
    let system = if context.is_empty() {
        mode.system_prompt().to_string()
    } else {
        format!("{}\n\n{}\n{}", mode.system_prompt(), CONTEXT_PREAMBLE, context)
    };

    let mut messages = Vec::with_capacity(transcript.len() + 1);
    messages.push(ChatMessage::system(system));
    messages.extend(transcript.iter().map(ChatMessage::from));
    messages
}
