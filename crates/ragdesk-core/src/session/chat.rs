//! Chat session: selected mode plus its transcript

use crate::chat::{ChatOrchestrator, ConversationTurn};
use crate::error::{RagDeskError, Result};
use crate::mode::AssistantMode;

/// Conversation state owned by the chat front end
#[derive(Debug, Default)]
pub struct ChatSession {
    mode: Option<AssistantMode>,
    transcript: Vec<ConversationTurn>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session already in `mode`
    pub fn with_mode(mode: AssistantMode) -> Self {
        let mut session = Self::new();
        session.select_mode(mode);
        session
    }

    pub fn mode(&self) -> Option<AssistantMode> {
        self.mode
    }

    pub fn transcript(&self) -> &[ConversationTurn] {
        &self.transcript
    }

    /// Switch mode; the transcript restarts from the mode's welcome message
    pub fn select_mode(&mut self, mode: AssistantMode) {
        self.mode = Some(mode);
        self.transcript.clear();
        self.transcript
            .push(ConversationTurn::assistant(mode.welcome_message()));
    }

    /// Drop the mode and the transcript
    pub fn reset(&mut self) {
        self.mode = None;
        self.transcript.clear();
    }

    /// Send a user message and append the assistant's reply.
    ///
    /// The user turn stays in the transcript even when generation fails.
    pub async fn send(&mut self, orchestrator: &ChatOrchestrator, text: &str) -> Result<&str> {
        let text = text.trim();
        if text.is_empty() {
            return Err(RagDeskError::InvalidInput("Message is empty".to_string()));
        }
        let mode = self.mode.ok_or_else(|| {
            RagDeskError::InvalidInput("Select an assistant mode first".to_string())
        })?;

        self.transcript.push(ConversationTurn::user(text));
        let reply = orchestrator.respond(&self.transcript, mode).await?;
        self.transcript.push(ConversationTurn::assistant(reply));

        Ok(self
            .transcript
            .last()
            .map(|turn| turn.content.as_str())
            .unwrap_or_default())
    }
}
