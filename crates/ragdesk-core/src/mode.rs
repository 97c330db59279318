//! Assistant modes and knowledge base datasets
//!
//! Both are closed enumerations. Each assistant mode carries its prompt,
//! sampling parameters and dataset as constant data, so a retrieval scoped to
//! a mode can never address the other mode's dataset.

use crate::llm::SamplingParams;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const SUCCESS_MANAGER_PROMPT: &str = "You are an AI Business Success Manager providing expert advice on business success strategies.
Your role is to:
- Analyze business situations and provide strategic insights
- Offer actionable recommendations based on industry best practices
- Help optimize operations and improve efficiency
- Guide decision-making with data-driven insights
- Maintain a professional, strategic perspective";

const PERSONA_PROMPT: &str = "You are an AI simulation of a perfect customer avatar from the user's target market.
Your role is to:
- Think and respond exactly as a real customer would
- Share authentic perspectives on products and services
- Express genuine customer needs, desires, and pain points
- Provide feedback that reflects real market sentiment
- Maintain a natural, conversational tone";

/// Logical partition of the remote knowledge base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dataset {
    /// General business knowledge
    #[serde(rename = "default_dataset")]
    Default,
    /// Customer-persona knowledge
    #[serde(rename = "persona_ai")]
    Persona,
}

impl Dataset {
    /// Identifier understood by the RAG service
    pub const fn id(self) -> &'static str {
        match self {
            Self::Default => "default_dataset",
            Self::Persona => "persona_ai",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Kind of document chosen when adding to the knowledge base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    #[default]
    General,
    Persona,
}

impl DocumentKind {
    pub const fn dataset(self) -> Dataset {
        match self {
            Self::General => Dataset::Default,
            Self::Persona => Dataset::Persona,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Persona => "persona",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" => Ok(Self::General),
            "persona" => Ok(Self::Persona),
            other => Err(format!(
                "unknown document kind '{}' (expected 'general' or 'persona')",
                other
            )),
        }
    }
}

/// Assistant persona selected at the start of a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssistantMode {
    #[default]
    SuccessManager,
    Persona,
}

impl AssistantMode {
    pub const ALL: [AssistantMode; 2] = [Self::SuccessManager, Self::Persona];

    /// Dataset searched for context in this mode
    pub const fn dataset(self) -> Dataset {
        match self {
            Self::SuccessManager => Dataset::Default,
            Self::Persona => Dataset::Persona,
        }
    }

    pub const fn system_prompt(self) -> &'static str {
        match self {
            Self::SuccessManager => SUCCESS_MANAGER_PROMPT,
            Self::Persona => PERSONA_PROMPT,
        }
    }

    /// Sampling parameters for completions in this mode
    pub const fn sampling(self) -> SamplingParams {
        let temperature = match self {
            Self::SuccessManager => 0.7,
            Self::Persona => 0.9,
        };
        SamplingParams {
            temperature,
            max_tokens: 1000,
            presence_penalty: 0.6,
            frequency_penalty: 0.3,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::SuccessManager => "Success Manager",
            Self::Persona => "Advanced AI Persona",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::SuccessManager => "Strategic business advice and insights",
            Self::Persona => "Simulated customer interactions",
        }
    }

    /// Greeting that opens every conversation in this mode
    pub const fn welcome_message(self) -> &'static str {
        match self {
            Self::SuccessManager => "Hello! I'm your AI Business Success Manager. I can help you optimize your business strategy and operations using insights from your knowledge base. How can I assist you today?",
            Self::Persona => "Hi! I'm your AI Customer Persona. I'll help you understand your target market better by responding as your ideal customer would. What would you like to discuss?",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::SuccessManager => "success_manager",
            Self::Persona => "persona",
        }
    }
}

impl fmt::Display for AssistantMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AssistantMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "success_manager" | "manager" => Ok(Self::SuccessManager),
            "persona" => Ok(Self::Persona),
            other => Err(format!(
                "unknown assistant mode '{}' (expected 'success-manager' or 'persona')",
                other
            )),
        }
    }
}
