//! Configuration management

use crate::error::{RagDeskError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// RAG service configuration (ingestion and retrieval)
    #[serde(default)]
    pub rag_service: RagServiceConfig,

    /// LLM service configuration (chat completions)
    #[serde(default)]
    pub llm_service: LLMServiceConfig,
}

/// Remote RAG service hosting the knowledge base datasets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagServiceConfig {
    /// Base URL serving `/ingest` and `/retrieve`
    #[serde(default = "default_rag_url")]
    pub url: String,

    /// Upper bound for a single ingestion request, in seconds
    #[serde(default = "default_ingest_timeout")]
    pub ingest_timeout_secs: u64,
}

impl Default for RagServiceConfig {
    fn default() -> Self {
        Self {
            url: default_rag_url(),
            ingest_timeout_secs: default_ingest_timeout(),
        }
    }
}

/// LLM service configuration for OpenAI-compatible chat completions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMServiceConfig {
    /// Base URL of the completion service
    #[serde(default = "default_llm_url")]
    pub url: String,

    /// Model identifier sent with every completion request
    #[serde(default = "default_chat_model")]
    pub model: String,

    /// API key (sent as a bearer token when present)
    #[serde(default = "default_api_key", skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for LLMServiceConfig {
    fn default() -> Self {
        Self {
            url: default_llm_url(),
            model: default_chat_model(),
            api_key: default_api_key(),
        }
    }
}

fn default_rag_url() -> String {
    std::env::var("RAGDESK_RAG_URL").unwrap_or_else(|_| "https://ragapibg.com".to_string())
}

fn default_ingest_timeout() -> u64 {
    30
}

fn default_llm_url() -> String {
    std::env::var("RAGDESK_LLM_URL").unwrap_or_else(|_| "https://api.openai.com".to_string())
}

fn default_chat_model() -> String {
    std::env::var("RAGDESK_LLM_MODEL").unwrap_or_else(|_| "gpt-4".to_string())
}

fn default_api_key() -> Option<String> {
    std::env::var("RAGDESK_LLM_API_KEY")
        .or_else(|_| std::env::var("OPENAI_API_KEY"))
        .ok()
        .filter(|key| !key.trim().is_empty())
}

impl Config {
    /// Load config from `$RAGDESK_CONFIG` or the default path
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::resolve_path())
    }

    /// Load config from an explicit path, falling back to defaults when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Save config to the given path
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Path the config is read from: `$RAGDESK_CONFIG` if set, else the default
    pub fn resolve_path() -> PathBuf {
        std::env::var(crate::CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_path())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("rag_service.url", &self.rag_service.url),
            ("llm_service.url", &self.llm_service.url),
        ] {
            if reqwest::Url::parse(url).is_err() {
                return Err(RagDeskError::Config(format!("{} is not a valid URL: {}", name, url)));
            }
        }
        if self.rag_service.ingest_timeout_secs == 0 {
            return Err(RagDeskError::Config(
                "rag_service.ingest_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
