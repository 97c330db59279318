//! Output formatters

pub mod json;
pub mod terminal;

use crate::app::OutputFormat;
use ragdesk_core::{AssistantMode, IngestOutcome, RetrievedFragment};

/// Format retrieved fragments
pub fn format_fragments(
    fragments: &[RetrievedFragment],
    mode: AssistantMode,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Json => json::format_fragments(fragments, mode),
        OutputFormat::Cli => terminal::format_fragments(fragments),
    }
}

/// Format the result of an ingestion
pub fn format_ingest_outcome(url: &str, outcome: &IngestOutcome, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_ingest_outcome(url, outcome),
        OutputFormat::Cli => terminal::format_ingest_outcome(url, outcome),
    }
}
