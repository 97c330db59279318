//! JSON output formatter

use ragdesk_core::{AssistantMode, IngestOutcome, RetrievedFragment};

pub fn format_fragments(fragments: &[RetrievedFragment], mode: AssistantMode) -> String {
    let output = serde_json::json!({
        "dataset": mode.dataset(),
        "results": fragments,
    });
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string()) + "\n"
}

pub fn format_ingest_outcome(url: &str, outcome: &IngestOutcome) -> String {
    let mut output = serde_json::to_value(outcome).unwrap_or_default();
    if let Some(object) = output.as_object_mut() {
        object.insert("url".to_string(), serde_json::Value::String(url.to_string()));
    }
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string()) + "\n"
}
