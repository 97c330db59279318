//! Prompt context rendering for retrieved fragments

use super::RetrievedFragment;

const CONTEXT_HEADING: &str = "Relevant information from your knowledge base:";
const CONTEXT_INSTRUCTION: &str = "Please use this context to provide a more informed response.";

/// Render retrieved fragments as a numbered context block.
///
/// An empty slice renders as an empty string, meaning no context section is
/// injected into the prompt.
pub fn format_retrieved_content(fragments: &[RetrievedFragment]) -> String {
    if fragments.is_empty() {
        return String::new();
    }

    let entries: Vec<String> = fragments
        .iter()
        .enumerate()
        .map(|(idx, fragment)| format!("\n[{}] {}\n", idx + 1, fragment.chunk))
        .collect();

    format!(
        "\n{}\n\n{}\n\n{}\n",
        CONTEXT_HEADING,
        entries.join("\n"),
        CONTEXT_INSTRUCTION
    )
}
