//! Terminal output formatter

use ragdesk_core::{file_name_from_url, Document, IngestOutcome, RetrievedFragment};

pub fn format_fragments(fragments: &[RetrievedFragment]) -> String {
    if fragments.is_empty() {
        return "No relevant content found\n".to_string();
    }

    let mut output = String::new();
    for (idx, fragment) in fragments.iter().enumerate() {
        let mut lines = fragment.chunk.lines();
        output.push_str(&format!("{:>3}. {}\n", idx + 1, lines.next().unwrap_or_default()));
        for line in lines {
            output.push_str(&format!("     {}\n", line));
        }
    }
    output
}

pub fn format_ingest_outcome(url: &str, outcome: &IngestOutcome) -> String {
    match outcome {
        IngestOutcome::Ingested(receipt) => {
            let mut output = format!(
                "Added '{}' to {}\n  {}\n",
                file_name_from_url(url),
                receipt.dataset,
                receipt.message
            );
            if let Some(ref id) = receipt.document_id {
                output.push_str(&format!("  Document: {}\n", id));
            }
            if let Some(count) = receipt.ingested_files {
                output.push_str(&format!("  Files:    {}\n", count));
            }
            output
        }
        IngestOutcome::Failed(failure) => {
            format!("Could not add '{}': {}\n", file_name_from_url(url), failure.message)
        }
    }
}

pub fn format_documents(documents: &[Document]) -> String {
    if documents.is_empty() {
        return "No documents added yet\n".to_string();
    }

    let mut output = String::new();
    for doc in documents {
        output.push_str(&format!(
            "#{} {} [{}] added {}\n    {}\n",
            doc.id,
            doc.name,
            doc.kind,
            doc.uploaded_at.format("%Y-%m-%d %H:%M"),
            doc.url
        ));
    }
    output
}
