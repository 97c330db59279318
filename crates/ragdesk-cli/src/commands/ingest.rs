//! Ingest command

use crate::app::{IngestArgs, OutputFormat};
use crate::output::format_ingest_outcome;
use anyhow::Result;
use ragdesk_core::session::{BLANK_URL_MESSAGE, INVALID_URL_MESSAGE};
use ragdesk_core::{is_valid_document_url, Config, HttpIngestor, Ingestor, RagDeskError};

pub async fn run(args: IngestArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let url = args.url.trim();
    if url.is_empty() {
        return Err(RagDeskError::InvalidInput(BLANK_URL_MESSAGE.to_string()).into());
    }
    if !is_valid_document_url(url) {
        return Err(RagDeskError::InvalidInput(INVALID_URL_MESSAGE.to_string()).into());
    }

    let ingestor = HttpIngestor::new(&config.rag_service)?;
    let outcome = ingestor.ingest(url, args.kind).await;

    print!("{}", format_ingest_outcome(url, &outcome, format));

    if outcome.is_success() {
        Ok(())
    } else {
        Err(RagDeskError::Ingest(outcome.message().to_string()).into())
    }
}
