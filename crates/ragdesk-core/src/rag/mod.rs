//! Knowledge base access through the remote RAG service
//!
//! - Document reference validation
//! - Ingestion into a dataset
//! - Fragment retrieval and prompt context formatting

mod context;
pub mod ingest;
mod retrieve;
mod url;

pub use context::format_retrieved_content;
pub use ingest::{
    HttpIngestor, IngestFailure, IngestFailureKind, IngestOutcome, IngestReceipt, Ingestor,
};
pub use retrieve::{HttpRetriever, RetrievedFragment, Retriever};
pub use url::{file_name_from_url, is_valid_document_url, ALLOWED_FILE_EXTENSIONS};
