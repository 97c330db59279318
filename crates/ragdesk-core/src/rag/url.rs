//! Document reference validation

use reqwest::Url;

/// Storage scheme accepted without further inspection
pub const S3_SCHEME_PREFIX: &str = "s3://";

/// File extensions the RAG service can ingest
pub const ALLOWED_FILE_EXTENSIONS: &[&str] = &[".pdf", ".docx", ".doc", ".txt"];

/// Hosts that serve preview pages rather than the file itself
const PREVIEW_HOSTS: &[&str] = &["drive.google.com"];

/// Check whether a document reference can be submitted for ingestion.
///
/// `s3://` references are accepted as-is. Anything else must parse as a URL
/// whose path ends in a supported extension and must not be a cloud-drive
/// preview link.
pub fn is_valid_document_url(url: &str) -> bool {
    if url.starts_with(S3_SCHEME_PREFIX) {
        return true;
    }

    let Ok(parsed) = Url::parse(url) else {
        return false;
    };

    let path = parsed.path().to_lowercase();
    let is_direct_file_link = ALLOWED_FILE_EXTENSIONS
        .iter()
        .any(|ext| path.ends_with(ext));

    is_direct_file_link && !is_preview_link(&parsed, &path)
}

fn is_preview_link(url: &Url, lowercase_path: &str) -> bool {
    let host = url.host_str().unwrap_or_default();
    PREVIEW_HOSTS.iter().any(|preview| host.contains(preview)) && lowercase_path.contains("view")
}

/// Derive a display name for a document reference (its last path segment).
pub fn file_name_from_url(url: &str) -> String {
    if let Some(path) = url.strip_prefix(S3_SCHEME_PREFIX) {
        return path.rsplit('/').next().unwrap_or(path).to_string();
    }

    match Url::parse(url) {
        Ok(parsed) => parsed
            .path()
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string(),
        Err(_) => url.to_string(),
    }
}
