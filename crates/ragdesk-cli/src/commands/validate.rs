//! Validate command

use crate::app::{OutputFormat, ValidateArgs};
use anyhow::Result;
use ragdesk_core::session::INVALID_URL_MESSAGE;
use ragdesk_core::{file_name_from_url, is_valid_document_url, RagDeskError};

pub fn run(args: ValidateArgs, format: OutputFormat) -> Result<()> {
    let valid = is_valid_document_url(&args.url);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "url": args.url,
                "valid": valid,
                "name": file_name_from_url(&args.url),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Cli => {
            println!("{}", if valid { "valid" } else { "invalid" });
        }
    }

    if valid {
        Ok(())
    } else {
        Err(RagDeskError::InvalidInput(INVALID_URL_MESSAGE.to_string()).into())
    }
}
