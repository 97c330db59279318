//! Retrieve command

use crate::app::{OutputFormat, RetrieveArgs};
use crate::output::format_fragments;
use anyhow::Result;
use ragdesk_core::{format_retrieved_content, Config, HttpRetriever, Retriever};

pub async fn run(args: RetrieveArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let query = args.query.join(" ");
    let retriever = HttpRetriever::new(&config.rag_service)?;
    let fragments = retriever.retrieve(&query, args.mode).await?;

    if args.raw {
        print!("{}", format_retrieved_content(&fragments));
    } else {
        print!("{}", format_fragments(&fragments, args.mode, format));
    }
    Ok(())
}
