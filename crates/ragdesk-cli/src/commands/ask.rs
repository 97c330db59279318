//! Single-question command

use super::build_orchestrator;
use crate::app::{AskArgs, OutputFormat};
use anyhow::Result;
use ragdesk_core::{ChatSession, Config};

pub async fn run(args: AskArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let orchestrator = build_orchestrator(config)?;
    let mut session = ChatSession::with_mode(args.mode);
    let message = args.message.join(" ");

    let reply = session.send(&orchestrator, &message).await?.to_string();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "mode": args.mode,
                "transcript": session.transcript(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Cli => println!("{}", reply),
    }
    Ok(())
}
