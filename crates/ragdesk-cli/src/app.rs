//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use ragdesk_core::{AssistantMode, DocumentKind};

#[derive(Parser)]
#[command(name = "ragdesk")]
#[command(
    author,
    version,
    about = "Business knowledge base and retrieval-augmented assistant"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether a document reference can be ingested
    Validate(ValidateArgs),

    /// Add a document to the knowledge base
    Ingest(IngestArgs),

    /// Show knowledge base fragments relevant to a query
    Retrieve(RetrieveArgs),

    /// Ask the assistant a single question
    Ask(AskArgs),

    /// Interactive chat session
    Chat(ChatArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Document URL or s3:// reference
    pub url: String,
}

#[derive(Args)]
pub struct IngestArgs {
    /// Direct link to a PDF, DOCX, DOC or TXT file, or an s3:// reference
    pub url: String,

    /// Dataset to add the document to (general or persona)
    #[arg(short, long, default_value = "general")]
    pub kind: DocumentKind,
}

#[derive(Args)]
pub struct RetrieveArgs {
    /// Query text
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Assistant mode whose dataset is searched
    #[arg(short, long, default_value = "success-manager")]
    pub mode: AssistantMode,

    /// Print the prompt context block instead of the fragment list
    #[arg(long)]
    pub raw: bool,
}

#[derive(Args)]
pub struct AskArgs {
    /// Message to send
    #[arg(required = true)]
    pub message: Vec<String>,

    /// Assistant mode (success-manager or persona)
    #[arg(short, long, default_value = "success-manager")]
    pub mode: AssistantMode,
}

#[derive(Args)]
pub struct ChatArgs {
    /// Assistant mode to start in (success-manager or persona)
    #[arg(short, long, default_value = "success-manager")]
    pub mode: AssistantMode,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file
    Init,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
}
