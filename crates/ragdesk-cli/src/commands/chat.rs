//! Interactive chat shell

use super::build_orchestrator;
use crate::app::ChatArgs;
use crate::output::terminal::format_documents;
use anyhow::Result;
use ragdesk_core::{
    AssistantMode, ChatOrchestrator, ChatSession, Config, DocumentKind, HttpIngestor,
    KnowledgeBase,
};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
Commands:
  /new                        Start a new conversation in the current mode
  /mode <success-manager|persona>
                              Switch assistant mode (resets the conversation)
  /ingest <url> [general|persona]
                              Add a document to the knowledge base
  /docs                       List documents added in this session
  /remove <id>                Forget a document from the list
  /help                       Show this help
  /quit                       Leave the chat
Anything else is sent to the assistant.";

struct Shell {
    orchestrator: ChatOrchestrator,
    ingestor: HttpIngestor,
    session: ChatSession,
    knowledge_base: KnowledgeBase,
}

enum Flow {
    Continue,
    Quit,
}

pub async fn run(args: ChatArgs, config: &Config) -> Result<()> {
    let mut shell = Shell {
        orchestrator: build_orchestrator(config)?,
        ingestor: HttpIngestor::new(&config.rag_service)?,
        session: ChatSession::new(),
        knowledge_base: KnowledgeBase::new(),
    };

    shell.select_mode(args.mode);
    println!("Type /help for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt();
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if let Flow::Quit = shell.handle(line.trim()).await {
            break;
        }
    }
    Ok(())
}

fn prompt() {
    print!("> ");
    std::io::stdout().flush().ok();
}

impl Shell {
    fn select_mode(&mut self, mode: AssistantMode) {
        self.session.select_mode(mode);
        println!("[{}] {}", mode.title(), mode.description());
        println!("{}", mode.welcome_message());
    }

    async fn handle(&mut self, line: &str) -> Flow {
        if line.is_empty() {
            return Flow::Continue;
        }

        let Some(command) = line.strip_prefix('/') else {
            self.send(line).await;
            return Flow::Continue;
        };

        let mut parts = command.split_whitespace();
        match (parts.next().unwrap_or_default(), parts.next(), parts.next()) {
            ("quit" | "exit", _, _) => return Flow::Quit,
            ("help", _, _) => println!("{}", HELP),
            ("new", _, _) => {
                let mode = self.session.mode().unwrap_or_default();
                self.session.reset();
                self.select_mode(mode);
            }
            ("mode", Some(name), _) => match name.parse::<AssistantMode>() {
                Ok(mode) => self.select_mode(mode),
                Err(e) => println!("Error: {}", e),
            },
            ("ingest", Some(url), kind) => {
                match kind.map(str::parse::<DocumentKind>).transpose() {
                    Ok(kind) => self.ingest(url, kind.unwrap_or_default()).await,
                    Err(e) => println!("Error: {}", e),
                }
            }
            ("docs", _, _) => print!("{}", format_documents(self.knowledge_base.documents())),
            ("remove", Some(id), _) => {
                if self.knowledge_base.remove(id) {
                    println!("Removed {}", id);
                } else {
                    println!("No document with id {}", id);
                }
            }
            _ => println!("Unknown command. Type /help for commands."),
        }
        Flow::Continue
    }

    async fn send(&mut self, text: &str) {
        match self.session.send(&self.orchestrator, text).await {
            Ok(reply) => println!("{}", reply),
            Err(e) => println!("Error: {}", e),
        }
    }

    async fn ingest(&mut self, url: &str, kind: DocumentKind) {
        match self.knowledge_base.submit(&self.ingestor, url, kind).await {
            Ok(doc) => println!(
                "Added {} to the {} knowledge base (#{})",
                doc.name, doc.kind, doc.id
            ),
            Err(e) => println!("Error: {}", e),
        }
    }
}
