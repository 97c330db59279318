//! Transient per-session state
//!
//! Nothing here outlives the process: the chat transcript and the list of
//! submitted documents live only as long as their owning session.

mod chat;
mod knowledge_base;

pub use chat::ChatSession;
pub use knowledge_base::{Document, KnowledgeBase, BLANK_URL_MESSAGE, INVALID_URL_MESSAGE};
