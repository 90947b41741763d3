//! Sahayak: a multilingual assistant for an internship database
//!
//! Questions asked in any language are translated to English, turned into
//! SQL by a language model, answered from the database and translated back.

pub mod config;
pub mod conversation;
pub mod llm;
pub mod network;
pub mod pipeline;
pub mod sql;
pub mod translate;
pub mod web;

pub use config::Settings;
pub use conversation::{History, Turn};
pub use pipeline::{Answer, Orchestrator};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
