//! Conversation history shared by every request
//!
//! The history is append-only: turns are never edited or removed and keep
//! the order they were submitted in. It lives for the lifetime of the process.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, RwLock};

/// Who produced a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

/// A single message in the conversation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
    pub at: DateTime<Utc>,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Role::Bot, text)
    }

    fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            at: Utc::now(),
        }
    }
}

/// Process-wide, append-only conversation log
#[derive(Debug, Clone, Default)]
pub struct History {
    turns: Arc<RwLock<Vec<Turn>>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn at the end of the log
    pub fn push(&self, turn: Turn) {
        self.turns.write().unwrap().push(turn);
    }

    /// Copy of all turns in submission order
    pub fn snapshot(&self) -> Vec<Turn> {
        self.turns.read().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.turns.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
