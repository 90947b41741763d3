//! Language model access
//!
//! The model is used twice per question: once to write SQL for the
//! internship database and once to summarize the rows it returned.

mod chat;
pub mod prompts;
mod traits;

pub use chat::ChatCompletionModel;
pub use traits::*;
