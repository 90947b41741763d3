//! Translation services
//!
//! Questions are translated to English before they reach the language model
//! and answers are translated back to the language the question was asked in.

mod google;
mod traits;

pub use google::GoogleTranslator;
pub use traits::*;
