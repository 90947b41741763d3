//! HTTP networking module
//!
//! Provides the HTTP client used by the translation and language-model clients.

mod client;

pub use client::{ApiResponse, HttpClient};
