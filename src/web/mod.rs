//! Web server module
//!
//! Serves the question form and the shared conversation.

mod handlers;
mod routes;
mod state;
mod templates;

pub use routes::create_router;
pub use state::AppState;
pub use templates::Templates;
