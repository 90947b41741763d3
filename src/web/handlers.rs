//! HTTP request handlers

use super::state::AppState;
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tera::Context;

/// Submitted question form
#[derive(Debug, Deserialize)]
pub struct QuestionForm {
    #[serde(default)]
    pub question: String,
}

/// Home page handler: the form and the conversation so far
pub async fn index(State(state): State<AppState>) -> Response {
    render_page(&state, "")
}

/// Question submission handler
pub async fn ask(State(state): State<AppState>, Form(form): Form<QuestionForm>) -> Response {
    let answer = state
        .orchestrator
        .handle(&form.question, &state.history)
        .await;

    render_page(&state, &answer.table)
}

fn render_page(state: &AppState, table: &str) -> Response {
    let mut ctx = Context::new();
    ctx.insert("instance_name", state.instance_name());
    ctx.insert("turns", &state.history.snapshot());
    ctx.insert("table", table);

    match state.templates.render_with_context("index.html", &ctx) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "turns": state.history.len(),
    }))
}

/// Favicon handler
pub async fn favicon() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}
