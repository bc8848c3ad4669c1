//! Route handlers for the gateway API.

use axum::{Json, extract::State, http::StatusCode};
use demerit_engine::{RankOptions, answer_from_handbook, answer_question};
use std::sync::Arc;

use crate::server::AppState;

/// Health check endpoint.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "demerit-gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.start_time.elapsed().as_secs(),
        "handbook_loaded": state.handbook.is_some(),
        "handbook_loaded_at": state.handbook.as_ref().map(|h| h.loaded_at().to_rfc3339()),
    }))
}

/// Pull a usable question out of the request body. Missing, non-string,
/// and blank values all count as absent.
fn extract_question(body: &serde_json::Value) -> Option<&str> {
    let question = body.get("question")?.as_str()?.trim();
    if question.is_empty() { None } else { Some(question) }
}

fn question_required() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": "Question is required." })),
    )
}

fn handbook_unavailable() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": "Handbook document is not available." })),
    )
}

/// Plain handbook search: top passages joined by a blank line.
pub async fn ask_handbook(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, Json<serde_json::Value>) {
    let Some(question) = extract_question(&body) else {
        return question_required();
    };
    let Some(handbook) = &state.handbook else {
        tracing::warn!("⚠️ /api/ask-handbook called without a loaded handbook");
        return handbook_unavailable();
    };

    let opts = RankOptions {
        max_passages: state.config.handbook.search_max_passages,
        min_passage_len: state.config.handbook.min_passage_len,
    };
    let answer = answer_from_handbook(question, handbook.text(), &opts);
    (StatusCode::OK, Json(serde_json::json!({ "answer": answer })))
}

/// Chatbot ask: FAQ routing plus focused handbook retrieval.
pub async fn ask_chatbot(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, Json<serde_json::Value>) {
    let Some(question) = extract_question(&body) else {
        return question_required();
    };
    let Some(handbook) = &state.handbook else {
        tracing::warn!("⚠️ /api/chatbot/ask called without a loaded handbook");
        return handbook_unavailable();
    };

    let opts = RankOptions {
        max_passages: state.config.handbook.chat_max_passages,
        min_passage_len: state.config.handbook.min_passage_len,
    };
    let response = answer_question(&state.catalog, question, handbook.text(), &opts);
    tracing::debug!(
        category = response.category.key(),
        source = ?response.source,
        "chatbot answered"
    );
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "text": response.text,
            "category": response.category,
            "suggestions": response.suggestions,
            "source": response.source,
        })),
    )
}

/// The listed categories, in catalog order.
pub async fn list_categories(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let categories: Vec<serde_json::Value> = state
        .catalog
        .entries()
        .iter()
        .map(|e| {
            serde_json::json!({
                "key": e.category.key(),
                "title": e.title,
            })
        })
        .collect();
    Json(serde_json::json!({
        "success": true,
        "categories": categories,
    }))
}
