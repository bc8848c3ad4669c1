//! # Demerit Gateway
//!
//! HTTP surface for the handbook engine.
//!
//! ```text
//! POST /api/ask-handbook       { question } → { answer }
//! POST /api/chatbot/ask        { question } → { text, category, suggestions, source }
//! GET  /api/chatbot/categories              → { success, categories: [{ key, title }] }
//! GET  /health
//! ```
//!
//! The handbook file is read once at startup; the engine itself is pure,
//! so handlers share one immutable [`server::AppState`].

pub mod handbook;
pub mod routes;
pub mod server;

pub use handbook::HandbookStore;
pub use server::{AppState, build_router, start};
