//! # Demerit Engine
//!
//! Pure lexical question-answering over a student handbook.
//! No embeddings, no ML, no network calls: string processing only.
//!
//! ## How it works
//! ```text
//! "What is the dress code?"
//!   ↓
//! classify()                ordered keyword rules → Category::DressCode
//!   ↓
//! resolve_faq()             first matching rule in the category's FAQ table
//!   ↓
//! rank_passages_focused()   handbook paragraphs scored by substring hits
//!   ↓
//! answer_question()         FAQ answer + top passages merged into ChatResponse
//! ```
//!
//! Every function is synchronous and deterministic. The category catalog
//! and the handbook text are injected by the caller; the engine owns no
//! I/O and no mutable state.

pub mod catalog;
pub mod classify;
pub mod compose;
pub mod faq;
pub mod rank;
pub mod text;

pub use catalog::{Catalog, CategoryEntry, FaqRule};
pub use classify::{Category, classify};
pub use compose::{AnswerSource, ChatResponse, NO_MATCH_MESSAGE, answer_from_handbook, answer_question};
pub use faq::resolve_faq;
pub use rank::{RankOptions, RankedPassage, rank_passages, rank_passages_focused};
