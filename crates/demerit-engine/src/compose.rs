//! Answer composition: classify, resolve the FAQ, retrieve passages,
//! merge into one response.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::classify::{Category, classify};
use crate::faq::resolve_faq;
use crate::rank::{RankOptions, rank_passages, rank_passages_focused};

/// Fixed response when neither the FAQ tables nor the handbook match.
pub const NO_MATCH_MESSAGE: &str =
    "No directly relevant section found in the handbook for that question.";

/// Where the primary answer text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnswerSource {
    #[serde(rename = "FAQ")]
    Faq,
    #[serde(rename = "Student Handbook")]
    StudentHandbook,
}

/// The chatbot's full answer payload.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub text: String,
    pub category: Category,
    pub suggestions: Vec<String>,
    pub source: AnswerSource,
}

/// Answer a question with the FAQ tables plus focused handbook retrieval.
///
/// The FAQ answer, when present, leads the response text; retrieved
/// passages follow after a blank line. Questions outside every listed
/// category fall through to pure handbook retrieval, and to the
/// not-found sentinel when that finds nothing either.
pub fn answer_question(
    catalog: &Catalog,
    question: &str,
    document: &str,
    opts: &RankOptions,
) -> ChatResponse {
    let category = classify(question);
    let faq = resolve_faq(catalog, category, question);
    let passages = rank_passages_focused(
        question,
        document,
        catalog.focus_keywords(category),
        opts,
    );
    let excerpt = passages
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    let (text, source) = match faq {
        Some(answer) if excerpt.is_empty() => (answer.to_string(), AnswerSource::Faq),
        Some(answer) => (format!("{answer}\n\n{excerpt}"), AnswerSource::Faq),
        None if !excerpt.is_empty() => (excerpt, AnswerSource::StudentHandbook),
        None => (NO_MATCH_MESSAGE.to_string(), AnswerSource::StudentHandbook),
    };

    ChatResponse {
        text,
        category,
        suggestions: catalog
            .suggestions_for(category)
            .iter()
            .map(|s| s.to_string())
            .collect(),
        source,
    }
}

/// Plain handbook search: top passages by token overlap, joined by a
/// blank line, or the sentinel when nothing scores.
pub fn answer_from_handbook(question: &str, document: &str, opts: &RankOptions) -> String {
    let passages = rank_passages(question, document, &[], opts);
    if passages.is_empty() {
        return NO_MATCH_MESSAGE.to_string();
    }
    passages
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}
