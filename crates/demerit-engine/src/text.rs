//! Text normalization and tokenization.
//!
//! Everything downstream (classifier, ranker) works on the output of
//! these functions, so they must stay total: any input, including empty
//! or non-ASCII text, produces a well-defined result.

/// Common English function words stripped from question tokens.
///
/// Applied to the question side only. Passage tokens are never
/// stopword-filtered, so a passage can still earn overlap credit for
/// repeating the question's content words.
const STOPWORDS: &[&str] = &[
    "a", "about", "an", "and", "are", "as", "at", "be", "but", "by", "can", "did", "do", "does",
    "for", "from", "how", "i", "if", "in", "is", "it", "its", "my", "of", "on", "or", "that",
    "the", "their", "them", "there", "they", "this", "to", "was", "we", "what", "when", "where",
    "which", "who", "why", "will", "with", "you", "your",
];

/// Lowercase, strip everything outside `[a-z0-9]` to spaces, collapse
/// whitespace runs, trim.
pub fn normalize(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_alphanumeric() { c } else { ' ' }
        })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize, then split into tokens. Empty input yields an empty list.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Tokenize a question and drop stopwords, preserving order and repeats.
pub fn question_tokens(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| !is_stopword(t))
        .collect()
}
