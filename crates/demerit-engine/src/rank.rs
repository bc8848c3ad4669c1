//! Passage ranking over handbook paragraphs.
//!
//! Two scoring strategies share one candidate-selection pipeline:
//!
//! - [`rank_passages`] scores token-set overlap with a bigram boost;
//!   used by the plain handbook search endpoint.
//! - [`rank_passages_focused`] scores raw substring containment of focus
//!   keywords and question tokens; used by the chatbot path.
//!
//! Both are pure: same inputs, same output, no I/O.

use std::collections::HashSet;

use crate::text::{question_tokens, tokenize};

/// Ranking knobs. Paragraphs shorter than `min_passage_len` characters
/// are never candidates.
#[derive(Debug, Clone)]
pub struct RankOptions {
    pub max_passages: usize,
    pub min_passage_len: usize,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            max_passages: 3,
            min_passage_len: 40,
        }
    }
}

/// A passage that scored above zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedPassage {
    pub text: String,
    pub score: usize,
}

/// Split a document on blank lines into trimmed paragraphs. A line of
/// pure whitespace separates paragraphs just like an empty line.
fn split_paragraphs(document: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    for line in document.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.trim().to_string());
                current = String::new();
            }
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.trim().to_string());
    }
    paragraphs
}

/// Length-filtered paragraphs, narrowed to those containing a focus
/// keyword when any are given. An over-narrow focus filter falls back to
/// the unfiltered list rather than returning nothing.
fn candidate_passages(
    document: &str,
    focus_keywords: &[&str],
    min_passage_len: usize,
) -> Vec<String> {
    let passages: Vec<String> = split_paragraphs(document)
        .into_iter()
        .filter(|p| p.chars().count() >= min_passage_len)
        .collect();

    if focus_keywords.is_empty() {
        return passages;
    }

    let focused: Vec<String> = passages
        .iter()
        .filter(|p| {
            let lower = p.to_lowercase();
            focus_keywords
                .iter()
                .any(|k| lower.contains(&k.to_lowercase()))
        })
        .cloned()
        .collect();

    if focused.is_empty() { passages } else { focused }
}

/// Sort by score descending and keep the top `max_passages`.
///
/// `sort_by` is stable, so equal scores keep document order.
fn take_top(mut scored: Vec<RankedPassage>, max_passages: usize) -> Vec<RankedPassage> {
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(max_passages);
    scored
}

/// Token-overlap strategy.
///
/// Per passage: one point per passage token found in the question's
/// stopword-filtered unigram set (repeats count), two points per
/// adjacent passage-token pair found in the question's bigram set, plus
/// one point per distinct overlapping token. Zero-score passages are
/// dropped.
pub fn rank_passages(
    question: &str,
    document: &str,
    focus_keywords: &[&str],
    opts: &RankOptions,
) -> Vec<RankedPassage> {
    if question.trim().is_empty() || document.trim().is_empty() {
        return Vec::new();
    }
    let q_tokens = question_tokens(question);
    if q_tokens.is_empty() {
        return Vec::new();
    }
    let unigrams: HashSet<&str> = q_tokens.iter().map(String::as_str).collect();
    let bigrams: HashSet<(&str, &str)> = q_tokens
        .windows(2)
        .map(|w| (w[0].as_str(), w[1].as_str()))
        .collect();

    let scored: Vec<RankedPassage> = candidate_passages(document, focus_keywords, opts.min_passage_len)
        .into_iter()
        .filter_map(|passage| {
            let tokens = tokenize(&passage);
            let unigram_score = tokens
                .iter()
                .filter(|t| unigrams.contains(t.as_str()))
                .count();
            let bigram_score = 2 * tokens
                .windows(2)
                .filter(|w| bigrams.contains(&(w[0].as_str(), w[1].as_str())))
                .count();
            let distinct_overlap: HashSet<&str> = tokens
                .iter()
                .map(String::as_str)
                .filter(|t| unigrams.contains(t))
                .collect();
            let score = unigram_score + bigram_score + distinct_overlap.len();
            (score > 0).then_some(RankedPassage { text: passage, score })
        })
        .collect();

    take_top(scored, opts.max_passages)
}

/// Substring-containment strategy.
///
/// Per passage (lowercased): one point per focus keyword present, two
/// points per distinct question token present as a raw substring.
/// Presence is what counts, not the number of occurrences.
pub fn rank_passages_focused(
    question: &str,
    document: &str,
    focus_keywords: &[&str],
    opts: &RankOptions,
) -> Vec<RankedPassage> {
    if question.trim().is_empty() || document.trim().is_empty() {
        return Vec::new();
    }
    let unique_tokens: HashSet<String> = question_tokens(question).into_iter().collect();

    let scored: Vec<RankedPassage> = candidate_passages(document, focus_keywords, opts.min_passage_len)
        .into_iter()
        .filter_map(|passage| {
            let lower = passage.to_lowercase();
            let focus_hits = focus_keywords
                .iter()
                .filter(|k| lower.contains(&k.to_lowercase()))
                .count();
            let token_hits = unique_tokens
                .iter()
                .filter(|t| lower.contains(t.as_str()))
                .count();
            let score = focus_hits + 2 * token_hits;
            (score > 0).then_some(RankedPassage { text: passage, score })
        })
        .collect();

    take_top(scored, opts.max_passages)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HANDBOOK: &str = "\
Students must be presentable and modest. The prescribed uniform is worn at all times during class hours.

Attendance is checked every morning. Students who arrive after the second bell are marked tardy on the daily record.

Short line.

Bullying of any kind is investigated by the guidance office and confirmed cases are treated as major offenses under Category B.

The library is open from seven in the morning until five in the afternoon on school days.";

    #[test]
    fn test_empty_inputs_yield_empty() {
        let opts = RankOptions::default();
        assert!(rank_passages("dress code", "", &[], &opts).is_empty());
        assert!(rank_passages("", HANDBOOK, &[], &opts).is_empty());
        assert!(rank_passages_focused("dress code", "", &[], &opts).is_empty());
        assert!(rank_passages_focused("", HANDBOOK, &[], &opts).is_empty());
    }

    #[test]
    fn test_no_overlap_yields_empty() {
        let opts = RankOptions::default();
        let hits = rank_passages("quantum chromodynamics", HANDBOOK, &[], &opts);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_max_passages_bound_and_positive_scores() {
        let opts = RankOptions {
            max_passages: 2,
            ..RankOptions::default()
        };
        let hits = rank_passages("students school morning", HANDBOOK, &[], &opts);
        assert!(hits.len() <= 2);
        for hit in &hits {
            assert!(hit.score > 0);
        }
    }

    #[test]
    fn test_short_paragraphs_never_returned() {
        let opts = RankOptions::default();
        let hits = rank_passages("short line", HANDBOOK, &[], &opts);
        assert!(hits.iter().all(|h| h.text != "Short line."));
    }

    #[test]
    fn test_focus_filter_narrows() {
        let opts = RankOptions::default();
        let hits = rank_passages("students students students", HANDBOOK, &["uniform"], &opts);
        assert_eq!(hits.len(), 1);
        assert!(hits[0].text.contains("uniform"));
    }

    #[test]
    fn test_focus_filter_falls_back_when_over_narrow() {
        let opts = RankOptions::default();
        let plain = rank_passages("arrive after the second bell", HANDBOOK, &["zzzzz"], &opts);
        assert!(!plain.is_empty());
        let focused =
            rank_passages_focused("arrive after the second bell", HANDBOOK, &["zzzzz"], &opts);
        assert!(!focused.is_empty());
    }

    #[test]
    fn test_bigram_boost_prefers_adjacent_phrase() {
        let doc = "\
The dress code applies to every student on campus and is enforced daily by teachers.

The code about how students dress is explained to every student on campus and enforced daily.";
        let opts = RankOptions::default();
        let hits = rank_passages("what is the dress code", doc, &[], &opts);
        assert!(hits.len() >= 2);
        assert!(hits[0].text.starts_with("The dress code applies"));
        assert!(hits[0].score > hits[1].score);
    }

    #[test]
    fn test_stable_order_on_ties() {
        let doc = "\
Alpha paragraph mentions the uniform policy for students attending assembly events.

Beta paragraph mentions the uniform policy for students attending assembly events.";
        let opts = RankOptions::default();
        let hits = rank_passages("uniform policy", doc, &[], &opts);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].score, hits[1].score);
        assert!(hits[0].text.starts_with("Alpha"));
        assert!(hits[1].text.starts_with("Beta"));
    }

    #[test]
    fn test_focused_counts_presence_not_occurrences() {
        let doc = "\
Uniform uniform uniform uniform appears many times in this long enough paragraph.

Uniform appears once here along with tardy in this long enough paragraph.";
        let opts = RankOptions::default();
        // One focus keyword each: repetition must not outscore coverage
        let hits = rank_passages_focused("anything else", doc, &["uniform", "tardy"], &opts);
        assert_eq!(hits.len(), 2);
        assert!(hits[0].text.contains("tardy"));
        assert_eq!(hits[0].score, 2);
        assert_eq!(hits[1].score, 1);
    }

    #[test]
    fn test_focused_token_hits_weigh_double() {
        let doc = "\
This paragraph talks about the uniform requirement in considerable detail today.

This paragraph mentions morning assembly procedures in considerable detail today.";
        let opts = RankOptions::default();
        let hits = rank_passages_focused("uniform", doc, &[], &opts);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].score, 2);
    }

    #[test]
    fn test_multiline_paragraph_stays_whole() {
        let doc = "First line of the paragraph about uniforms\nsecond line continues the same paragraph.\n\nAnother block entirely about library hours and borrowing rules for students.";
        let hits = rank_passages("uniforms", doc, &[], &RankOptions::default());
        assert_eq!(hits.len(), 1);
        assert!(hits[0].text.contains("second line"));
    }
}
