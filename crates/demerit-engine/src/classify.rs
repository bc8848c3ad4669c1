//! Question classification into disciplinary categories.
//!
//! An ordered rule table maps keyword hits to categories; the first rule
//! that matches wins and `General` is the default. Order is load-bearing:
//! "what happens if I violate the dress code" must route to dress code,
//! not to the generic violations bucket.

use serde::{Deserialize, Serialize};

use crate::text::normalize;

/// The twelve disciplinary categories. `General` is the classifier
/// default and carries no FAQ table or focus keywords of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Violations,
    Attendance,
    DressCode,
    MinorOffenses,
    MajorOffensesA,
    MajorOffensesB,
    CategoryC,
    Bullying,
    Appeals,
    Suspension,
    Expulsion,
    General,
}

impl Category {
    /// Stable string key used in API payloads.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Violations => "violations",
            Category::Attendance => "attendance",
            Category::DressCode => "dressCode",
            Category::MinorOffenses => "minorOffenses",
            Category::MajorOffensesA => "majorOffensesA",
            Category::MajorOffensesB => "majorOffensesB",
            Category::CategoryC => "categoryC",
            Category::Bullying => "bullying",
            Category::Appeals => "appeals",
            Category::Suspension => "suspension",
            Category::Expulsion => "expulsion",
            Category::General => "general",
        }
    }
}

/// How a keyword is matched against the normalized question.
///
/// `Word` requires a whole token (so "late" never fires inside
/// "violate"), `Prefix` matches token stems ("suspen" covers suspended
/// and suspension), `Contains` is a raw substring ("bully" covers
/// cyberbullying), and `Phrase` matches an adjacent token run with both
/// edges on token boundaries. `PhrasePrefix` anchors only the left edge
/// so the final word may inflect ("id violation" covers id violations);
/// use `Phrase` where the closed tail is load-bearing ("category c"
/// must not fire inside "category code").
enum Keyword {
    Word(&'static str),
    Prefix(&'static str),
    Contains(&'static str),
    Phrase(&'static str),
    PhrasePrefix(&'static str),
}

impl Keyword {
    fn hits(&self, normalized: &str, padded: &str, tokens: &[&str]) -> bool {
        match self {
            Keyword::Word(w) => tokens.iter().any(|t| t == w),
            Keyword::Prefix(p) => tokens.iter().any(|t| t.starts_with(p)),
            Keyword::Contains(s) => normalized.contains(s),
            Keyword::Phrase(p) => padded.contains(&format!(" {p} ")),
            Keyword::PhrasePrefix(p) => padded.contains(&format!(" {p}")),
        }
    }
}

struct Rule {
    category: Category,
    keywords: &'static [Keyword],
}

/// Ordered rule table, highest precedence first.
static RULES: &[Rule] = &[
    Rule {
        category: Category::DressCode,
        keywords: &[
            Keyword::Prefix("dress"),
            Keyword::Prefix("uniform"),
            Keyword::Prefix("groom"),
            Keyword::Prefix("hair"),
            Keyword::Prefix("attire"),
        ],
    },
    Rule {
        category: Category::Attendance,
        keywords: &[
            Keyword::Prefix("attendance"),
            Keyword::Prefix("absen"),
            Keyword::Prefix("tardy"),
            Keyword::Word("late"),
        ],
    },
    Rule {
        category: Category::Appeals,
        keywords: &[
            Keyword::Prefix("appeal"),
            Keyword::Prefix("challeng"),
            Keyword::Prefix("disput"),
            Keyword::Prefix("contest"),
        ],
    },
    Rule {
        category: Category::Bullying,
        keywords: &[Keyword::Contains("bully"), Keyword::Contains("bullie")],
    },
    Rule {
        category: Category::Suspension,
        keywords: &[Keyword::Prefix("suspen")],
    },
    Rule {
        category: Category::Expulsion,
        keywords: &[
            Keyword::Prefix("expel"),
            Keyword::Prefix("expul"),
            Keyword::Prefix("dismiss"),
        ],
    },
    Rule {
        category: Category::CategoryC,
        keywords: &[Keyword::Phrase("category c")],
    },
    Rule {
        category: Category::MajorOffensesB,
        keywords: &[
            Keyword::Phrase("category b"),
            Keyword::Prefix("cheat"),
            Keyword::Prefix("plagiar"),
            Keyword::Prefix("gambl"),
            Keyword::Prefix("alcohol"),
            Keyword::Prefix("vandal"),
        ],
    },
    Rule {
        category: Category::MajorOffensesA,
        keywords: &[
            Keyword::Phrase("category a"),
            Keyword::Prefix("disrespect"),
            Keyword::Prefix("fight"),
            Keyword::Word("pda"),
            Keyword::PhrasePrefix("public display"),
            Keyword::Word("cutting"),
            Keyword::Word("recording"),
        ],
    },
    Rule {
        category: Category::MinorOffenses,
        keywords: &[
            Keyword::Word("minor"),
            Keyword::PhrasePrefix("id violation"),
            Keyword::Prefix("tardiness"),
            Keyword::Prefix("loiter"),
            Keyword::Prefix("litter"),
        ],
    },
    Rule {
        category: Category::Violations,
        keywords: &[
            Keyword::Prefix("violat"),
            Keyword::Prefix("offens"),
            Keyword::Prefix("offenc"),
            Keyword::Word("rule"),
            Keyword::Word("rules"),
        ],
    },
];

/// Classify a raw question. Total and deterministic: every string maps
/// to exactly one category, `General` when nothing matches.
pub fn classify(question: &str) -> Category {
    let normalized = normalize(question);
    let padded = format!(" {normalized} ");
    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    for rule in RULES {
        if rule
            .keywords
            .iter()
            .any(|k| k.hits(&normalized, &padded, &tokens))
        {
            return rule.category;
        }
    }
    Category::General
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_category_routes() {
        assert_eq!(classify("What is the dress code?"), Category::DressCode);
        assert_eq!(classify("How many absences am I allowed?"), Category::Attendance);
        assert_eq!(classify("Can I appeal the decision?"), Category::Appeals);
        assert_eq!(classify("Someone is bullying me"), Category::Bullying);
        assert_eq!(classify("How long is a suspension?"), Category::Suspension);
        assert_eq!(classify("Can a student be expelled?"), Category::Expulsion);
        assert_eq!(classify("What is a category c offense?"), Category::CategoryC);
        assert_eq!(classify("What happens if I get caught cheating?"), Category::MajorOffensesB);
        assert_eq!(classify("Is fighting a major offense?"), Category::MajorOffensesA);
        assert_eq!(classify("Is littering punished?"), Category::MinorOffenses);
        assert_eq!(classify("What are the school rules?"), Category::Violations);
        assert_eq!(classify("Hello there"), Category::General);
    }

    #[test]
    fn test_precedence_dress_code_wins() {
        assert_eq!(
            classify("what happens if I violate the dress code category b"),
            Category::DressCode
        );
    }

    #[test]
    fn test_violate_does_not_hit_attendance() {
        // "violate" contains "late" but must not trip the whole-word rule
        assert_eq!(classify("what if I violate a rule"), Category::Violations);
    }

    #[test]
    fn test_late_as_word_hits_attendance() {
        assert_eq!(classify("I arrived late to class"), Category::Attendance);
    }

    #[test]
    fn test_cyberbullying_routes_to_bullying() {
        assert_eq!(classify("Is cyberbullying covered?"), Category::Bullying);
    }

    #[test]
    fn test_category_phrase_needs_word_boundary() {
        // "category code" must not read as "category c"
        assert_eq!(classify("where is the category code listed"), Category::General);
        assert_eq!(classify("tell me about Category C"), Category::CategoryC);
    }

    #[test]
    fn test_open_tail_phrases_cover_plurals() {
        // "violations" alone is the generic bucket; "id violations" is not
        assert_eq!(
            classify("what happens after three id violations"),
            Category::MinorOffenses
        );
        assert_eq!(classify("is an id violation recorded"), Category::MinorOffenses);
        assert_eq!(
            classify("are public displays of affection allowed"),
            Category::MajorOffensesA
        );
    }

    #[test]
    fn test_school_address_is_not_dress_code() {
        assert_eq!(classify("what is the school address"), Category::General);
    }

    #[test]
    fn test_total_on_odd_inputs() {
        assert_eq!(classify(""), Category::General);
        assert_eq!(classify("🎒📚✏️"), Category::General);
        assert_eq!(classify(&"x".repeat(10_000)), Category::General);
    }

    #[test]
    fn test_deterministic() {
        let q = "will I get suspended for cheating on the exam";
        let first = classify(q);
        for _ in 0..10 {
            assert_eq!(classify(q), first);
        }
    }

    #[test]
    fn test_keys_are_stable() {
        assert_eq!(Category::DressCode.key(), "dressCode");
        assert_eq!(Category::MajorOffensesA.key(), "majorOffensesA");
        assert_eq!(Category::CategoryC.key(), "categoryC");
        assert_eq!(Category::General.key(), "general");
    }

    #[test]
    fn test_serde_key_matches_key_fn() {
        let json = serde_json::to_string(&Category::MinorOffenses).unwrap();
        assert_eq!(json, "\"minorOffenses\"");
        assert_eq!(json.trim_matches('"'), Category::MinorOffenses.key());
    }
}
