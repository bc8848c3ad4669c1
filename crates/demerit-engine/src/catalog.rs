//! Static category catalog: display titles, focus keywords, FAQ rules,
//! and follow-up suggestions for every listed category.
//!
//! Built once at process start and injected wherever it is needed. The
//! `General` category is deliberately absent from the entry list: it has
//! no FAQ table and no focus keywords, which is what makes the
//! "no relevant section" path reachable.

use regex::Regex;

use crate::classify::Category;

/// One FAQ pattern → canned answer pair.
///
/// Patterns are case-insensitive regexes over the raw question. A rule
/// whose pattern failed to compile matches nothing, so a broken pattern
/// can only narrow answers, never leak the wrong one. Every category's
/// final rule is the match-everything pattern `.*`.
pub struct FaqRule {
    matcher: Option<Regex>,
    pub answer: &'static str,
}

impl FaqRule {
    fn new(pattern: &str, answer: &'static str) -> Self {
        Self {
            matcher: Regex::new(&format!("(?i){pattern}")).ok(),
            answer,
        }
    }

    pub fn matches(&self, question: &str) -> bool {
        self.matcher.as_ref().is_some_and(|re| re.is_match(question))
    }

    #[cfg(test)]
    fn compiled(&self) -> bool {
        self.matcher.is_some()
    }
}

/// Everything the engine knows about one listed category.
pub struct CategoryEntry {
    pub category: Category,
    pub title: &'static str,
    pub focus_keywords: &'static [&'static str],
    pub faq_rules: Vec<FaqRule>,
    pub suggestions: [&'static str; 3],
}

/// Ordered collection of listed categories plus the general fallback
/// suggestions. Never mutated after construction.
pub struct Catalog {
    entries: Vec<CategoryEntry>,
    general_suggestions: [&'static str; 3],
}

impl Catalog {
    /// The standard school-handbook catalog.
    pub fn standard() -> Self {
        let entries = vec![
            CategoryEntry {
                category: Category::DressCode,
                title: "Dress Code and Grooming",
                focus_keywords: &["dress", "uniform", "grooming", "hair", "attire"],
                faq_rules: vec![
                    FaqRule::new(
                        r"consequence|punish|violat|happen",
                        "Students must be presentable and modest. A first dress code violation \
                         brings a warning and a required change of clothes; repeat violations are \
                         recorded as minor offenses and may require a parent conference.",
                    ),
                    FaqRule::new(
                        r".*",
                        "Students must be presentable and modest. The prescribed school uniform \
                         is worn during class hours, grooming must be conservative, and hair must \
                         be of natural color. Accessories that disrupt learning are not allowed.",
                    ),
                ],
                suggestions: [
                    "What happens if I violate the dress code?",
                    "Is hair color regulated?",
                    "What is the uniform for PE days?",
                ],
            },
            CategoryEntry {
                category: Category::Attendance,
                title: "Attendance and Punctuality",
                focus_keywords: &["attendance", "absence", "tardy", "late"],
                faq_rules: vec![
                    FaqRule::new(
                        r"excused|medical|sick",
                        "Absences are excused for illness, family emergencies, or \
                         school-sanctioned activities. Submit a signed excuse letter or a medical \
                         certificate within three days of returning.",
                    ),
                    FaqRule::new(
                        r"tardy|\blate\b",
                        "Students are tardy after the second bell. Three unexcused tardies count \
                         as one unexcused absence on the attendance record.",
                    ),
                    FaqRule::new(
                        r".*",
                        "Daily attendance is required. Unexcused absences beyond twenty percent \
                         of class days put promotion and course credit at risk.",
                    ),
                ],
                suggestions: [
                    "How do I excuse an absence?",
                    "What happens after three tardies?",
                    "How many absences risk my promotion?",
                ],
            },
            CategoryEntry {
                category: Category::Appeals,
                title: "Appeals Process",
                focus_keywords: &["appeal", "committee", "hearing"],
                faq_rules: vec![
                    FaqRule::new(
                        r"how.*(file|submit|start)|where",
                        "File a written appeal with the Discipline Committee within five school \
                         days of the decision. Include your own statement and any supporting \
                         evidence.",
                    ),
                    FaqRule::new(
                        r".*",
                        "Students and guardians may appeal any disciplinary decision. Appeals are \
                         heard by the Discipline Committee, whose ruling is final.",
                    ),
                ],
                suggestions: [
                    "How do I file an appeal?",
                    "How long does an appeal take?",
                    "Who sits on the Discipline Committee?",
                ],
            },
            CategoryEntry {
                category: Category::Bullying,
                title: "Bullying and Harassment",
                focus_keywords: &["bully", "harassment", "cyberbully"],
                faq_rules: vec![
                    FaqRule::new(
                        r"report|tell|victim",
                        "Report bullying immediately to any teacher, to the guidance office, or \
                         through the anonymous report box. Every report is investigated within \
                         three school days.",
                    ),
                    FaqRule::new(
                        r".*",
                        "Bullying in any form is a major offense, including online harassment. \
                         Confirmed cases lead to suspension and a mandatory intervention program.",
                    ),
                ],
                suggestions: [
                    "How do I report bullying?",
                    "What happens to a confirmed bully?",
                    "Does cyberbullying count?",
                ],
            },
            CategoryEntry {
                category: Category::Suspension,
                title: "Suspension",
                focus_keywords: &["suspension", "suspended", "re-entry"],
                faq_rules: vec![
                    FaqRule::new(
                        r"how long|days|duration",
                        "Suspensions run from one to ten school days depending on the offense \
                         category and the student's prior record.",
                    ),
                    FaqRule::new(
                        r"work|missed|make.?up",
                        "Suspended students must complete all missed work. Credit for make-up \
                         work follows the academic department's late-work policy.",
                    ),
                    FaqRule::new(
                        r".*",
                        "Suspension removes a student from classes for a fixed period after a \
                         major offense. Parents are notified in writing and a re-entry conference \
                         is required before the student returns.",
                    ),
                ],
                suggestions: [
                    "How long can a suspension last?",
                    "Can I make up work during suspension?",
                    "What happens when I return from suspension?",
                ],
            },
            CategoryEntry {
                category: Category::Expulsion,
                title: "Expulsion and Dismissal",
                focus_keywords: &["expulsion", "expelled", "dismissal", "board"],
                faq_rules: vec![
                    FaqRule::new(
                        r"appeal|overturn",
                        "Expulsion decisions may be appealed to the school board within ten days. \
                         The student remains off campus while the appeal is pending.",
                    ),
                    FaqRule::new(
                        r".*",
                        "Expulsion permanently dismisses a student after the gravest offenses or \
                         habitual violations. It requires board approval and a formal hearing.",
                    ),
                ],
                suggestions: [
                    "Can an expulsion be appealed?",
                    "What offenses lead to expulsion?",
                    "Does expulsion appear on my transcript?",
                ],
            },
            CategoryEntry {
                category: Category::CategoryC,
                title: "Major Offenses (Category C)",
                focus_keywords: &["category c", "weapon", "drug", "assault"],
                faq_rules: vec![
                    FaqRule::new(
                        r"example|what counts|what is|include",
                        "Category C offenses include possession of weapons or prohibited \
                         substances, assault, and grave threats against any member of the school \
                         community.",
                    ),
                    FaqRule::new(
                        r".*",
                        "Category C covers the gravest offenses. A single confirmed Category C \
                         offense leads to expulsion proceedings and may be referred to \
                         authorities.",
                    ),
                ],
                suggestions: [
                    "What offenses fall under Category C?",
                    "Does a Category C offense mean expulsion?",
                    "Can a Category C decision be appealed?",
                ],
            },
            CategoryEntry {
                category: Category::MajorOffensesB,
                title: "Major Offenses (Category B)",
                focus_keywords: &[
                    "category b",
                    "cheating",
                    "plagiarism",
                    "gambling",
                    "alcohol",
                    "vandalism",
                ],
                faq_rules: vec![
                    FaqRule::new(
                        r"cheat|plagiar",
                        "Cheating and plagiarism are Category B offenses. The work receives a \
                         failing mark and the incident is recorded; a second offense triggers \
                         suspension.",
                    ),
                    FaqRule::new(
                        r"alcohol|gambl|vandal",
                        "Gambling, vandalism, and possession of alcohol on campus are Category B \
                         offenses, punishable by suspension and restitution where applicable.",
                    ),
                    FaqRule::new(
                        r".*",
                        "Category B offenses are serious breaches such as cheating, vandalism, or \
                         gambling. A first confirmed offense brings suspension of up to five days.",
                    ),
                ],
                suggestions: [
                    "What happens if I am caught cheating?",
                    "Is vandalism a suspension offense?",
                    "What are Category B offenses?",
                ],
            },
            CategoryEntry {
                category: Category::MajorOffensesA,
                title: "Major Offenses (Category A)",
                focus_keywords: &[
                    "category a",
                    "fighting",
                    "disrespect",
                    "cutting",
                    "recording",
                ],
                faq_rules: vec![
                    FaqRule::new(
                        r"fight",
                        "Fighting or instigating a fight is a Category A offense. Both parties \
                         receive disciplinary action after an investigation by the Discipline \
                         Office.",
                    ),
                    FaqRule::new(
                        r".*",
                        "Category A offenses include fighting, grave disrespect, cutting class, \
                         public displays of affection, and unauthorized recording on campus. \
                         Sanctions start at a parent conference and one to three days of \
                         suspension.",
                    ),
                ],
                suggestions: [
                    "What are Category A offenses?",
                    "What happens after a fight?",
                    "Is cutting class a major offense?",
                ],
            },
            CategoryEntry {
                category: Category::MinorOffenses,
                title: "Minor Offenses",
                focus_keywords: &["minor offense", "id", "tardiness", "loitering", "littering"],
                faq_rules: vec![
                    FaqRule::new(
                        r"\bid\b|identification",
                        "Carry your student ID at all times on campus. A forgotten ID is logged; \
                         three ID violations in one term become a recorded minor offense.",
                    ),
                    FaqRule::new(
                        r".*",
                        "Minor offenses include tardiness, loitering, littering, and ID \
                         violations. Each is recorded as a demerit; five demerits in one term \
                         trigger a parent conference.",
                    ),
                ],
                suggestions: [
                    "What are examples of minor offenses?",
                    "What happens if I forget my ID?",
                    "How long do demerits stay on my record?",
                ],
            },
            CategoryEntry {
                category: Category::Violations,
                title: "General Violations",
                focus_keywords: &["violation", "offense", "demerit", "discipline"],
                faq_rules: vec![
                    FaqRule::new(
                        r"report|who do i tell",
                        "Report suspected violations to your class adviser or to the Discipline \
                         Office. Reports are logged and reviewed before any demerit is recorded.",
                    ),
                    FaqRule::new(
                        r"demerit|point",
                        "Each confirmed violation carries demerit points based on severity. \
                         Points accumulate over the school year and reset at promotion.",
                    ),
                    FaqRule::new(
                        r".*",
                        "Violations are classified as minor offenses or major offenses under \
                         Categories A, B, and C. Consequences scale with the category and with \
                         repeated incidents.",
                    ),
                ],
                suggestions: [
                    "What counts as a major offense?",
                    "How many demerits lead to a conference?",
                    "How do I report a violation?",
                ],
            },
        ];

        Self {
            entries,
            general_suggestions: [
                "What is the dress code?",
                "How do I report bullying?",
                "How does the appeals process work?",
            ],
        }
    }

    /// Listed categories in catalog order. `General` is not among them.
    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    pub fn entry(&self, category: Category) -> Option<&CategoryEntry> {
        self.entries.iter().find(|e| e.category == category)
    }

    /// Focus keywords for a category; empty for `General` and anything
    /// else without an entry.
    pub fn focus_keywords(&self, category: Category) -> &'static [&'static str] {
        self.entry(category).map(|e| e.focus_keywords).unwrap_or(&[])
    }

    /// Follow-up suggestions, falling back to the general table.
    pub fn suggestions_for(&self, category: Category) -> [&'static str; 3] {
        self.entry(category)
            .map(|e| e.suggestions)
            .unwrap_or(self.general_suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eleven_listed_categories_general_absent() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.entries().len(), 11);
        assert!(catalog.entry(Category::General).is_none());
    }

    #[test]
    fn test_every_entry_is_complete() {
        let catalog = Catalog::standard();
        for entry in catalog.entries() {
            assert!(!entry.title.is_empty());
            assert!(!entry.focus_keywords.is_empty(), "{}", entry.category.key());
            assert!(!entry.faq_rules.is_empty(), "{}", entry.category.key());
            for s in &entry.suggestions {
                assert!(!s.is_empty());
            }
        }
    }

    #[test]
    fn test_all_patterns_compile() {
        let catalog = Catalog::standard();
        for entry in catalog.entries() {
            for rule in &entry.faq_rules {
                assert!(rule.compiled(), "broken pattern in {}", entry.category.key());
            }
        }
    }

    #[test]
    fn test_last_rule_matches_everything() {
        let catalog = Catalog::standard();
        for entry in catalog.entries() {
            let last = entry.faq_rules.last().unwrap();
            assert!(last.matches(""), "{} fallback", entry.category.key());
            assert!(last.matches("zzz unrelated"), "{} fallback", entry.category.key());
        }
    }

    #[test]
    fn test_faq_matching_is_case_insensitive() {
        let catalog = Catalog::standard();
        let entry = catalog.entry(Category::Bullying).unwrap();
        assert!(entry.faq_rules[0].matches("HOW DO I REPORT THIS"));
        assert!(entry.faq_rules[0].matches("how do i report this"));
    }

    #[test]
    fn test_general_gets_fallback_suggestions() {
        let catalog = Catalog::standard();
        let suggestions = catalog.suggestions_for(Category::General);
        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[0], "What is the dress code?");
        assert!(catalog.focus_keywords(Category::General).is_empty());
    }

    #[test]
    fn test_entry_lookup_by_category() {
        let catalog = Catalog::standard();
        let entry = catalog.entry(Category::DressCode).unwrap();
        assert_eq!(entry.title, "Dress Code and Grooming");
        assert_eq!(entry.category, Category::DressCode);
    }
}
