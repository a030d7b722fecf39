use lexique_types::{BilingualText, VerbConjugation, VerbGroup, VocabularyEntry};

use crate::preprocess::normalize_keyword;

/// An equality constraint on one grouping field: either unconstrained
/// (the "all" sentinel in the UI) or an exact match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Parse a UI/CLI value, where "all" (any case) means no constraint
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(only) => only == value,
        }
    }
}

/// Criteria for the vocabulary view: unit AND lesson AND keyword.
#[derive(Debug, Clone, Default)]
pub struct VocabularyFilter {
    pub unit: Selection,
    pub lesson: Selection,
    keyword: String,
}

impl VocabularyFilter {
    pub fn new(unit: Selection, lesson: Selection, keyword: &str) -> Self {
        Self {
            unit,
            lesson,
            keyword: normalize_keyword(keyword),
        }
    }

    /// Keyword match: case-insensitive substring of the French headword,
    /// verbatim substring of the Chinese gloss (non-Latin script, no case
    /// folding), or verbatim substring of the part-of-speech tag.
    fn matches_keyword(&self, entry: &VocabularyEntry) -> bool {
        if self.keyword.is_empty() {
            return true;
        }

        let lowered = self.keyword.to_lowercase();

        entry.french.to_lowercase().contains(&lowered)
            || entry.chinese.contains(&self.keyword)
            || entry
                .part_of_speech
                .as_deref()
                .is_some_and(|pos| pos.contains(&self.keyword))
    }

    pub fn matches(&self, entry: &VocabularyEntry) -> bool {
        self.unit.matches(&entry.unit)
            && self.lesson.matches(&entry.lesson)
            && self.matches_keyword(entry)
    }

    /// Filtered view: a subsequence of `entries` in original order
    pub fn apply<'a>(&self, entries: &'a [VocabularyEntry]) -> Vec<&'a VocabularyEntry> {
        entries.iter().filter(|entry| self.matches(entry)).collect()
    }
}

/// Criteria for the verbs view: conjugation group AND keyword.
#[derive(Debug, Clone, Default)]
pub struct VerbFilter {
    pub group: Option<VerbGroup>,
    keyword: String,
}

impl VerbFilter {
    pub fn new(group: Option<VerbGroup>, keyword: &str) -> Self {
        Self {
            group,
            keyword: normalize_keyword(keyword),
        }
    }

    // Both sides are lower-cased here, unlike the vocabulary match; the
    // source verb table has always been searched this way.
    fn matches_keyword(&self, verb: &VerbConjugation) -> bool {
        if self.keyword.is_empty() {
            return true;
        }

        let lowered = self.keyword.to_lowercase();

        verb.verb.to_lowercase().contains(&lowered)
            || verb.chinese.to_lowercase().contains(&lowered)
    }

    pub fn matches(&self, verb: &VerbConjugation) -> bool {
        self.group.is_none_or(|group| group == verb.group) && self.matches_keyword(verb)
    }

    pub fn apply<'a>(&self, verbs: &'a [VerbConjugation]) -> Vec<&'a VerbConjugation> {
        verbs.iter().filter(|verb| self.matches(verb)).collect()
    }
}

/// Criteria for the bilingual-texts view: unit only.
#[derive(Debug, Clone, Default)]
pub struct TextFilter {
    pub unit: Selection,
}

impl TextFilter {
    pub fn new(unit: Selection) -> Self {
        Self { unit }
    }

    pub fn apply<'a>(&self, texts: &'a [BilingualText]) -> Vec<&'a BilingualText> {
        texts
            .iter()
            .filter(|text| self.unit.matches(&text.unit))
            .collect()
    }
}
