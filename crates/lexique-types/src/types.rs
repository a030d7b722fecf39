use serde::{Deserialize, Serialize};

/// One of the four static JSON resources the viewer is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Vocabulary,
    Grammar,
    Verbs,
    Texts,
}

impl Dataset {
    /// Resource file name under the data base path
    pub fn file_name(&self) -> &'static str {
        match self {
            Dataset::Vocabulary => "vocabulary.json",
            Dataset::Grammar => "grammar.json",
            Dataset::Verbs => "verbs.json",
            Dataset::Texts => "texts.json",
        }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Dataset::Vocabulary => "vocabulary",
            Dataset::Grammar => "grammar",
            Dataset::Verbs => "verbs",
            Dataset::Texts => "texts",
        };
        f.write_str(name)
    }
}

/// A vocabulary card: French headword with Chinese gloss, attached to a
/// unit/lesson pair. `part_of_speech` is free text straight from the
/// source data, not a validated tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    pub id: i64,
    pub unit: String,
    pub lesson: String,
    pub french: String,
    #[serde(default)]
    pub part_of_speech: Option<String>,
    pub chinese: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub example_fr: Option<String>,
    #[serde(default)]
    pub example_zh: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A grammar note. `category` is an open grouping key ("verb_tense",
/// "negation", ...); `examples` is a newline-delimited block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarPoint {
    pub id: i64,
    pub category: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub examples: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub lesson: Option<String>,
    pub order: i64,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl GrammarPoint {
    /// Example sentences split out of the newline-delimited block
    pub fn example_lines(&self) -> Vec<&str> {
        self.examples
            .as_deref()
            .map(|block| {
                block
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Conjugation class of a French verb. Closed set, unlike the free-text
/// part-of-speech tags on vocabulary entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbGroup {
    First,
    Second,
    Third,
}

impl VerbGroup {
    pub const ALL: [VerbGroup; 3] = [VerbGroup::First, VerbGroup::Second, VerbGroup::Third];

    pub fn as_str(&self) -> &'static str {
        match self {
            VerbGroup::First => "first",
            VerbGroup::Second => "second",
            VerbGroup::Third => "third",
        }
    }

    /// Typical infinitive ending shown next to the group
    pub fn ending_hint(&self) -> &'static str {
        match self {
            VerbGroup::First => "-er",
            VerbGroup::Second => "-ir",
            VerbGroup::Third => "irregular",
        }
    }
}

/// Present-tense conjugation table for one verb. Person slots may be
/// missing when the source table is incomplete.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerbConjugation {
    pub id: i64,
    pub verb: String,
    pub chinese: String,
    pub group: VerbGroup,
    #[serde(default)]
    pub je: Option<String>,
    #[serde(default)]
    pub tu: Option<String>,
    #[serde(default)]
    pub il: Option<String>,
    #[serde(default)]
    pub nous: Option<String>,
    #[serde(default)]
    pub vous: Option<String>,
    #[serde(default)]
    pub ils: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl VerbConjugation {
    /// Person slots in fixed pronoun order (je, tu, il, nous, vous, ils)
    pub fn person_forms(&self) -> [(&'static str, Option<&str>); 6] {
        [
            ("je", self.je.as_deref()),
            ("tu", self.tu.as_deref()),
            ("il", self.il.as_deref()),
            ("nous", self.nous.as_deref()),
            ("vous", self.vous.as_deref()),
            ("ils", self.ils.as_deref()),
        ]
    }
}

/// A bilingual reading passage for one lesson.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BilingualText {
    pub id: i64,
    pub unit: String,
    pub lesson: String,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    pub french_text: String,
    pub chinese_text: String,
    pub order: i64,
    #[serde(default)]
    pub created_at: Option<String>,
}
