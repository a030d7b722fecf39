use lexique_types::{BilingualText, GrammarPoint, VerbConjugation, VocabularyEntry};

/// Per-dataset record counts for the overview page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetStats {
    pub vocabulary: usize,
    pub grammar: usize,
    pub verbs: usize,
    pub texts: usize,
}

impl DatasetStats {
    pub fn new(
        vocabulary: &[VocabularyEntry],
        grammar: &[GrammarPoint],
        verbs: &[VerbConjugation],
        texts: &[BilingualText],
    ) -> Self {
        Self {
            vocabulary: vocabulary.len(),
            grammar: grammar.len(),
            verbs: verbs.len(),
            texts: texts.len(),
        }
    }
}
