use indexmap::IndexMap;

use lexique_types::{GrammarPoint, VerbConjugation, VerbGroup, VocabularyEntry};

/// Group filtered vocabulary under a "unit lesson" composite key
/// ("U1 L1"). Groups appear in first-seen order; members keep their
/// original relative order.
pub fn group_vocabulary_by_lesson<'a>(
    entries: &[&'a VocabularyEntry],
) -> IndexMap<String, Vec<&'a VocabularyEntry>> {
    let mut groups: IndexMap<String, Vec<&'a VocabularyEntry>> = IndexMap::new();

    for &entry in entries {
        let key = format!("{} {}", entry.unit, entry.lesson);
        groups.entry(key).or_default().push(entry);
    }

    groups
}

/// Group grammar points by their category field, first-seen order
pub fn group_grammar_by_category(
    points: &[GrammarPoint],
) -> IndexMap<&str, Vec<&GrammarPoint>> {
    let mut groups: IndexMap<&str, Vec<&GrammarPoint>> = IndexMap::new();

    for point in points {
        groups.entry(point.category.as_str()).or_default().push(point);
    }

    groups
}

/// Group filtered verbs by conjugation class. All three groups are
/// present in first/second/third order even when empty, so the caller
/// can render a stable set of sections.
pub fn group_verbs<'a>(
    verbs: &[&'a VerbConjugation],
) -> IndexMap<VerbGroup, Vec<&'a VerbConjugation>> {
    let mut groups: IndexMap<VerbGroup, Vec<&'a VerbConjugation>> = VerbGroup::ALL
        .iter()
        .map(|group| (*group, Vec::new()))
        .collect();

    for &verb in verbs {
        groups[&verb.group].push(verb);
    }

    groups
}
