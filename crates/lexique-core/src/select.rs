use std::collections::BTreeSet;

use lexique_types::{BilingualText, VocabularyEntry};

use crate::filter::Selection;

/// Distinct values of a field, ascending, duplicates removed
pub fn distinct_sorted<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Units observed in the vocabulary, for the unit picker
pub fn distinct_units(entries: &[VocabularyEntry]) -> Vec<String> {
    distinct_sorted(entries.iter().map(|entry| entry.unit.as_str()))
}

/// Lessons available within the selected unit, for the lesson picker.
/// With no unit constraint this is every lesson in the collection.
pub fn distinct_lessons(entries: &[VocabularyEntry], unit: &Selection) -> Vec<String> {
    distinct_sorted(
        entries
            .iter()
            .filter(|entry| unit.matches(&entry.unit))
            .map(|entry| entry.lesson.as_str()),
    )
}

/// Units observed in the bilingual texts
pub fn distinct_text_units(texts: &[BilingualText]) -> Vec<String> {
    distinct_sorted(texts.iter().map(|text| text.unit.as_str()))
}
