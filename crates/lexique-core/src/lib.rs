pub mod classify;
pub mod filter;
pub mod group;
pub mod preprocess;
pub mod select;
pub mod stats;

pub use classify::{PartOfSpeech, classify_tag, classify_vocabulary};
pub use filter::{Selection, TextFilter, VerbFilter, VocabularyFilter};
pub use group::{group_grammar_by_category, group_verbs, group_vocabulary_by_lesson};
pub use select::{distinct_lessons, distinct_sorted, distinct_text_units, distinct_units};
pub use stats::DatasetStats;

#[cfg(test)]
mod tests;
