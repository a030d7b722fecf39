pub mod types;

pub use types::{
    BilingualText, Dataset, GrammarPoint, VerbConjugation, VerbGroup, VocabularyEntry,
};
