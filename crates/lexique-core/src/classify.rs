use indexmap::IndexMap;

use lexique_types::VocabularyEntry;

/// The eight part-of-speech buckets of the classified vocabulary view,
/// in classification order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    NounMasculine,
    NounFeminine,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Preposition,
    Other,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 8] = [
        PartOfSpeech::NounMasculine,
        PartOfSpeech::NounFeminine,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
        PartOfSpeech::Pronoun,
        PartOfSpeech::Preposition,
        PartOfSpeech::Other,
    ];

    /// Conventional dictionary abbreviation for the bucket
    pub fn tag(&self) -> &'static str {
        match self {
            PartOfSpeech::NounMasculine => "n.m.",
            PartOfSpeech::NounFeminine => "n.f.",
            PartOfSpeech::Verb => "v.",
            PartOfSpeech::Adjective => "adj.",
            PartOfSpeech::Adverb => "adv.",
            PartOfSpeech::Pronoun => "pron.",
            PartOfSpeech::Preposition => "prép.",
            PartOfSpeech::Other => "—",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PartOfSpeech::NounMasculine => "Nom masculin",
            PartOfSpeech::NounFeminine => "Nom féminin",
            PartOfSpeech::Verb => "Verbe",
            PartOfSpeech::Adjective => "Adjectif",
            PartOfSpeech::Adverb => "Adverbe",
            PartOfSpeech::Pronoun => "Pronom",
            PartOfSpeech::Preposition => "Préposition",
            PartOfSpeech::Other => "Autres",
        }
    }
}

/// Classify a free-text part-of-speech tag into exactly one bucket.
///
/// The tag strings are uncontrolled source data ("n.m.", "v. 动词",
/// "adj./adv." ...), so this is a first-match-wins pass over ordered
/// substring rules. The rule order is a deliberate tie-break: "n.m" is
/// tested before "adj", so a combined tag lands in the noun bucket.
/// Changing the order changes classification results.
///
/// Returns `None` for an empty (or whitespace-only) tag; such entries
/// belong to no bucket, not to `Other`.
pub fn classify_tag(tag: &str) -> Option<PartOfSpeech> {
    let tag = tag.trim();
    if tag.is_empty() {
        return None;
    }

    let pos = tag.to_lowercase();

    let bucket = if pos.contains("n.m") {
        PartOfSpeech::NounMasculine
    } else if pos.contains("n.f") {
        PartOfSpeech::NounFeminine
    } else if pos.contains("v.") || pos.contains("动词") {
        PartOfSpeech::Verb
    } else if pos.contains("adj") || pos.contains("形容词") {
        PartOfSpeech::Adjective
    } else if pos.contains("adv") || pos.contains("副词") {
        PartOfSpeech::Adverb
    } else if pos.contains("pron") || pos.contains("代词") {
        PartOfSpeech::Pronoun
    } else if pos.contains("prép") || pos.contains("prep") || pos.contains("介词") {
        PartOfSpeech::Preposition
    } else {
        PartOfSpeech::Other
    };

    Some(bucket)
}

/// Partition vocabulary entries into the eight buckets. Every bucket is
/// present in the result, empty or not, in classification order; entries
/// without a tag are left out entirely.
pub fn classify_vocabulary<'a>(
    entries: &'a [VocabularyEntry],
) -> IndexMap<PartOfSpeech, Vec<&'a VocabularyEntry>> {
    let mut buckets: IndexMap<PartOfSpeech, Vec<&'a VocabularyEntry>> = PartOfSpeech::ALL
        .iter()
        .map(|bucket| (*bucket, Vec::new()))
        .collect();

    for entry in entries {
        let Some(tag) = entry.part_of_speech.as_deref() else {
            continue;
        };

        if let Some(bucket) = classify_tag(tag) {
            buckets[&bucket].push(entry);
        }
    }

    buckets
}
