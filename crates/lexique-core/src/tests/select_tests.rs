use crate::filter::Selection;
use crate::select::{distinct_lessons, distinct_sorted, distinct_text_units, distinct_units};
use crate::stats::DatasetStats;
use crate::tests::fixtures::{grammar, text, verb, vocab};
use lexique_types::VerbGroup;

#[test]
fn distinct_sorted_removes_duplicates_and_sorts() {
    let values = distinct_sorted(["U2", "U1", "U2", "U1"]);
    assert_eq!(values, vec!["U1", "U2"]);
}

#[test]
fn distinct_units_over_vocabulary() {
    let entries = vec![
        vocab(1, "U2", "L1", "a", None, "甲"),
        vocab(2, "U1", "L1", "b", None, "乙"),
        vocab(3, "U1", "L2", "c", None, "丙"),
    ];

    assert_eq!(distinct_units(&entries), vec!["U1", "U2"]);
}

#[test]
fn lessons_are_prefiltered_by_selected_unit() {
    let entries = vec![
        vocab(1, "U1", "L1", "a", None, "甲"),
        vocab(2, "U1", "L2", "b", None, "乙"),
        vocab(3, "U2", "L9", "c", None, "丙"),
    ];

    let within_u1 = distinct_lessons(&entries, &Selection::Only("U1".to_string()));
    assert_eq!(within_u1, vec!["L1", "L2"]);

    let unconstrained = distinct_lessons(&entries, &Selection::All);
    assert_eq!(unconstrained, vec!["L1", "L2", "L9"]);
}

#[test]
fn distinct_units_over_texts() {
    let texts = vec![text(1, "U1", "L1", 1), text(2, "U1", "L2", 2)];
    assert_eq!(distinct_text_units(&texts), vec!["U1"]);
}

#[test]
fn stats_count_each_dataset() {
    let vocabulary = vec![vocab(1, "U1", "L1", "a", None, "甲")];
    let grammar_points = vec![grammar(1, "article", "le/la", 1)];
    let verbs = vec![
        verb(1, "parler", "说话", VerbGroup::First),
        verb(2, "finir", "结束", VerbGroup::Second),
    ];
    let texts: Vec<lexique_types::BilingualText> = Vec::new();

    let stats = DatasetStats::new(&vocabulary, &grammar_points, &verbs, &texts);

    assert_eq!(stats.vocabulary, 1);
    assert_eq!(stats.grammar, 1);
    assert_eq!(stats.verbs, 2);
    assert_eq!(stats.texts, 0);
}
