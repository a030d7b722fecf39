use lexique_types::VerbGroup;

use crate::filter::{Selection, TextFilter, VerbFilter, VocabularyFilter};
use crate::tests::fixtures::{text, verb, vocab};

fn sample_vocabulary() -> Vec<lexique_types::VocabularyEntry> {
    vec![
        vocab(1, "U1", "L1", "maison", Some("n.f."), "房子"),
        vocab(2, "U1", "L2", "grand", Some("adj."), "大的"),
        vocab(3, "U2", "L1", "aller", Some("v."), "去"),
        vocab(4, "U2", "L3", "Bonjour", None, "你好"),
    ]
}

#[test]
fn empty_keyword_with_no_constraints_is_identity() {
    let entries = sample_vocabulary();
    let filter = VocabularyFilter::new(Selection::All, Selection::All, "");

    let filtered = filter.apply(&entries);

    assert_eq!(filtered.len(), entries.len());
    let ids: Vec<i64> = filtered.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn whitespace_only_keyword_matches_everything() {
    let entries = sample_vocabulary();
    let filter = VocabularyFilter::new(Selection::All, Selection::All, "   ");

    assert_eq!(filter.apply(&entries).len(), entries.len());
}

#[test]
fn filtering_preserves_original_relative_order() {
    let entries = sample_vocabulary();
    let filter = VocabularyFilter::new(Selection::Only("U1".to_string()), Selection::All, "");

    let ids: Vec<i64> = filter.apply(&entries).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn unit_and_lesson_constraints_compose_with_and() {
    let entries = sample_vocabulary();
    let filter = VocabularyFilter::new(
        Selection::Only("U1".to_string()),
        Selection::Only("L2".to_string()),
        "",
    );

    let ids: Vec<i64> = filter.apply(&entries).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn french_match_is_case_insensitive() {
    let entries = sample_vocabulary();
    let filter = VocabularyFilter::new(Selection::All, Selection::All, "bonjour");

    let ids: Vec<i64> = filter.apply(&entries).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![4]);
}

#[test]
fn chinese_match_is_verbatim_substring() {
    let entries = sample_vocabulary();
    let filter = VocabularyFilter::new(Selection::All, Selection::All, "房");

    let ids: Vec<i64> = filter.apply(&entries).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn part_of_speech_tag_is_searchable_when_present() {
    let entries = sample_vocabulary();
    let filter = VocabularyFilter::new(Selection::All, Selection::All, "adj");

    let ids: Vec<i64> = filter.apply(&entries).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn no_match_yields_empty_view_not_error() {
    let entries = sample_vocabulary();
    let filter = VocabularyFilter::new(Selection::All, Selection::All, "zzz");

    assert!(filter.apply(&entries).is_empty());
}

// Scenario from the curriculum data: "mai" finds "maison" under no
// unit/lesson constraint.
#[test]
fn keyword_mai_finds_maison() {
    let entries = vec![vocab(1, "U1", "L1", "maison", Some("n.f."), "房子")];
    let filter = VocabularyFilter::new(Selection::parse("all"), Selection::parse("all"), "mai");

    let filtered = filter.apply(&entries);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 1);
}

#[test]
fn selection_parse_treats_all_as_unconstrained() {
    assert_eq!(Selection::parse("all"), Selection::All);
    assert_eq!(Selection::parse("ALL"), Selection::All);
    assert_eq!(Selection::parse("U1"), Selection::Only("U1".to_string()));
}

#[test]
fn verb_filter_matches_group_and_keyword_together() {
    let verbs = vec![
        verb(1, "parler", "说话", VerbGroup::First),
        verb(2, "finir", "结束", VerbGroup::Second),
        verb(3, "aller", "去", VerbGroup::Third),
    ];

    let by_group = VerbFilter::new(Some(VerbGroup::Third), "");
    let ids: Vec<i64> = by_group.apply(&verbs).iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![3]);

    let by_both = VerbFilter::new(Some(VerbGroup::First), "FIN");
    assert!(by_both.apply(&verbs).is_empty());

    let by_chinese = VerbFilter::new(None, "结束");
    let ids: Vec<i64> = by_chinese.apply(&verbs).iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn text_filter_constrains_unit_only() {
    let texts = vec![text(1, "U1", "L1", 1), text(2, "U2", "L1", 2)];

    let all = TextFilter::new(Selection::All);
    assert_eq!(all.apply(&texts).len(), 2);

    let u2 = TextFilter::new(Selection::Only("U2".to_string()));
    let ids: Vec<i64> = u2.apply(&texts).iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn fullwidth_keyword_matches_ascii_data() {
    let entries = vec![vocab(1, "U1", "L1", "maison", None, "房子")];
    // "ｍａｉ" typed through a full-width IME
    let filter = VocabularyFilter::new(Selection::All, Selection::All, "ｍａｉ");

    assert_eq!(filter.apply(&entries).len(), 1);
}
