use anyhow::{Context, Result};

use lexique_core::{
    DatasetStats, Selection, TextFilter, VerbFilter, VocabularyFilter, classify_vocabulary,
    group_grammar_by_category, group_verbs, group_vocabulary_by_lesson,
};
use lexique_data::DatasetSource;
use lexique_types::{VerbGroup, VocabularyEntry};

/// Human label for the known grammar categories; unknown ones render as
/// their raw key.
fn category_label(category: &str) -> &str {
    match category {
        "sentence_structure" => "Sentence structure",
        "verb_tense" => "Verb tenses",
        "question" => "Questions",
        "negation" => "Negation",
        "article" => "Articles",
        "pronoun" => "Pronouns",
        "other" => "Other",
        raw => raw,
    }
}

fn print_entry(entry: &VocabularyEntry) {
    let tag = entry.part_of_speech.as_deref().unwrap_or("");
    let phonetic = entry
        .phonetic
        .as_deref()
        .map(|p| format!(" [{p}]"))
        .unwrap_or_default();

    println!("  {} {}{} — {}", entry.french, tag, phonetic, entry.chinese);

    if let Some(example) = entry.example_fr.as_deref() {
        println!("      {example}");
        if let Some(example_zh) = entry.example_zh.as_deref() {
            println!("      {example_zh}");
        }
    }
}

pub async fn vocabulary(
    source: &dyn DatasetSource,
    unit: &str,
    lesson: &str,
    search: &str,
) -> Result<()> {
    let entries = source
        .fetch_vocabulary()
        .await
        .context("Failed to load vocabulary")?;

    let filter = VocabularyFilter::new(Selection::parse(unit), Selection::parse(lesson), search);
    let filtered = filter.apply(&entries);
    tracing::debug!(
        "Vocabulary view: {} of {} entries match",
        filtered.len(),
        entries.len()
    );

    if filtered.is_empty() {
        println!("No matching vocabulary.");
        return Ok(());
    }

    for (lesson_key, members) in group_vocabulary_by_lesson(&filtered) {
        println!("{lesson_key} ({})", members.len());
        for entry in members {
            print_entry(entry);
        }
        println!();
    }

    Ok(())
}

pub async fn part_of_speech(source: &dyn DatasetSource) -> Result<()> {
    let entries = source
        .fetch_vocabulary()
        .await
        .context("Failed to load vocabulary")?;

    for (bucket, members) in classify_vocabulary(&entries) {
        println!("{} ({}) — {}", bucket.label(), bucket.tag(), members.len());
        for entry in members {
            print_entry(entry);
        }
        println!();
    }

    Ok(())
}

pub async fn grammar(source: &dyn DatasetSource) -> Result<()> {
    let points = source
        .fetch_grammar()
        .await
        .context("Failed to load grammar notes")?;

    if points.is_empty() {
        println!("No grammar notes.");
        return Ok(());
    }

    for (category, members) in group_grammar_by_category(&points) {
        println!("## {}", category_label(category));
        for point in members {
            println!("  {}", point.title);
            println!("      {}", point.content);
            for example in point.example_lines() {
                println!("      > {example}");
            }
        }
        println!();
    }

    Ok(())
}

pub async fn verbs(
    source: &dyn DatasetSource,
    group: Option<VerbGroup>,
    search: &str,
) -> Result<()> {
    let all_verbs = source.fetch_verbs().await.context("Failed to load verbs")?;

    let filter = VerbFilter::new(group, search);
    let filtered = filter.apply(&all_verbs);
    tracing::debug!(
        "Verbs view: {} of {} verbs match",
        filtered.len(),
        all_verbs.len()
    );

    if filtered.is_empty() {
        println!("No matching verbs.");
        return Ok(());
    }

    for (group, members) in group_verbs(&filtered) {
        println!(
            "Group {} ({}) — {}",
            group.as_str(),
            group.ending_hint(),
            members.len()
        );
        for verb in members {
            println!("  {} — {}", verb.verb, verb.chinese);
            for (pronoun, form) in verb.person_forms() {
                if let Some(form) = form {
                    println!("      {pronoun:<5} {form}");
                }
            }
            if let Some(notes) = verb.notes.as_deref() {
                println!("      note: {notes}");
            }
        }
        println!();
    }

    Ok(())
}

pub async fn texts(source: &dyn DatasetSource, unit: &str) -> Result<()> {
    let all_texts = source.fetch_texts().await.context("Failed to load texts")?;

    let filter = TextFilter::new(Selection::parse(unit));
    let filtered = filter.apply(&all_texts);

    if filtered.is_empty() {
        println!("No matching texts.");
        return Ok(());
    }

    for text in filtered {
        let title = text.title.as_deref().unwrap_or("(untitled)");
        let section = text
            .section
            .as_deref()
            .map(|s| format!(" · {s}"))
            .unwrap_or_default();

        println!("{} {}{} — {}", text.unit, text.lesson, section, title);
        println!("{}", text.french_text);
        println!("{}", text.chinese_text);
        println!();
    }

    Ok(())
}

pub async fn stats(source: &dyn DatasetSource) -> Result<()> {
    let vocabulary = source
        .fetch_vocabulary()
        .await
        .context("Failed to load vocabulary")?;
    let grammar = source
        .fetch_grammar()
        .await
        .context("Failed to load grammar notes")?;
    let verbs = source.fetch_verbs().await.context("Failed to load verbs")?;
    let texts = source.fetch_texts().await.context("Failed to load texts")?;

    let stats = DatasetStats::new(&vocabulary, &grammar, &verbs, &texts);

    println!("vocabulary  {}", stats.vocabulary);
    println!("grammar     {}", stats.grammar);
    println!("verbs       {}", stats.verbs);
    println!("texts       {}", stats.texts);

    Ok(())
}
