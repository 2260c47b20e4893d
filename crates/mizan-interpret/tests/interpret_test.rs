//! Integration tests: interpreter over purpose-built corpora.

use mizan_analysis::SituationClassifier;
use mizan_core::config::RetrievalConfig;
use mizan_core::models::{KnowledgeEntry, SourceType};
use mizan_interpret::ValueInterpreter;
use mizan_knowledge::{builtin_corpus, KnowledgeIndex};

fn entry(id: &str, source_type: SourceType, content: &str, tags: &[&str]) -> KnowledgeEntry {
    KnowledgeEntry {
        id: id.into(),
        source_type,
        title: format!("Запись {id}"),
        content: content.into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        reference: format!("Ссылка {id}"),
        original_language_text: matches!(source_type, SourceType::Scripture | SourceType::Tradition)
            .then(|| "نص".to_string()),
        authenticity_grade: matches!(source_type, SourceType::Tradition)
            .then(|| "сахих".to_string()),
    }
}

/// One entry per source type, lexically disjoint.
fn three_entry_corpus() -> Vec<KnowledgeEntry> {
    vec![
        entry(
            "s1",
            SourceType::Scripture,
            "о терпении и стойкости",
            &["терпение"],
        ),
        entry(
            "t1",
            SourceType::Tradition,
            "о милосердии к людям",
            &["милосердие"],
        ),
        entry(
            "p1",
            SourceType::Principle,
            "о взаимности поступков",
            &["взаимность"],
        ),
    ]
}

#[test]
fn tag_only_query_yields_exactly_one_bucket() {
    let index = KnowledgeIndex::build(three_entry_corpus(), &RetrievalConfig::default());
    let interpreter = ValueInterpreter::new(&index, RetrievalConfig::default());
    let classifier = SituationClassifier::new();

    // "терпение" appears only in the scripture entry's content and tag.
    let situation = "терпение";
    let analysis = classifier.classify(situation);
    let reading = interpreter.interpret(situation, &analysis).unwrap();

    assert_eq!(reading.relevant_sources.len(), 1);
    assert_eq!(reading.relevant_sources[0].source_type, SourceType::Scripture);
    assert_eq!(reading.interpretations.len(), 1);
    assert_eq!(reading.interpretations[0].perspective, "Коранический взгляд");
}

#[test]
fn no_match_yields_fallback_interpretation() {
    let index = KnowledgeIndex::build(three_entry_corpus(), &RetrievalConfig::default());
    let interpreter = ValueInterpreter::new(&index, RetrievalConfig::default());
    let classifier = SituationClassifier::new();

    let situation = "совсем посторонние слова без пересечений";
    let analysis = classifier.classify(situation);
    let reading = interpreter.interpret(situation, &analysis).unwrap();

    assert!(reading.relevant_sources.is_empty());
    assert_eq!(reading.interpretations.len(), 1);
    assert_eq!(reading.interpretations[0].perspective, "Общее замечание");
}

#[test]
fn empty_corpus_degrades_to_fallback() {
    let index = KnowledgeIndex::build(vec![], &RetrievalConfig::default());
    let interpreter = ValueInterpreter::new(&index, RetrievalConfig::default());
    let classifier = SituationClassifier::new();

    let situation = "любая ситуация";
    let analysis = classifier.classify(situation);
    let reading = interpreter.interpret(situation, &analysis).unwrap();

    assert!(reading.relevant_sources.is_empty());
    assert_eq!(reading.interpretations.len(), 1);
    assert_eq!(reading.knowledge_stats.total_entries, 0);
}

#[test]
fn groups_are_never_empty_over_builtin_corpus() {
    let index = KnowledgeIndex::build(builtin_corpus(), &RetrievalConfig::default());
    let interpreter = ValueInterpreter::new(&index, RetrievalConfig::default());
    let classifier = SituationClassifier::new();

    let situation = "Я обещал другу сохранить секрет, но узнал, что это может навредить его семье";
    let analysis = classifier.classify(situation);
    let reading = interpreter.interpret(situation, &analysis).unwrap();

    for group in &reading.relevant_sources {
        assert!(!group.items.is_empty(), "empty bucket: {}", group.label);
    }
    assert_eq!(reading.relevant_sources.len(), reading.interpretations.len());
    assert_eq!(reading.knowledge_stats.total_entries, index.len());
}
