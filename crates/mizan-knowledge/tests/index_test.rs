//! Integration tests for the retrieval index over the built-in corpus.

use mizan_core::config::RetrievalConfig;
use mizan_knowledge::{builtin_corpus, KnowledgeIndex};

fn built_index() -> KnowledgeIndex {
    KnowledgeIndex::build(builtin_corpus(), &RetrievalConfig::default())
}

#[test]
fn builtin_corpus_covers_all_three_source_types() {
    let stats = built_index().stats();
    assert!(stats.scripture > 0);
    assert!(stats.tradition > 0);
    assert!(stats.principle > 0);
    assert_eq!(
        stats.total_entries,
        stats.scripture + stats.tradition + stats.principle
    );
}

#[test]
fn search_respects_top_k() {
    let index = built_index();
    let results = index.search("честность правда доверие вред справедливость", 3);
    assert!(results.len() <= 3);
}

#[test]
fn scores_descend_monotonically() {
    let index = built_index();
    let results = index.search("честность и доверие между людьми", 10);
    assert!(!results.is_empty());
    for pair in results.windows(2) {
        assert!(pair[0].relevance_score >= pair[1].relevance_score);
    }
}

#[test]
fn scores_stay_in_unit_interval() {
    let index = built_index();
    for r in index.search("справедливость прощение наказание семья", 10) {
        assert!(r.relevance_score > 0.0 && r.relevance_score <= 1.0);
    }
}

#[test]
fn rebuild_is_idempotent() {
    let query = "обман ложь скрыть правду от друга";
    let a = built_index().search(query, 10);
    let b = built_index().search(query, 10);
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.entry.id, y.entry.id);
        assert_eq!(x.relevance_score, y.relevance_score);
    }
}

#[test]
fn entry_content_as_query_ranks_that_entry_near_top() {
    let corpus = builtin_corpus();
    let target = corpus
        .iter()
        .find(|e| e.id == "tradition-003")
        .unwrap()
        .clone();
    let index = KnowledgeIndex::build(corpus, &RetrievalConfig::default());
    let results = index.search(&target.content, 5);
    assert!(!results.is_empty());
    let rank = results
        .iter()
        .position(|r| r.entry.id == target.id)
        .expect("self-query must retrieve the entry");
    // IDF weighting can let a close neighbor tie, but the entry must be
    // at or near the top.
    assert!(rank <= 1, "expected rank <= 1, got {rank}");
}

#[test]
fn secret_scenario_query_reaches_trust_sources() {
    let index = built_index();
    let results = index.search(
        "Я обещал другу сохранить секрет, но узнал, что это может навредить его семье",
        10,
    );
    assert!(!results.is_empty());
    // The trust/secret-keeping hadith and the harm prohibition are both
    // lexically close to this situation.
    let ids: Vec<&str> = results.iter().map(|r| r.entry.id.as_str()).collect();
    assert!(
        ids.contains(&"tradition-004") || ids.contains(&"tradition-005"),
        "expected a trust or harm source in {ids:?}"
    );
}
