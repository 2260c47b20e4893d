//! Property tests for the retrieval index.

use mizan_core::config::RetrievalConfig;
use mizan_knowledge::{builtin_corpus, KnowledgeIndex};
use proptest::prelude::*;

fn built_index() -> KnowledgeIndex {
    KnowledgeIndex::build(builtin_corpus(), &RetrievalConfig::default())
}

proptest! {
    #[test]
    fn result_count_never_exceeds_top_k(query in "\\PC{0,80}", top_k in 1usize..20) {
        let index = built_index();
        prop_assert!(index.search(&query, top_k).len() <= top_k);
    }

    #[test]
    fn scores_are_sorted_and_positive(query in "[а-яё ]{0,60}") {
        let index = built_index();
        let results = index.search(&query, 10);
        for pair in results.windows(2) {
            prop_assert!(pair[0].relevance_score >= pair[1].relevance_score);
        }
        for r in &results {
            prop_assert!(r.relevance_score > 0.0);
            prop_assert!(r.relevance_score <= 1.0);
        }
    }

    #[test]
    fn search_is_deterministic(query in "[а-яё ]{0,60}") {
        let index = built_index();
        let a = index.search(&query, 10);
        let b = index.search(&query, 10);
        prop_assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            prop_assert_eq!(&x.entry.id, &y.entry.id);
            prop_assert_eq!(x.relevance_score, y.relevance_score);
        }
    }

    #[test]
    fn empty_index_returns_nothing(query in "\\PC{0,80}") {
        let index = KnowledgeIndex::build(vec![], &RetrievalConfig::default());
        prop_assert!(index.search(&query, 10).is_empty());
    }
}
