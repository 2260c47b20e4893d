//! Term-weighted vector index over the knowledge corpus.
//!
//! Build: one pass over every entry's `content + tags`, bag of lower-cased
//! unigrams and bigrams, tf × smoothed idf weights, L2-normalized sparse
//! rows. Query: same tokenization projected onto the build-time vocabulary
//! (unseen terms dropped), ranked by cosine similarity.

use std::collections::{HashMap, HashSet};

use mizan_core::config::RetrievalConfig;
use mizan_core::models::{KnowledgeEntry, KnowledgeStats, ScoredEntry, SourceType};
use tracing::debug;

use crate::tokenize;

/// Immutable retrieval index. Rebuilding from the same corpus yields the
/// same ranking for every query.
pub struct KnowledgeIndex {
    entries: Vec<KnowledgeEntry>,
    /// term → column id, assigned in first-seen order over the corpus.
    vocabulary: HashMap<String, usize>,
    /// Smoothed inverse document frequency per column.
    idf: Vec<f64>,
    /// One L2-normalized sparse row per entry, sorted by column id.
    rows: Vec<Vec<(usize, f64)>>,
    bigrams: bool,
}

impl KnowledgeIndex {
    /// Build the index over a corpus. An empty corpus yields a permanently
    /// empty index: every search returns no results.
    pub fn build(corpus: Vec<KnowledgeEntry>, config: &RetrievalConfig) -> Self {
        let n_docs = corpus.len();

        // Tokenize each entry's content + tags.
        let docs: Vec<Vec<String>> = corpus
            .iter()
            .map(|e| {
                let mut text = e.content.clone();
                for tag in &e.tags {
                    text.push(' ');
                    text.push_str(tag);
                }
                tokenize::terms(&text, config.bigrams)
            })
            .collect();

        // Document frequency per term.
        let mut df: HashMap<&str, usize> = HashMap::new();
        for terms in &docs {
            let unique: HashSet<&str> = terms.iter().map(String::as_str).collect();
            for term in unique {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        // Vocabulary in first-seen order, suppressing near-ubiquitous terms.
        // The suppression is skipped for single-document corpora, where every
        // term trivially reaches ratio 1.0.
        let max_df = if n_docs > 1 {
            (config.max_df_ratio * n_docs as f64).floor() as usize
        } else {
            n_docs
        };
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut idf: Vec<f64> = Vec::new();
        for terms in &docs {
            for term in terms {
                if vocabulary.contains_key(term) {
                    continue;
                }
                let freq = df[term.as_str()];
                if freq > max_df {
                    continue;
                }
                vocabulary.insert(term.clone(), idf.len());
                idf.push(((1.0 + n_docs as f64) / (1.0 + freq as f64)).ln() + 1.0);
            }
        }

        // tf × idf rows, L2-normalized.
        let rows: Vec<Vec<(usize, f64)>> = docs
            .iter()
            .map(|terms| {
                let mut counts: HashMap<usize, f64> = HashMap::new();
                for term in terms {
                    if let Some(&col) = vocabulary.get(term) {
                        *counts.entry(col).or_insert(0.0) += 1.0;
                    }
                }
                let mut row: Vec<(usize, f64)> =
                    counts.into_iter().map(|(col, tf)| (col, tf * idf[col])).collect();
                row.sort_by_key(|&(col, _)| col);
                l2_normalize(&mut row);
                row
            })
            .collect();

        debug!(
            entries = corpus.len(),
            vocabulary = vocabulary.len(),
            "knowledge index built"
        );

        Self {
            entries: corpus,
            vocabulary,
            idf,
            rows,
            bigrams: config.bigrams,
        }
    }

    /// Rank corpus entries against a query by cosine similarity.
    ///
    /// Returns at most `top_k` entries, descending by score, zero-similarity
    /// entries excluded, ties broken by original corpus order.
    pub fn search(&self, query: &str, top_k: usize) -> Vec<ScoredEntry> {
        let query_vec = self.query_vector(query);
        if query_vec.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(usize, f64)> = self
            .rows
            .iter()
            .enumerate()
            .filter_map(|(i, row)| {
                let score = sparse_dot(&query_vec, row);
                (score > 0.0).then_some((i, score))
            })
            .collect();

        // Stable sort keeps corpus order for equal scores.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_k);

        debug!(query_terms = query_vec.len(), results = scored.len(), "search complete");

        scored
            .into_iter()
            .map(|(i, score)| ScoredEntry {
                entry: self.entries[i].clone(),
                relevance_score: round4(score),
            })
            .collect()
    }

    /// Corpus statistics.
    pub fn stats(&self) -> KnowledgeStats {
        let mut stats = KnowledgeStats {
            total_entries: self.entries.len(),
            scripture: 0,
            tradition: 0,
            principle: 0,
        };
        for entry in &self.entries {
            match entry.source_type {
                SourceType::Scripture => stats.scripture += 1,
                SourceType::Tradition => stats.tradition += 1,
                SourceType::Principle => stats.principle += 1,
            }
        }
        stats
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Project a query into the index's vector space. Terms unseen at build
    /// time are dropped; no re-weighting happens at query time.
    fn query_vector(&self, query: &str) -> Vec<(usize, f64)> {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in tokenize::terms(query, self.bigrams) {
            if let Some(&col) = self.vocabulary.get(&term) {
                *counts.entry(col).or_insert(0.0) += 1.0;
            }
        }
        let mut vec: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(col, tf)| (col, tf * self.idf[col]))
            .collect();
        vec.sort_by_key(|&(col, _)| col);
        l2_normalize(&mut vec);
        vec
    }
}

fn l2_normalize(vec: &mut [(usize, f64)]) {
    let norm: f64 = vec.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt();
    if norm > f64::EPSILON {
        for (_, w) in vec.iter_mut() {
            *w /= norm;
        }
    }
}

/// Dot product of two sparse vectors sorted by column id.
fn sparse_dot(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let mut sum = 0.0;
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}

fn round4(score: f64) -> f64 {
    (score * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, content: &str, tags: &[&str]) -> KnowledgeEntry {
        KnowledgeEntry {
            id: id.into(),
            source_type: SourceType::Principle,
            title: id.into(),
            content: content.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            reference: id.into(),
            original_language_text: None,
            authenticity_grade: None,
        }
    }

    fn small_corpus() -> Vec<KnowledgeEntry> {
        vec![
            entry("a", "честность и правда укрепляют доверие", &["честность"]),
            entry("b", "вред и причинение вреда недопустимы", &["вред"]),
            entry("c", "выбор между прощением и наказанием", &["справедливость"]),
        ]
    }

    #[test]
    fn empty_corpus_always_returns_empty() {
        let index = KnowledgeIndex::build(vec![], &RetrievalConfig::default());
        assert!(index.is_empty());
        assert!(index.search("честность", 5).is_empty());
    }

    #[test]
    fn finds_the_matching_entry_first() {
        let index = KnowledgeIndex::build(small_corpus(), &RetrievalConfig::default());
        let results = index.search("честность и правда", 3);
        assert!(!results.is_empty());
        assert_eq!(results[0].entry.id, "a");
    }

    #[test]
    fn zero_similarity_entries_are_never_padded_in() {
        let index = KnowledgeIndex::build(small_corpus(), &RetrievalConfig::default());
        let results = index.search("честность", 10);
        // Only the honesty entry shares a term with the query.
        assert!(results.iter().all(|r| r.relevance_score > 0.0));
        assert!(results.len() < 3);
    }

    #[test]
    fn unknown_query_terms_yield_empty() {
        let index = KnowledgeIndex::build(small_corpus(), &RetrievalConfig::default());
        assert!(index.search("совершенно посторонние слова", 5).is_empty());
    }

    #[test]
    fn tag_matches_rank_entries() {
        let index = KnowledgeIndex::build(small_corpus(), &RetrievalConfig::default());
        let results = index.search("справедливость", 5);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].entry.id, "c");
    }

    #[test]
    fn scores_are_rounded_to_four_decimals() {
        let index = KnowledgeIndex::build(small_corpus(), &RetrievalConfig::default());
        for r in index.search("честность и правда укрепляют доверие", 3) {
            let scaled = r.relevance_score * 10_000.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn single_document_corpus_can_retrieve_itself() {
        let corpus = vec![entry("solo", "единственная запись о доверии", &[])];
        let index = KnowledgeIndex::build(corpus, &RetrievalConfig::default());
        let results = index.search("единственная запись о доверии", 1);
        assert_eq!(results.len(), 1);
        assert!(results[0].relevance_score > 0.99);
    }

    #[test]
    fn ubiquitous_terms_are_suppressed() {
        // "и" appears in every document, so with max_df 0.95 it is dropped
        // from the vocabulary and cannot rank anything by itself.
        let index = KnowledgeIndex::build(small_corpus(), &RetrievalConfig::default());
        assert!(index.search("и", 5).is_empty());
    }

    #[test]
    fn stats_count_by_source_type() {
        let index = KnowledgeIndex::build(small_corpus(), &RetrievalConfig::default());
        let stats = index.stats();
        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.principle, 3);
        assert_eq!(stats.scripture, 0);
    }
}
