//! The interpreter engine: query → search → group → synthesize.

use mizan_core::config::RetrievalConfig;
use mizan_core::constants::INTERPRETATION_NOTE;
use mizan_core::errors::MizanResult;
use mizan_core::models::{SituationAnalysis, ValuesReading};
use mizan_knowledge::KnowledgeIndex;
use tracing::debug;

use crate::{grouping, perspectives, query};

/// Value interpreter. Borrows the shared, immutable knowledge index; holds
/// no per-call state.
pub struct ValueInterpreter<'a> {
    index: &'a KnowledgeIndex,
    config: RetrievalConfig,
}

impl<'a> ValueInterpreter<'a> {
    pub fn new(index: &'a KnowledgeIndex, config: RetrievalConfig) -> Self {
        Self { index, config }
    }

    /// Map a classified situation onto the knowledge corpus.
    pub fn interpret(
        &self,
        situation: &str,
        analysis: &SituationAnalysis,
    ) -> MizanResult<ValuesReading> {
        let search_query = query::build(situation, analysis);
        debug!(query_len = search_query.len(), "retrieval query built");

        let results = self.index.search(&search_query, self.config.top_k);
        debug!(results = results.len(), "knowledge search complete");

        let relevant_sources = grouping::group_by_source(&results);
        let interpretations = perspectives::synthesize(&relevant_sources);

        Ok(ValuesReading {
            relevant_sources,
            interpretations,
            knowledge_stats: self.index.stats(),
            interpretation_note: INTERPRETATION_NOTE.to_string(),
        })
    }
}
