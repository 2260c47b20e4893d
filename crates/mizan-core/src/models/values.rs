use serde::{Deserialize, Serialize};

use super::knowledge::{KnowledgeStats, SourceType};

/// One ranked entry projected into interpreter output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedSource {
    pub title: String,
    pub content: String,
    pub reference: String,
    pub relevance: f64,
    /// Present for scripture and tradition entries only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_language_text: Option<String>,
    /// Present for tradition entries that carry a grade.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticity_grade: Option<String>,
}

/// A non-empty bucket of ranked sources of one source type.
/// Buckets with zero members are never emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceGroup {
    pub source_type: SourceType,
    pub label: String,
    pub items: Vec<GroupedSource>,
}

/// One perspective block synthesized from a source bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    pub perspective: String,
    pub description: String,
    /// Up to three citation references, in bucket rank order.
    pub key_sources: Vec<String>,
    pub note: String,
}

/// Full interpreter output: the second pipeline stage's contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuesReading {
    /// Fixed order: scripture, tradition, principle; empty buckets dropped.
    pub relevant_sources: Vec<SourceGroup>,
    pub interpretations: Vec<Interpretation>,
    pub knowledge_stats: KnowledgeStats,
    pub interpretation_note: String,
}

impl ValuesReading {
    /// Whether a bucket of the given source type was emitted.
    pub fn has_source(&self, source_type: SourceType) -> bool {
        self.relevant_sources
            .iter()
            .any(|g| g.source_type == source_type)
    }
}
