use serde::{Deserialize, Serialize};

/// Classification of a knowledge entry by the kind of source it cites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// Scriptural verses (аяты Корана).
    Scripture,
    /// Narrated traditions (хадисы).
    Tradition,
    /// General ethical principles across philosophical traditions.
    Principle,
}

impl SourceType {
    /// Human-readable group label shown in interpreter output.
    pub fn label(&self) -> &'static str {
        match self {
            SourceType::Scripture => "📖 Священный Коран",
            SourceType::Tradition => "📜 Хадисы Пророка ﷺ",
            SourceType::Principle => "⚖️ Этические принципы",
        }
    }
}

/// One immutable record in the knowledge corpus.
///
/// Constructed once at index-build time and never mutated; lives for the
/// process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub id: String,
    pub source_type: SourceType,
    pub title: String,
    /// Primary text, indexed together with `tags`.
    pub content: String,
    pub tags: Vec<String>,
    /// Citation string (e.g. "Коран, 5:8").
    pub reference: String,
    /// Original-language text (scripture and tradition entries).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_language_text: Option<String>,
    /// Authenticity grade (tradition entries only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticity_grade: Option<String>,
}

/// A knowledge entry annotated with a per-query relevance score in [0, 1].
/// Produced per search, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredEntry {
    #[serde(flatten)]
    pub entry: KnowledgeEntry,
    pub relevance_score: f64,
}

/// Corpus statistics reported alongside interpreter output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeStats {
    pub total_entries: usize,
    pub scripture: usize,
    pub tradition: usize,
    pub principle: usize,
}
