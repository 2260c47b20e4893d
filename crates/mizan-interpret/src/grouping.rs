//! Partition ranked search results into per-source-type buckets.

use mizan_core::models::{GroupedSource, ScoredEntry, SourceGroup, SourceType};

/// Fixed bucket order for output and perspective synthesis.
pub const GROUP_ORDER: [SourceType; 3] = [
    SourceType::Scripture,
    SourceType::Tradition,
    SourceType::Principle,
];

/// Group ranked entries by source type, preserving rank order within each
/// bucket. Buckets with zero members are not emitted.
pub fn group_by_source(results: &[ScoredEntry]) -> Vec<SourceGroup> {
    GROUP_ORDER
        .iter()
        .filter_map(|&source_type| {
            let items: Vec<GroupedSource> = results
                .iter()
                .filter(|r| r.entry.source_type == source_type)
                .map(|r| project(r, source_type))
                .collect();
            (!items.is_empty()).then(|| SourceGroup {
                source_type,
                label: source_type.label().to_string(),
                items,
            })
        })
        .collect()
}

/// Project one scored entry into the group item shape. Original-language
/// text is carried for scripture and tradition only; the authenticity
/// grade for tradition only.
fn project(scored: &ScoredEntry, source_type: SourceType) -> GroupedSource {
    let entry = &scored.entry;
    let original_language_text = match source_type {
        SourceType::Scripture | SourceType::Tradition => entry.original_language_text.clone(),
        SourceType::Principle => None,
    };
    let authenticity_grade = match source_type {
        SourceType::Tradition => entry.authenticity_grade.clone(),
        _ => None,
    };
    GroupedSource {
        title: entry.title.clone(),
        content: entry.content.clone(),
        reference: entry.reference.clone(),
        relevance: scored.relevance_score,
        original_language_text,
        authenticity_grade,
    }
}
