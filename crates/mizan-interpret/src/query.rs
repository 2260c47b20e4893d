//! Retrieval query construction.

use mizan_core::models::SituationAnalysis;

/// Concatenate the raw situation text with every conflict description,
/// space-joined. The result goes to the index verbatim.
pub fn build(situation: &str, analysis: &SituationAnalysis) -> String {
    let mut parts = vec![situation.to_string()];
    parts.extend(analysis.conflicts.iter().map(|c| c.description.clone()));
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mizan_core::models::{ConflictFinding, ConflictKind, Severity};

    #[test]
    fn appends_conflict_descriptions() {
        let analysis = SituationAnalysis {
            summary: String::new(),
            stakeholders: vec![],
            conflicts: vec![ConflictFinding {
                kind: ConflictKind::Honesty,
                description: "вопросы правдивости".into(),
                severity: Severity::High,
            }],
            consequences: vec![],
            analysis_note: String::new(),
        };
        let query = build("исходная ситуация", &analysis);
        assert_eq!(query, "исходная ситуация вопросы правдивости");
    }
}
