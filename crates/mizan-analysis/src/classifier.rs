//! The classifier engine: stakeholders → conflicts → consequences → summary.

use mizan_core::constants::ANALYSIS_NOTE;
use mizan_core::models::SituationAnalysis;
use tracing::debug;

use crate::conflicts;
use crate::consequences;
use crate::stakeholders::StakeholderMatcher;

/// Lexical situation classifier. Holds no per-call state: one instance can
/// serve concurrent pipeline runs.
pub struct SituationClassifier {
    matcher: StakeholderMatcher,
}

impl SituationClassifier {
    pub fn new() -> Self {
        Self {
            matcher: StakeholderMatcher::new(),
        }
    }

    /// Classify a situation. Total over any input text; fallback entries
    /// guarantee at least one stakeholder and one conflict.
    pub fn classify(&self, situation: &str) -> SituationAnalysis {
        let text_lower = situation.to_lowercase();

        let stakeholders = self.matcher.extract(&text_lower);
        debug!(count = stakeholders.len(), "stakeholders extracted");

        let conflicts = conflicts::detect(&text_lower);
        debug!(count = conflicts.len(), "conflicts detected");

        let consequences = consequences::model(&stakeholders, &conflicts);
        let summary = summarize(stakeholders.len(), &conflicts);

        SituationAnalysis {
            summary,
            stakeholders,
            conflicts,
            consequences,
            analysis_note: ANALYSIS_NOTE.to_string(),
        }
    }
}

impl Default for SituationClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn summarize(num_stakeholders: usize, conflicts: &[mizan_core::models::ConflictFinding]) -> String {
    let conflict_types = conflicts
        .iter()
        .map(|c| c.kind.label().to_lowercase())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Ситуация затрагивает {num_stakeholders} участник(ов)/сторон(у). \
         Выявлено {} конфликтный(х) элемент(ов): {conflict_types}. \
         Для принятия решения рекомендуется рассмотреть интересы всех сторон.",
        conflicts.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mizan_core::models::ConflictKind;

    #[test]
    fn always_returns_at_least_one_of_each() {
        let classifier = SituationClassifier::new();
        for text in ["", "просто текст", "ничего особенного здесь"] {
            let analysis = classifier.classify(text);
            assert!(!analysis.stakeholders.is_empty(), "input: {text:?}");
            assert!(!analysis.conflicts.is_empty(), "input: {text:?}");
        }
    }

    #[test]
    fn summary_reports_counts_and_types() {
        let classifier = SituationClassifier::new();
        let analysis = classifier.classify("я не знаю, стоит ли простить обман");
        assert!(analysis.summary.contains("конфликтный(х) элемент(ов)"));
        assert!(analysis.summary.contains("конфликт честности"));
    }

    #[test]
    fn classification_is_deterministic() {
        let classifier = SituationClassifier::new();
        let text = "коллега скрывает ошибку, но я сомневаюсь, что молчать правильно";
        assert_eq!(classifier.classify(text), classifier.classify(text));
    }

    #[test]
    fn promise_scenario_detects_honesty_and_harm() {
        let classifier = SituationClassifier::new();
        let analysis = classifier
            .classify("Я обещал другу сохранить секрет, но узнал, что это может навредить его семье");

        let kinds: Vec<ConflictKind> = analysis.conflicts.iter().map(|c| c.kind).collect();
        assert!(kinds.contains(&ConflictKind::Honesty));
        assert!(kinds.contains(&ConflictKind::Harm));
        assert!(kinds.contains(&ConflictKind::InternalContradiction));

        let names: Vec<&str> = analysis.stakeholders.iter().map(|s| s.name.as_str()).collect();
        assert!(names.contains(&"Друг"));
        assert!(names.contains(&"Семья"));
    }

    #[test]
    fn analysis_note_is_always_attached() {
        let classifier = SituationClassifier::new();
        assert_eq!(classifier.classify("").analysis_note, ANALYSIS_NOTE);
    }
}
