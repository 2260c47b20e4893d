//! Conflict-category detection: fixed-order substring rules.

use mizan_core::models::{ConflictFinding, ConflictKind, Severity};

use crate::markers::{CONFLICT_RULES, IMPLICIT_CONFLICT_DESCRIPTION};

/// Evaluate the rule table against lower-cased text. Each firing rule
/// appends exactly one finding, in table order; rules are not mutually
/// exclusive. Zero hits emit the implicit-conflict fallback.
pub fn detect(text_lower: &str) -> Vec<ConflictFinding> {
    let mut findings: Vec<ConflictFinding> = CONFLICT_RULES
        .iter()
        .filter(|rule| rule.markers.iter().any(|m| text_lower.contains(m)))
        .map(|rule| ConflictFinding {
            kind: rule.kind,
            description: rule.description.to_string(),
            severity: rule.severity,
        })
        .collect();

    if findings.is_empty() {
        findings.push(ConflictFinding {
            kind: ConflictKind::Implicit,
            description: IMPLICIT_CONFLICT_DESCRIPTION.to_string(),
            severity: Severity::Low,
        });
    }
    findings
}
