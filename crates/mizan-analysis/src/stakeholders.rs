//! Stakeholder extraction: word-boundary matching of the curated marker
//! table, deduplicated by table entry.

use mizan_core::models::{Stakeholder, StakeholderRole};
use regex::Regex;

use crate::markers::{StakeholderMarker, STAKEHOLDER_MARKERS};

const INVOLVEMENT_NOTE: &str = "Упомянут в ситуации";
const AUTHOR_NAME: &str = "Автор ситуации";
const AUTHOR_INVOLVEMENT: &str = "Лицо, описывающее ситуацию";

/// Marker table with one compiled word-boundary pattern per entry.
pub struct StakeholderMatcher {
    patterns: Vec<(&'static StakeholderMarker, Regex)>,
}

impl StakeholderMatcher {
    pub fn new() -> Self {
        let patterns = STAKEHOLDER_MARKERS
            .iter()
            .map(|marker| {
                let alternation = marker
                    .forms
                    .iter()
                    .map(|f| regex::escape(f))
                    .collect::<Vec<_>>()
                    .join("|");
                let pattern = format!(r"\b(?:{alternation})\b");
                // The table is static and every form is a plain word, so
                // compilation cannot fail.
                let regex = Regex::new(&pattern).unwrap_or_else(|e| {
                    panic!("invalid stakeholder pattern for {}: {e}", marker.name)
                });
                (marker, regex)
            })
            .collect();
        Self { patterns }
    }

    /// Extract stakeholders from lower-cased situation text, in table
    /// order. Zero matches synthesize the generic author stakeholder.
    pub fn extract(&self, text_lower: &str) -> Vec<Stakeholder> {
        let mut found: Vec<Stakeholder> = self
            .patterns
            .iter()
            .filter(|(_, regex)| regex.is_match(text_lower))
            .map(|(marker, _)| Stakeholder {
                name: marker.name.to_string(),
                role: marker.role,
                involvement: INVOLVEMENT_NOTE.to_string(),
            })
            .collect();

        if found.is_empty() {
            found.push(Stakeholder {
                name: AUTHOR_NAME.to_string(),
                role: StakeholderRole::Generic,
                involvement: AUTHOR_INVOLVEMENT.to_string(),
            });
        }
        found
    }
}

impl Default for StakeholderMatcher {
    fn default() -> Self {
        Self::new()
    }
}
