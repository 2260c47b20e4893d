//! Consequence modeling: templated positive/negative pairs.

use mizan_core::models::{ConflictFinding, ConflictKind, ConsequenceSketch, Stakeholder};

const ALL_PARTIES: &str = "Все стороны";

/// At most this many stakeholder-derived pairs are produced.
const MAX_STAKEHOLDER_SKETCHES: usize = 3;

/// Build consequence sketches: one pair per leading stakeholder, then one
/// all-parties pair per honesty and per harm finding, in the conflict
/// list's order.
pub fn model(stakeholders: &[Stakeholder], conflicts: &[ConflictFinding]) -> Vec<ConsequenceSketch> {
    let mut sketches: Vec<ConsequenceSketch> = stakeholders
        .iter()
        .take(MAX_STAKEHOLDER_SKETCHES)
        .map(|s| {
            let name_lower = s.name.to_lowercase();
            ConsequenceSketch {
                stakeholder: s.name.clone(),
                possible_positive: format!(
                    "Решение в пользу {name_lower} может укрепить отношения и доверие."
                ),
                possible_negative: format!(
                    "Игнорирование интересов {name_lower} может привести к ухудшению отношений."
                ),
            }
        })
        .collect();

    for conflict in conflicts {
        match conflict.kind {
            ConflictKind::Honesty => sketches.push(ConsequenceSketch {
                stakeholder: ALL_PARTIES.to_string(),
                possible_positive: "Честность может укрепить долгосрочное доверие.".to_string(),
                possible_negative: "Правда может временно вызвать боль или конфликт.".to_string(),
            }),
            ConflictKind::Harm => sketches.push(ConsequenceSketch {
                stakeholder: ALL_PARTIES.to_string(),
                possible_positive: "Предотвращение вреда защитит уязвимые стороны.".to_string(),
                possible_negative: "Бездействие может привести к более серьёзному вреду в будущем."
                    .to_string(),
            }),
            _ => {}
        }
    }
    sketches
}
