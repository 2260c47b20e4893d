use serde::{Deserialize, Serialize};

/// Broad role category of an extracted stakeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StakeholderRole {
    Family,
    Work,
    Social,
    Professional,
    Generic,
}

impl StakeholderRole {
    pub fn label(&self) -> &'static str {
        match self {
            StakeholderRole::Family => "Семейная роль",
            StakeholderRole::Work => "Рабочая/деловая роль",
            StakeholderRole::Social => "Социальная роль",
            StakeholderRole::Professional => "Профессиональная роль",
            StakeholderRole::Generic => "Участник ситуации",
        }
    }
}

/// A party mentioned in (or implied by) the situation text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stakeholder {
    /// Capitalized marker that matched (or the synthesized author entry).
    pub name: String,
    pub role: StakeholderRole,
    /// Short note on how this party is involved.
    pub involvement: String,
}

/// Fixed conflict taxonomy. Declaration order is emission order: downstream
/// consumers index into the conflict list positionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    InternalContradiction,
    ChoiceDilemma,
    Honesty,
    Harm,
    Justice,
    MoralUncertainty,
    /// Fallback when no rule fires.
    Implicit,
}

impl ConflictKind {
    pub fn label(&self) -> &'static str {
        match self {
            ConflictKind::InternalContradiction => "Внутреннее противоречие",
            ConflictKind::ChoiceDilemma => "Дилемма выбора",
            ConflictKind::Honesty => "Конфликт честности",
            ConflictKind::Harm => "Конфликт вреда",
            ConflictKind::Justice => "Конфликт справедливости",
            ConflictKind::MoralUncertainty => "Моральная неопределённость",
            ConflictKind::Implicit => "Неявный конфликт",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Низкий",
            Severity::Medium => "Средний",
            Severity::High => "Высокий",
        }
    }
}

/// One detected conflict element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictFinding {
    pub kind: ConflictKind,
    pub description: String,
    pub severity: Severity,
}

/// Templated positive/negative outcome pair for one party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsequenceSketch {
    pub stakeholder: String,
    pub possible_positive: String,
    pub possible_negative: String,
}

/// Full classifier output: the first pipeline stage's contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SituationAnalysis {
    pub summary: String,
    pub stakeholders: Vec<Stakeholder>,
    pub conflicts: Vec<ConflictFinding>,
    pub consequences: Vec<ConsequenceSketch>,
    pub analysis_note: String,
}
