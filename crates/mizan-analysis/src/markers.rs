//! Declarative marker tables.
//!
//! Stakeholder markers match on word boundaries (any listed inflected form
//! counts as the same party). Conflict rules match on substring presence
//! and are evaluated in declaration order; the order is a contract, since
//! downstream consumers index into the conflict list positionally.

use mizan_core::models::{ConflictKind, Severity, StakeholderRole};

/// One role-indicating term with the inflected forms it may take in text.
pub struct StakeholderMarker {
    /// Display name (capitalized base form).
    pub name: &'static str,
    /// Word forms matched on word boundaries, lower-cased.
    pub forms: &'static [&'static str],
    pub role: StakeholderRole,
}

/// Curated stakeholder list: pronouns, kinship, occupational, relational,
/// and societal terms. Each matched table row yields exactly one
/// stakeholder; rows are deduplicated by table entry, not by semantic
/// identity ("Мать" and "Родители" are two separate stakeholders).
pub const STAKEHOLDER_MARKERS: &[StakeholderMarker] = &[
    StakeholderMarker { name: "Я", forms: &["я"], role: StakeholderRole::Generic },
    StakeholderMarker { name: "Мы", forms: &["мы"], role: StakeholderRole::Generic },
    StakeholderMarker { name: "Он", forms: &["он"], role: StakeholderRole::Generic },
    StakeholderMarker { name: "Она", forms: &["она"], role: StakeholderRole::Generic },
    StakeholderMarker { name: "Они", forms: &["они"], role: StakeholderRole::Generic },
    StakeholderMarker {
        name: "Коллега",
        forms: &["коллега", "коллеги", "коллеге", "коллегу", "коллегой", "коллег", "коллегам"],
        role: StakeholderRole::Work,
    },
    StakeholderMarker {
        name: "Друг",
        forms: &[
            "друг", "друга", "другу", "другом", "друге", "друзья", "друзей", "друзьям",
            "друзьями",
        ],
        role: StakeholderRole::Social,
    },
    StakeholderMarker {
        name: "Родители",
        forms: &["родители", "родителей", "родителям", "родителями", "родителях"],
        role: StakeholderRole::Family,
    },
    StakeholderMarker {
        name: "Мать",
        forms: &["мать", "матери", "матерью", "мама", "мамы", "маме", "маму", "мамой"],
        role: StakeholderRole::Family,
    },
    StakeholderMarker {
        name: "Отец",
        forms: &["отец", "отца", "отцу", "отцом", "отце", "папа", "папы", "папе", "папу"],
        role: StakeholderRole::Family,
    },
    StakeholderMarker {
        name: "Брат",
        forms: &["брат", "брата", "брату", "братом", "брате", "братья", "братьев"],
        role: StakeholderRole::Family,
    },
    StakeholderMarker {
        name: "Сестра",
        forms: &["сестра", "сестры", "сестре", "сестру", "сестрой", "сёстры", "сестёр"],
        role: StakeholderRole::Family,
    },
    StakeholderMarker {
        name: "Начальник",
        forms: &["начальник", "начальника", "начальнику", "начальником", "начальнике"],
        role: StakeholderRole::Work,
    },
    StakeholderMarker {
        name: "Руководитель",
        forms: &["руководитель", "руководителя", "руководителю", "руководителем"],
        role: StakeholderRole::Work,
    },
    StakeholderMarker {
        name: "Клиент",
        forms: &["клиент", "клиента", "клиенту", "клиентом", "клиенты", "клиентов"],
        role: StakeholderRole::Work,
    },
    StakeholderMarker {
        name: "Сотрудник",
        forms: &["сотрудник", "сотрудника", "сотруднику", "сотрудником", "сотрудники", "сотрудников"],
        role: StakeholderRole::Work,
    },
    StakeholderMarker {
        name: "Партнёр",
        forms: &[
            "партнёр", "партнёра", "партнёру", "партнёром", "партнёры", "партнер", "партнера",
            "партнеру", "партнером", "партнеры",
        ],
        role: StakeholderRole::Social,
    },
    StakeholderMarker {
        name: "Сосед",
        forms: &["сосед", "соседа", "соседу", "соседом", "соседи", "соседей", "соседка", "соседке"],
        role: StakeholderRole::Social,
    },
    StakeholderMarker {
        name: "Ребёнок",
        forms: &[
            "ребёнок", "ребёнка", "ребёнку", "ребёнком", "ребенок", "ребенка", "ребенку",
            "ребенком", "дети", "детей", "детям", "детьми",
        ],
        role: StakeholderRole::Family,
    },
    StakeholderMarker {
        name: "Семья",
        forms: &["семья", "семьи", "семье", "семью", "семьёй", "семьей", "семей", "семьях"],
        role: StakeholderRole::Family,
    },
    StakeholderMarker {
        name: "Муж",
        forms: &["муж", "мужа", "мужу", "мужем", "муже"],
        role: StakeholderRole::Family,
    },
    StakeholderMarker {
        name: "Жена",
        forms: &["жена", "жены", "жене", "жену", "женой"],
        role: StakeholderRole::Family,
    },
    StakeholderMarker {
        name: "Врач",
        forms: &["врач", "врача", "врачу", "врачом", "враче", "врачи", "врачей"],
        role: StakeholderRole::Professional,
    },
    StakeholderMarker {
        name: "Пациент",
        forms: &["пациент", "пациента", "пациенту", "пациентом", "пациенты", "пациентов"],
        role: StakeholderRole::Professional,
    },
    StakeholderMarker {
        name: "Учитель",
        forms: &["учитель", "учителя", "учителю", "учителем", "учителе"],
        role: StakeholderRole::Professional,
    },
    StakeholderMarker {
        name: "Ученик",
        forms: &["ученик", "ученика", "ученику", "учеником", "ученики", "учеников"],
        role: StakeholderRole::Professional,
    },
    StakeholderMarker {
        name: "Продавец",
        forms: &["продавец", "продавца", "продавцу", "продавцом"],
        role: StakeholderRole::Professional,
    },
    StakeholderMarker {
        name: "Покупатель",
        forms: &["покупатель", "покупателя", "покупателю", "покупателем"],
        role: StakeholderRole::Professional,
    },
    StakeholderMarker {
        name: "Компания",
        forms: &["компания", "компании", "компанию", "компанией"],
        role: StakeholderRole::Work,
    },
    StakeholderMarker {
        name: "Организация",
        forms: &["организация", "организации", "организацию", "организацией"],
        role: StakeholderRole::Work,
    },
    StakeholderMarker {
        name: "Общество",
        forms: &["общество", "общества", "обществу", "обществом", "обществе"],
        role: StakeholderRole::Social,
    },
    StakeholderMarker {
        name: "Государство",
        forms: &["государство", "государства", "государству", "государством"],
        role: StakeholderRole::Social,
    },
    StakeholderMarker {
        name: "Человек",
        forms: &["человек", "человека", "человеку", "человеком", "человеке", "люди", "людей", "людям"],
        role: StakeholderRole::Social,
    },
];

/// One conflict-detection rule: any listed phrase present as a substring of
/// the lower-cased text fires the rule exactly once.
pub struct ConflictRule {
    pub kind: ConflictKind,
    pub markers: &'static [&'static str],
    pub description: &'static str,
    pub severity: Severity,
}

/// Fixed-order rule table. Rules are not mutually exclusive.
pub const CONFLICT_RULES: &[ConflictRule] = &[
    ConflictRule {
        kind: ConflictKind::InternalContradiction,
        markers: &["но", "однако", "хотя", "несмотря"],
        description: "В ситуации присутствует противопоставление: указание на конфликт \
             между двумя позициями или действиями.",
        severity: Severity::Medium,
    },
    ConflictRule {
        kind: ConflictKind::ChoiceDilemma,
        markers: &["выбор", "дилемма", "или", "либо"],
        description: "Ситуация требует выбора между несколькими вариантами действий.",
        severity: Severity::High,
    },
    ConflictRule {
        kind: ConflictKind::Honesty,
        markers: &["обман", "ложь", "лжи", "лгать", "скрыт", "скрыва", "промолч", "секрет", "тайн"],
        description: "Ситуация связана с вопросами правдивости, сокрытия информации или обмана.",
        severity: Severity::High,
    },
    ConflictRule {
        kind: ConflictKind::Harm,
        markers: &["вред", "пострада", "наруш"],
        description: "Ситуация может привести к причинению вреда одной или нескольким сторонам.",
        severity: Severity::High,
    },
    ConflictRule {
        kind: ConflictKind::Justice,
        markers: &["прости", "прощени", "наказ", "месть", "мести"],
        description: "Ситуация связана с выбором между прощением и наказанием.",
        severity: Severity::Medium,
    },
    ConflictRule {
        kind: ConflictKind::MoralUncertainty,
        markers: &["не знаю", "сомнева", "не уверен", "как быть", "что делать"],
        description: "Автор ситуации выражает неуверенность в правильности возможных действий.",
        severity: Severity::Medium,
    },
];

/// Fallback finding when no rule fires.
pub const IMPLICIT_CONFLICT_DESCRIPTION: &str = "Конфликтные элементы не выражены явно, \
     но ситуация может содержать скрытые противоречия.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stakeholder_forms_are_lowercase() {
        for marker in STAKEHOLDER_MARKERS {
            for form in marker.forms {
                assert_eq!(*form, form.to_lowercase(), "{}", marker.name);
            }
        }
    }

    #[test]
    fn conflict_rule_kinds_follow_taxonomy_order() {
        let kinds: Vec<ConflictKind> = CONFLICT_RULES.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ConflictKind::InternalContradiction,
                ConflictKind::ChoiceDilemma,
                ConflictKind::Honesty,
                ConflictKind::Harm,
                ConflictKind::Justice,
                ConflictKind::MoralUncertainty,
            ]
        );
    }

    #[test]
    fn no_rule_is_empty() {
        for rule in CONFLICT_RULES {
            assert!(!rule.markers.is_empty());
            assert!(!rule.description.is_empty());
        }
    }
}
