//! Question texts and the lexical triggers gating the conditional ones.

use mizan_core::models::{QuestionCategory, ReflectionQuestion};

/// Honesty-related lexical triggers (intention category).
pub const HONESTY_TRIGGERS: &[&str] = &["скрыть", "обман", "ложь", "промолчать", "секрет", "тайн"];

/// Forgiveness/punishment triggers (intention category).
pub const JUSTICE_TRIGGERS: &[&str] = &["простить", "наказать", "месть"];

pub fn question(text: &str, purpose: &str, category: QuestionCategory) -> ReflectionQuestion {
    ReflectionQuestion {
        question: text.to_string(),
        purpose: purpose.to_string(),
        category,
    }
}

/// The fixed, unconditional meta questions about the decision process.
pub fn meta_questions() -> Vec<ReflectionQuestion> {
    vec![
        question(
            "Достаточно ли у вас информации для принятия решения, или нужно узнать что-то ещё?",
            "Иногда моральная неопределённость — следствие недостатка информации.",
            QuestionCategory::Meta,
        ),
        question(
            "Есть ли давление времени, или вы можете позволить себе подумать?",
            "Срочность влияет на качество этического решения.",
            QuestionCategory::Meta,
        ),
        question(
            "С кем из близких или мудрых людей вы могли бы обсудить эту ситуацию?",
            "Совет (шура) — важная часть принятия значимых решений.",
            QuestionCategory::Meta,
        ),
    ]
}
