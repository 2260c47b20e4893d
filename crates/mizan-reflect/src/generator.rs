//! The reflection engine: four question categories, base + gated entries.

use mizan_core::constants::REFLECTION_NOTE;
use mizan_core::models::{
    QuestionCategory, ReflectionQuestion, ReflectionSet, SituationAnalysis, SourceType,
    ValuesReading,
};
use tracing::debug;

use crate::questions::{self, HONESTY_TRIGGERS, JUSTICE_TRIGGERS};

/// Reflection question generator. Stateless; output is fully determined by
/// its inputs.
pub struct ReflectionGenerator;

impl ReflectionGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn reflect(
        &self,
        situation: &str,
        analysis: &SituationAnalysis,
        values: &ValuesReading,
    ) -> ReflectionSet {
        let text_lower = situation.to_lowercase();

        let intention_questions = intention(&text_lower, analysis);
        let consequence_questions = consequence(analysis);
        let value_questions = value(values);
        let meta_questions = questions::meta_questions();

        debug!(
            intention = intention_questions.len(),
            consequences = consequence_questions.len(),
            values = value_questions.len(),
            "reflection questions generated"
        );

        ReflectionSet {
            intention_questions,
            consequence_questions,
            value_questions,
            meta_questions,
            reflection_note: REFLECTION_NOTE.to_string(),
        }
    }
}

impl Default for ReflectionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn intention(text_lower: &str, analysis: &SituationAnalysis) -> Vec<ReflectionQuestion> {
    let mut out = vec![
        questions::question(
            "Какова ваша главная мотивация в этой ситуации?",
            "Понять истинные намерения помогает отделить эмоции от рациональных соображений.",
            QuestionCategory::Intention,
        ),
        questions::question(
            "Если бы никто не узнал о вашем решении, поступили бы вы так же?",
            "Этот вопрос помогает оценить, движет ли вами внутреннее убеждение или внешнее давление.",
            QuestionCategory::Intention,
        ),
    ];

    if analysis.stakeholders.len() > 1 {
        out.push(questions::question(
            "Чьи интересы для вас наиболее важны в этой ситуации и почему?",
            "Определение приоритетов между заинтересованными сторонами.",
            QuestionCategory::Intention,
        ));
    }
    if HONESTY_TRIGGERS.iter().any(|t| text_lower.contains(t)) {
        out.push(questions::question(
            "Что именно вы хотите защитить, скрывая информацию? Себя или другого?",
            "Различение защитной лжи и эгоистичного обмана.",
            QuestionCategory::Intention,
        ));
    }
    if JUSTICE_TRIGGERS.iter().any(|t| text_lower.contains(t)) {
        out.push(questions::question(
            "Ваше желание — восстановить справедливость или ответить на боль?",
            "Различение стремления к справедливости и мести.",
            QuestionCategory::Intention,
        ));
    }
    out
}

fn consequence(analysis: &SituationAnalysis) -> Vec<ReflectionQuestion> {
    let mut out = vec![
        questions::question(
            "Как ваше решение повлияет на ситуацию через неделю? Через год? Через десять лет?",
            "Краткосрочные и долгосрочные последствия могут сильно различаться.",
            QuestionCategory::Consequences,
        ),
        questions::question(
            "Кто, кроме непосредственных участников, может быть затронут вашим решением?",
            "Последствия часто распространяются шире, чем кажется.",
            QuestionCategory::Consequences,
        ),
    ];

    if !analysis.consequences.is_empty() {
        out.push(questions::question(
            "Какой из выявленных рисков для вас наименее допустим?",
            "Определение красных линий помогает сузить пространство решений.",
            QuestionCategory::Consequences,
        ));
    }

    out.push(questions::question(
        "Если бы вы узнали о подобном решении другого человека, как бы вы его оценили?",
        "Взгляд со стороны часто открывает новые перспективы.",
        QuestionCategory::Consequences,
    ));
    out
}

fn value(values: &ValuesReading) -> Vec<ReflectionQuestion> {
    let mut out = vec![questions::question(
        "Какие из ваших жизненных ценностей наиболее затронуты этой ситуацией?",
        "Осознание собственной системы ценностей помогает принять согласованное решение.",
        QuestionCategory::Values,
    )];

    if values.has_source(SourceType::Scripture) {
        out.push(questions::question(
            "Какой из приведённых аятов Корана наиболее резонирует с вашим ощущением ситуации?",
            "Личная связь с текстом может подсказать направление размышления.",
            QuestionCategory::Values,
        ));
    }
    if values.has_source(SourceType::Tradition) {
        out.push(questions::question(
            "Какой пример из жизни Пророка ﷺ приходит вам на ум в связи с этой ситуацией?",
            "Пророческие примеры дают практические ориентиры.",
            QuestionCategory::Values,
        ));
    }

    out.push(questions::question(
        "Если бы вы объясняли своё решение человеку, которого уважаете больше всего — что бы вы сказали?",
        "Этот мысленный эксперимент помогает проверить решение на внутреннюю честность.",
        QuestionCategory::Values,
    ));
    out
}
