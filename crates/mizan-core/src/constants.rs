/// Mizan system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Stage component names, in invocation order.
pub const ANALYST_AGENT: &str = "Агент-Аналитик";
pub const VALUES_AGENT: &str = "Агент-Интерпретатор Ценностей";
pub const REFLECTION_AGENT: &str = "Агент-Рефлексии";

/// Per-stage disclaimer attached to every stage envelope.
pub const STAGE_DISCLAIMER: &str =
    "Данный анализ не является окончательным суждением. Решение остаётся за вами.";

/// Fixed note on the classifier output.
pub const ANALYSIS_NOTE: &str =
    "Это структурный анализ ситуации. Он не содержит моральных оценок.";

/// Fixed note on the interpreter output.
pub const INTERPRETATION_NOTE: &str = "Приведённые источники представляют различные точки зрения. \
     Система не выносит директивных указаний и не определяет единственно верное решение.";

/// Fixed note on the reflection output.
pub const REFLECTION_NOTE: &str = "Эти вопросы предназначены для размышления. \
     Не существует единственно \"правильного\" ответа. \
     Цель — помочь вам глубже понять свои мотивы и возможные последствия.";

/// Final report disclaimer. The core never issues a verdict.
pub const REPORT_DISCLAIMER: &str =
    "⚠️ ВАЖНО: Данный анализ предназначен для помощи в размышлении \
     и НЕ ЯВЛЯЕТСЯ окончательным моральным суждением. \
     Система не заменяет вашу совесть, консультацию с учёными \
     или юридическую помощь. Финальное решение всегда остаётся за вами.";
