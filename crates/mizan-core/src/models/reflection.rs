use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Intention,
    Consequences,
    Values,
    Meta,
}

/// One clarifying question with its stated purpose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReflectionQuestion {
    pub question: String,
    pub purpose: String,
    pub category: QuestionCategory,
}

/// Full reflection output: the third pipeline stage's contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReflectionSet {
    pub intention_questions: Vec<ReflectionQuestion>,
    pub consequence_questions: Vec<ReflectionQuestion>,
    pub value_questions: Vec<ReflectionQuestion>,
    pub meta_questions: Vec<ReflectionQuestion>,
    pub reflection_note: String,
}
