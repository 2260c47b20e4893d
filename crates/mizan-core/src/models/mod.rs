//! Shared models: typed records passed between pipeline stages.
//!
//! Every stage boundary is an explicit struct, never an untyped map, so
//! stage contracts are statically checkable.

pub mod analysis;
pub mod knowledge;
pub mod reflection;
pub mod report;
pub mod values;

pub use analysis::{
    ConflictFinding, ConflictKind, ConsequenceSketch, Severity, SituationAnalysis, Stakeholder,
    StakeholderRole,
};
pub use knowledge::{KnowledgeEntry, KnowledgeStats, ScoredEntry, SourceType};
pub use reflection::{QuestionCategory, ReflectionQuestion, ReflectionSet};
pub use report::{PipelineReport, ReportMeta, StageOutput, StageTrace};
pub use values::{GroupedSource, Interpretation, SourceGroup, ValuesReading};
