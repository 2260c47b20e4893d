//! # mizan-core
//!
//! Foundation crate for the Mizan ethical analysis engine.
//! Defines all shared types, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::{MizanConfig, RetrievalConfig};
pub use errors::{MizanError, MizanResult};
pub use models::{
    ConflictFinding, ConflictKind, KnowledgeEntry, PipelineReport, ScoredEntry, Severity,
    SituationAnalysis, SourceType, Stakeholder, StakeholderRole,
};
