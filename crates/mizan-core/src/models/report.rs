use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::analysis::SituationAnalysis;
use super::reflection::ReflectionSet;
use super::values::ValuesReading;

/// Per-stage envelope: every stage result is wrapped with the component's
/// name, description, and the fixed stage disclaimer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageOutput<T> {
    pub agent: String,
    pub description: String,
    pub result: T,
    pub disclaimer: String,
}

/// Timing record for one stage invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageTrace {
    pub agent: String,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
}

/// Run-level metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Wall-clock duration from first stage entry to assembly, 3 dp.
    pub processing_time_seconds: f64,
    /// Run start timestamp.
    pub timestamp: DateTime<Utc>,
    /// Stage component names in invocation order.
    pub agents_used: Vec<String>,
    pub stages: Vec<StageTrace>,
}

/// The final multi-perspective report. Created once per invocation and
/// returned to the caller; never persisted by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineReport {
    pub status: String,
    pub situation: String,
    pub analysis: StageOutput<SituationAnalysis>,
    pub values: StageOutput<ValuesReading>,
    pub reflection: StageOutput<ReflectionSet>,
    pub meta: ReportMeta,
    pub disclaimer: String,
}
