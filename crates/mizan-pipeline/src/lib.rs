//! # mizan-pipeline
//!
//! Orchestrates the four-state analysis sequence
//! Classify → Interpret → Reflect → Assemble. Each state consumes the full
//! output of its predecessor; none may be skipped or reordered. Stage
//! errors propagate unchanged to the caller, which owns user-facing
//! messaging.

mod pipeline;

pub use pipeline::Pipeline;
