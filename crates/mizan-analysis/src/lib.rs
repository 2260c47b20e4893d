//! # mizan-analysis
//!
//! Deterministic, lexical classification of a free-text situation into
//! stakeholders, conflict findings, and consequence sketches. No model
//! inference: every decision is a table lookup, so every output row can be
//! traced to the marker table entry that produced it.
//!
//! The classifier is total: any input, including the empty string, yields
//! at least one stakeholder and one conflict finding via fallback entries.

pub mod classifier;
mod conflicts;
pub mod markers;
mod consequences;
mod stakeholders;

pub use classifier::SituationClassifier;
