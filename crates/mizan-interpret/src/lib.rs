//! # mizan-interpret
//!
//! Second pipeline stage: connects a classified situation to the knowledge
//! corpus. Builds a retrieval query from the situation text and the
//! classifier's conflict findings, groups ranked results by source type,
//! and synthesizes one perspective block per non-empty group. Never issues
//! a directive.

mod grouping;
mod interpreter;
mod perspectives;
mod query;

pub use interpreter::ValueInterpreter;
