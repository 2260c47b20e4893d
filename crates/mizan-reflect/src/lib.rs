//! # mizan-reflect
//!
//! Third pipeline stage: generates clarifying questions conditioned on the
//! classifier's and interpreter's outputs. Pure and deterministic; gives no
//! ready answers.

mod generator;
mod questions;

pub use generator::ReflectionGenerator;
