//! # mizan-knowledge
//!
//! Static knowledge corpus (ethical principles, scriptural verses, narrated
//! traditions) and the term-weighted retrieval index over it.
//!
//! The index is built once at process start from any `Vec<KnowledgeEntry>`
//! and is immutable afterwards: it can be shared across concurrent pipeline
//! runs without locking. There is no incremental update path; a changed
//! corpus requires a full rebuild.

pub mod corpus;
pub mod index;
mod tokenize;

pub use corpus::builtin_corpus;
pub use index::KnowledgeIndex;
