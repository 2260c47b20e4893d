//! Built-in Russian-language knowledge corpus.
//!
//! Three static collections, one per source type. The index accepts any
//! corpus; these are the default entries a host process loads at startup.

pub mod principles;
pub mod scripture;
pub mod traditions;

use mizan_core::models::KnowledgeEntry;

/// The full built-in corpus: principles, then scripture, then traditions.
/// Order is stable; entry ids are unique across collections.
pub fn builtin_corpus() -> Vec<KnowledgeEntry> {
    let mut corpus = principles::entries();
    corpus.extend(scripture::entries());
    corpus.extend(traditions::entries());
    corpus
}
