//! Default configuration values.

/// Query fan-out: how many ranked entries a single search returns at most.
pub const DEFAULT_TOP_K: usize = 10;

/// Terms present in more than this share of documents are suppressed
/// at index build time (stopword-like effect).
pub const DEFAULT_MAX_DF_RATIO: f64 = 0.95;

/// Index both unigrams and adjacent bigrams.
pub const DEFAULT_BIGRAMS: bool = true;
