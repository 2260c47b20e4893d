use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{MizanError, MizanResult};

/// Retrieval index configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Maximum number of entries a search returns.
    pub top_k: usize,
    /// Document-frequency ratio above which a term is suppressed.
    pub max_df_ratio: f64,
    /// Whether to index adjacent bigrams in addition to unigrams.
    pub bigrams: bool,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            max_df_ratio: defaults::DEFAULT_MAX_DF_RATIO,
            bigrams: defaults::DEFAULT_BIGRAMS,
        }
    }
}

impl RetrievalConfig {
    pub fn validate(&self) -> MizanResult<()> {
        if self.top_k == 0 {
            return Err(MizanError::Config {
                reason: "retrieval.top_k must be positive".into(),
            });
        }
        if !(self.max_df_ratio > 0.0 && self.max_df_ratio <= 1.0) {
            return Err(MizanError::Config {
                reason: format!(
                    "retrieval.max_df_ratio must be in (0, 1], got {}",
                    self.max_df_ratio
                ),
            });
        }
        Ok(())
    }
}
