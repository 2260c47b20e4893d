//! Configuration for the Mizan engine.
//!
//! Plain data, dependency-injected at construction time. The core reads no
//! environment variables and owns no global state; the host process decides
//! where config values come from (TOML file, CLI, hardcoded defaults).

pub mod defaults;
mod retrieval_config;

pub use retrieval_config::RetrievalConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{MizanError, MizanResult};

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MizanConfig {
    pub retrieval: RetrievalConfig,
}

impl MizanConfig {
    /// Parse a TOML document. Missing sections fall back to defaults.
    pub fn from_toml_str(raw: &str) -> MizanResult<Self> {
        let config: MizanConfig = toml::from_str(raw).map_err(|e| MizanError::Config {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> MizanResult<()> {
        self.retrieval.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(MizanConfig::default().validate().is_ok());
    }

    #[test]
    fn parses_partial_toml() {
        let config = MizanConfig::from_toml_str("[retrieval]\ntop_k = 5\n").unwrap();
        assert_eq!(config.retrieval.top_k, 5);
        assert_eq!(config.retrieval.max_df_ratio, defaults::DEFAULT_MAX_DF_RATIO);
    }

    #[test]
    fn rejects_zero_top_k() {
        let err = MizanConfig::from_toml_str("[retrieval]\ntop_k = 0\n").unwrap_err();
        assert!(err.to_string().contains("top_k"));
    }
}
