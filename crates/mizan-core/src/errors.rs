//! Error taxonomy for the Mizan core.
//!
//! Stages never recover internally: every error propagates unchanged to the
//! caller, which owns user-facing messaging. An empty corpus and a query
//! with no matches are NOT errors (both degrade to empty results).

/// Result alias used across all Mizan crates.
pub type MizanResult<T> = Result<T, MizanError>;

/// All errors the core can surface.
#[derive(Debug, thiserror::Error)]
pub enum MizanError {
    #[error("invalid configuration: {reason}")]
    Config { reason: String },

    #[error("knowledge index error: {reason}")]
    Knowledge { reason: String },

    #[error("pipeline stage '{stage}' failed: {reason}")]
    Pipeline { stage: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_carry_context() {
        let e = MizanError::Pipeline {
            stage: "interpret".into(),
            reason: "boom".into(),
        };
        assert_eq!(e.to_string(), "pipeline stage 'interpret' failed: boom");
    }
}
