//! Errors raised while fuzzifying profiles or scoring candidates.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised by the scoring pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The profile declared a preference for a feature the model lacks.
    #[error("unknown feature '{feature}' in preference profile")]
    UnknownFeature {
        /// Feature name taken from the profile.
        feature: String,
    },
}
