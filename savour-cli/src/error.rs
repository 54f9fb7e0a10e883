//! Error types emitted by the Savour CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use savour_core::{CatalogError, ModelError};
use savour_data::DataError;
use savour_scorer::ScoreError;
use thiserror::Error;

/// Errors emitted by the Savour CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass it on the command line or set {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// An artefact could not be loaded.
    #[error(transparent)]
    LoadArtefact(Box<DataError>),
    /// The built-in reference model was inconsistent.
    #[error("reference model is invalid: {0}")]
    ReferenceModel(#[source] ModelError),
    /// The built-in reference catalog was inconsistent.
    #[error("reference catalog is invalid: {0}")]
    ReferenceCatalog(#[source] CatalogError),
    /// The model does not define the requested feature.
    #[error("model has no feature named '{feature}'")]
    UnknownFeature {
        /// Requested feature name.
        feature: String,
    },
    /// Scoring the profile failed.
    #[error("failed to score profile: {0}")]
    Score(#[from] ScoreError),
    /// Serialising the command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

impl From<DataError> for CliError {
    fn from(source: DataError) -> Self {
        Self::LoadArtefact(Box::new(source))
    }
}
