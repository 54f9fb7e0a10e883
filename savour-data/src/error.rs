//! Errors raised while loading or converting artefacts.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use savour_core::{CatalogError, ModelError, ProfileError};
use thiserror::Error;

/// Errors raised while converting a decoded artefact into engine types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArtefactError {
    /// The model definition was invalid.
    #[error("invalid model definition")]
    Model(#[from] ModelError),
    /// The catalog definition was invalid.
    #[error("invalid catalog definition")]
    Catalog(#[from] CatalogError),
    /// A preference was invalid.
    #[error("invalid preference")]
    Profile(#[from] ProfileError),
    /// A profile listed the same feature twice.
    #[error("feature '{feature}' appears more than once in the profile")]
    DuplicatePreference {
        /// Repeated feature name.
        feature: String,
    },
}

/// Errors raised while reading artefacts from disk.
#[derive(Debug, Error)]
pub enum DataError {
    /// The artefact file could not be opened.
    #[error("failed to open {path}")]
    Open {
        /// Path of the artefact.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The artefact was not valid JSON for its format.
    #[error("failed to decode {path}")]
    Decode {
        /// Path of the artefact.
        path: Utf8PathBuf,
        /// Error returned by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The artefact decoded but described invalid data.
    #[error("{path} is not a valid artefact")]
    Invalid {
        /// Path of the artefact.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: ArtefactError,
    },
}
