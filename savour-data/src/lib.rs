//! Data access for the Savour engine.
//!
//! Responsibilities:
//! - Define the JSON artefact formats for models, catalogs and profiles.
//! - Load artefacts from UTF-8 paths through capability-based I/O.
//! - Provide the reference dish model and catalog.
//!
//! Boundaries:
//! - Do not encode scoring rules (live in `savour-scorer`).
//! - Validation of names and control points is delegated to `savour-core`.
//!
//! Invariants:
//! - Loaded values are immutable and safe to share across threads.
//! - No global mutable state.

#![forbid(unsafe_code)]

mod artefact;
mod error;
mod load;
pub mod reference;

pub use artefact::{
    CandidateArtefact, CatalogArtefact, CategoryArtefact, DomainArtefact, FeatureArtefact,
    ModelArtefact, PreferenceArtefact, ProfileArtefact,
};
pub use error::{ArtefactError, DataError};
pub use load::{load_catalog, load_model, load_profile, read_artefact};
