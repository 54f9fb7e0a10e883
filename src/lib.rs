//! Facade crate for the Savour preference matching engine.
//!
//! This crate re-exports the core domain types and exposes the scoring
//! pipeline and the reference dish data behind feature flags.

#![forbid(unsafe_code)]

pub use savour_core::{
    Candidate, Catalog, CatalogError, Category, Domain, Evaluation, Feature, FuzzifiedProfile,
    FuzzyModel, FuzzySet, MAX_WEIGHT, ModelError, Preference, PreferenceProfile, ProfileError,
    Scorer, Triangle,
};

#[cfg(feature = "scorer")]
pub use savour_scorer::{
    FuzzyScorer, Normalisation, PrecomputedCatalog, PrecomputedScorer, Ranking, Recommendation,
    Recommender, ScoreError, ScoredCandidate, fuzzify_profile, rank, score_catalog,
};

#[cfg(feature = "reference-data")]
pub use savour_data::{DataError, load_catalog, load_model, load_profile, reference};
