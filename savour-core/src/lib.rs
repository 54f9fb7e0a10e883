//! Core domain types for the Savour matching engine.
//!
//! The crate models features as bounded numeric domains carrying triangular
//! fuzzy categories, alongside the preference profiles and candidate catalogs
//! that the scoring crate consumes. Models and catalogs are built once and
//! shared read-only; profiles are created per request.
//!
//! # Examples
//! ```
//! use savour_core::{Domain, Evaluation, Feature, FuzzyModel, Triangle};
//!
//! let temperature = Feature::new("temperature", Domain::default())?
//!     .with_category("cold", Triangle::new(0.0, 0.0, 40.0)?)?
//!     .with_category("warm", Triangle::new(30.0, 50.0, 70.0)?)?
//!     .with_category("hot", Triangle::new(60.0, 100.0, 100.0)?)?;
//! let model = FuzzyModel::new().with_feature(temperature)?;
//!
//! let degrees = model.fuzzify_value("temperature", 50.0).expect("known feature");
//! assert_eq!(degrees.get("warm"), Some(1.0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod domain;
pub mod feature;
pub mod fuzzy;
pub mod membership;
pub mod model;
pub mod profile;
pub mod scorer;

pub use catalog::{Candidate, Catalog, CatalogError, NEUTRAL_VALUE};
pub use domain::{Domain, DomainError, MAX_GRID_POINTS};
pub use feature::{Category, Feature};
pub use fuzzy::{CategoryDegree, FuzzifiedProfile, FuzzySet};
pub use membership::{MembershipError, SampledMembership, Triangle};
pub use model::{Evaluation, FuzzyModel, ModelError};
pub use profile::{MAX_WEIGHT, Preference, PreferenceProfile, ProfileError};
pub use scorer::Scorer;
