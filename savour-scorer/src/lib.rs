//! Fuzzy scoring and ranking for Savour.
//!
//! The crate turns a [`PreferenceProfile`](savour_core::PreferenceProfile)
//! into weighted category degrees, scores every candidate of a
//! [`Catalog`](savour_core::Catalog) by summing per-feature dot products,
//! normalises by the profile's total weight and ranks the result.
//!
//! - [`fuzzify_profile`] maps each preference onto `membership * weight`.
//! - [`FuzzyScorer`] implements [`Scorer`](savour_core::Scorer) by fuzzifying
//!   candidate values on demand; [`PrecomputedScorer`] reads them from a
//!   [`PrecomputedCatalog`] built once at startup.
//! - [`score_catalog`] normalises raw scores and [`rank`] orders them.
//! - [`Recommender`] chains the steps for a fixed model and catalog.
//!
//! # Examples
//!
//! ```
//! use savour_core::{Candidate, Catalog, Domain, Feature, FuzzyModel, PreferenceProfile, Triangle};
//! use savour_scorer::Recommender;
//!
//! let price = Feature::new("price", Domain::default())?
//!     .with_category("cheap", Triangle::new(0.0, 0.0, 40.0)?)?
//!     .with_category("expensive", Triangle::new(60.0, 100.0, 100.0)?)?;
//! let model = FuzzyModel::new().with_feature(price)?;
//! let catalog = Catalog::new([
//!     Candidate::new("Fries").with_attribute("price", 10.0),
//!     Candidate::new("Sushi").with_attribute("price", 90.0),
//! ])?;
//!
//! let profile = PreferenceProfile::new().with_preference("price", 0.0, 1.0);
//! let recommendation = Recommender::new(model, catalog).recommend(&profile)?;
//! let top = recommendation.ranking.top(1);
//! assert_eq!(top.first().map(|entry| entry.name.as_str()), Some("Fries"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod cache;
mod engine;
mod error;
mod fuzzify;
mod rank;
mod recommend;
mod types;

pub use cache::{PrecomputedCatalog, PrecomputedScorer};
pub use engine::{FuzzyScorer, score_catalog};
pub use error::ScoreError;
pub use fuzzify::fuzzify_profile;
pub use rank::rank;
pub use recommend::{Recommendation, Recommender};
pub use types::{Normalisation, Ranking, ScoreSheet, ScoredCandidate};
