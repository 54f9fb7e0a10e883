//! End-to-end recommendation: fuzzify, score, normalise, rank.
#![forbid(unsafe_code)]

use log::debug;
use savour_core::{Catalog, FuzzifiedProfile, FuzzyModel, PreferenceProfile};
use serde::Serialize;

use crate::{
    Normalisation, PrecomputedCatalog, PrecomputedScorer, Ranking, ScoreError, fuzzify_profile,
    rank, score_catalog,
};

/// Result of ranking a catalog against one profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Candidates from best to worst.
    pub ranking: Ranking,
    /// The profile's weighted category degrees.
    pub fuzzified: FuzzifiedProfile,
    /// Normalisation applied to raw scores.
    pub normalisation: Normalisation,
}

/// Ranks a fixed catalog against preference profiles.
///
/// The model and catalog are immutable once built; candidate degrees are
/// precomputed at construction so each request only fuzzifies the profile.
///
/// # Examples
/// ```
/// use savour_core::{Candidate, Catalog, Domain, Feature, FuzzyModel, PreferenceProfile, Triangle};
/// use savour_scorer::Recommender;
///
/// let temperature = Feature::new("temperature", Domain::default())?
///     .with_category("cold", Triangle::new(0.0, 0.0, 40.0)?)?
///     .with_category("hot", Triangle::new(60.0, 100.0, 100.0)?)?;
/// let model = FuzzyModel::new().with_feature(temperature)?;
/// let catalog = Catalog::new([
///     Candidate::new("Ice Cream").with_attribute("temperature", 10.0),
///     Candidate::new("Soup").with_attribute("temperature", 90.0),
/// ])?;
///
/// let recommender = Recommender::new(model, catalog);
/// let profile = PreferenceProfile::new().with_preference("temperature", 100.0, 1.0);
/// let recommendation = recommender.recommend(&profile)?;
/// assert_eq!(
///     recommendation.ranking.best().map(|entry| entry.name.as_str()),
///     Some("Soup")
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Recommender {
    model: FuzzyModel,
    catalog: Catalog,
    cache: PrecomputedCatalog,
}

impl Recommender {
    /// Precompute candidate degrees and build a recommender.
    #[must_use]
    pub fn new(model: FuzzyModel, catalog: Catalog) -> Self {
        let cache = PrecomputedCatalog::new(&model, &catalog);
        Self {
            model,
            catalog,
            cache,
        }
    }

    /// Model used for fuzzification.
    #[must_use]
    pub const fn model(&self) -> &FuzzyModel {
        &self.model
    }

    /// Catalog being ranked.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Rank every candidate against `profile`.
    ///
    /// # Errors
    /// Returns [`ScoreError::UnknownFeature`] when the profile names a
    /// feature the model does not define.
    pub fn recommend(&self, profile: &PreferenceProfile) -> Result<Recommendation, ScoreError> {
        let fuzzified = fuzzify_profile(&self.model, profile)?;
        let scorer = PrecomputedScorer::new(&self.model, &self.cache);
        let sheet = score_catalog(&scorer, &fuzzified, profile.total_weight(), &self.catalog);
        let ranking = rank(sheet.scores);
        debug!(
            "ranked {} candidate(s); best is {:?}",
            ranking.len(),
            ranking.best().map(|entry| entry.name.as_str())
        );
        Ok(Recommendation {
            ranking,
            fuzzified,
            normalisation: sheet.normalisation,
        })
    }
}
