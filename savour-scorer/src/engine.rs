//! Fuzzy dot-product scoring over a model.
#![forbid(unsafe_code)]

use log::{debug, warn};
use savour_core::{Candidate, Catalog, FuzzifiedProfile, FuzzyModel, Scorer};

use crate::{Normalisation, ScoreSheet, ScoredCandidate};

/// Scores candidates by fuzzifying their crisp values on each request.
///
/// For every feature in the fuzzified profile the candidate's value (or the
/// neutral default when undeclared) is fuzzified without weighting and dotted
/// with the user's weighted degrees. The raw score is the sum over features.
///
/// # Examples
/// ```
/// use savour_core::{Candidate, Domain, Feature, FuzzyModel, PreferenceProfile, Scorer, Triangle};
/// use savour_scorer::{FuzzyScorer, fuzzify_profile};
///
/// let temperature = Feature::new("temperature", Domain::default())?
///     .with_category("hot", Triangle::new(60.0, 100.0, 100.0)?)?;
/// let model = FuzzyModel::new().with_feature(temperature)?;
/// let profile = PreferenceProfile::new().with_preference("temperature", 100.0, 1.0);
/// let fuzzified = fuzzify_profile(&model, &profile)?;
///
/// let soup = Candidate::new("Soup").with_attribute("temperature", 100.0);
/// assert_eq!(FuzzyScorer::new(&model).raw_score(&soup, &fuzzified), 1.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FuzzyScorer<'m> {
    model: &'m FuzzyModel,
}

impl<'m> FuzzyScorer<'m> {
    /// Build a scorer over `model`.
    #[must_use]
    pub const fn new(model: &'m FuzzyModel) -> Self {
        Self { model }
    }

    /// Model used to fuzzify candidate values.
    #[must_use]
    pub const fn model(&self) -> &'m FuzzyModel {
        self.model
    }
}

impl Scorer for FuzzyScorer<'_> {
    fn raw_score(&self, candidate: &Candidate, profile: &FuzzifiedProfile) -> f64 {
        let total = profile
            .iter()
            .filter_map(|(feature, user)| {
                self.model
                    .fuzzify_value(feature, candidate.value(feature))
                    .map(|degrees| user.dot(&degrees))
            })
            .sum();
        Self::sanitise(total)
    }
}

/// Score every candidate of `catalog` and normalise by `total_weight`.
///
/// Scores are returned in catalog order. A total weight of zero selects
/// [`Normalisation::Degenerate`], which divides by `1.0` instead.
///
/// Normalisation divides by the sum of weights, not by the number of
/// categories. A feature with more categories can therefore contribute more
/// than its weight when a candidate's degrees overlap several of the user's.
#[expect(
    clippy::float_arithmetic,
    reason = "raw scores are divided by the profile's total weight"
)]
pub fn score_catalog<S>(
    scorer: &S,
    profile: &FuzzifiedProfile,
    total_weight: f64,
    catalog: &Catalog,
) -> ScoreSheet
where
    S: Scorer + ?Sized,
{
    let normalisation = Normalisation::from_total_weight(total_weight);
    if normalisation.is_degenerate() {
        warn!("total preference weight is zero; scores are unnormalised sums");
    }
    let divisor = normalisation.divisor();
    let scores: Vec<ScoredCandidate> = catalog
        .iter()
        .map(|candidate| ScoredCandidate {
            name: candidate.name().to_owned(),
            score: scorer.raw_score(candidate, profile) / divisor,
        })
        .collect();
    debug!(
        "scored {} candidate(s) with divisor {divisor}",
        scores.len()
    );
    ScoreSheet {
        scores,
        normalisation,
    }
}
