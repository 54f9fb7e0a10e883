//! Candidate degrees computed once per model and catalog.
//!
//! Candidate values never change between requests, so their unweighted
//! degrees can be fuzzified ahead of time and reused by every scoring call.
#![forbid(unsafe_code)]

use std::collections::HashMap;

use log::{debug, warn};
use savour_core::{Candidate, Catalog, FuzzifiedProfile, FuzzyModel, Scorer};

use crate::FuzzyScorer;

/// Unweighted degrees of every candidate for every model feature.
#[derive(Debug, Clone, Default)]
pub struct PrecomputedCatalog {
    degrees: HashMap<String, FuzzifiedProfile>,
}

impl PrecomputedCatalog {
    /// Fuzzify every candidate of `catalog` against `model`.
    ///
    /// Undeclared candidate values take the neutral default. Attributes the
    /// model does not define are ignored with a warning, and values outside
    /// their feature domain are clamped with a warning.
    #[must_use]
    pub fn new(model: &FuzzyModel, catalog: &Catalog) -> Self {
        let degrees: HashMap<String, FuzzifiedProfile> = catalog
            .iter()
            .map(|candidate| {
                warn_unknown_attributes(model, candidate);
                warn_clamped_attributes(model, candidate);
                (candidate.name().to_owned(), fuzzify_candidate(model, candidate))
            })
            .collect();
        debug!(
            "precomputed degrees for {} candidate(s) over {} feature(s)",
            degrees.len(),
            model.len()
        );
        Self { degrees }
    }

    /// Degrees for the candidate called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FuzzifiedProfile> {
        self.degrees.get(name)
    }

    /// Number of cached candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    /// Report whether nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }
}

fn fuzzify_candidate(model: &FuzzyModel, candidate: &Candidate) -> FuzzifiedProfile {
    let mut fuzzified = FuzzifiedProfile::new();
    for feature in model.features() {
        fuzzified.insert(
            feature.name(),
            feature.fuzzify(candidate.value(feature.name()), model.evaluation()),
        );
    }
    fuzzified
}

fn warn_unknown_attributes(model: &FuzzyModel, candidate: &Candidate) {
    for (feature, _) in candidate.attributes() {
        if model.feature(feature).is_none() {
            warn!(
                "candidate '{}' declares unknown feature '{feature}'; ignoring",
                candidate.name()
            );
        }
    }
}

fn warn_clamped_attributes(model: &FuzzyModel, candidate: &Candidate) {
    for (feature, value) in out_of_domain_attributes(model, candidate) {
        warn!(
            "candidate '{}' value {value} for feature '{feature}' lies outside its domain; clamping",
            candidate.name()
        );
    }
}

/// Declared attributes of `candidate` that fall outside their feature domain.
fn out_of_domain_attributes<'c>(
    model: &FuzzyModel,
    candidate: &'c Candidate,
) -> Vec<(&'c str, f64)> {
    candidate
        .attributes()
        .filter(|&(feature, value)| {
            model
                .feature(feature)
                .is_some_and(|known| !known.domain().contains(value))
        })
        .collect()
}

/// Scorer backed by a [`PrecomputedCatalog`].
///
/// Produces the same scores as [`FuzzyScorer`]. Candidates missing from the
/// cache are fuzzified on demand.
#[derive(Debug, Clone, Copy)]
pub struct PrecomputedScorer<'a> {
    fallback: FuzzyScorer<'a>,
    cache: &'a PrecomputedCatalog,
}

impl<'a> PrecomputedScorer<'a> {
    /// Build a scorer reading from `cache`, falling back to `model`.
    #[must_use]
    pub const fn new(model: &'a FuzzyModel, cache: &'a PrecomputedCatalog) -> Self {
        Self {
            fallback: FuzzyScorer::new(model),
            cache,
        }
    }
}

impl Scorer for PrecomputedScorer<'_> {
    fn raw_score(&self, candidate: &Candidate, profile: &FuzzifiedProfile) -> f64 {
        let Some(cached) = self.cache.get(candidate.name()) else {
            debug!("candidate '{}' not precomputed", candidate.name());
            return self.fallback.raw_score(candidate, profile);
        };
        let total = profile
            .iter()
            .filter_map(|(feature, user)| cached.get(feature).map(|degrees| user.dot(degrees)))
            .sum();
        Self::sanitise(total)
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};
    use savour_core::{Domain, Feature, PreferenceProfile, Triangle};

    use super::*;
    use crate::fuzzify_profile;

    #[fixture]
    fn model() -> FuzzyModel {
        let triangle = |a, b, c| Triangle::new(a, b, c).expect("valid triangle");
        Feature::new("satiety", Domain::default())
            .and_then(|f| f.with_category("light", triangle(0.0, 0.0, 40.0)))
            .and_then(|f| f.with_category("medium", triangle(30.0, 50.0, 70.0)))
            .and_then(|f| f.with_category("filling", triangle(60.0, 100.0, 100.0)))
            .and_then(|satiety| FuzzyModel::new().with_feature(satiety))
            .expect("valid model")
    }

    #[fixture]
    fn catalog() -> Catalog {
        Catalog::new([
            Candidate::new("Salad").with_attribute("satiety", 10.0),
            Candidate::new("Pasta")
                .with_attribute("satiety", 90.0)
                .with_attribute("sauce", 1.0),
            Candidate::new("Water"),
        ])
        .expect("valid catalog")
    }

    #[rstest]
    fn caches_every_candidate(model: FuzzyModel, catalog: Catalog) {
        let cache = PrecomputedCatalog::new(&model, &catalog);
        assert_eq!(cache.len(), 3);
        let water = cache.get("Water").expect("cached water");
        assert_eq!(water.get("satiety").and_then(|set| set.get("light")), Some(1.0));
        let pasta = cache.get("Pasta").expect("cached pasta");
        assert!(pasta.get("sauce").is_none());
    }

    #[rstest]
    #[case(0.0, 1.0)]
    #[case(45.0, 0.3)]
    #[case(95.0, 2.0)]
    fn matches_per_request_scoring(
        model: FuzzyModel,
        catalog: Catalog,
        #[case] value: f64,
        #[case] weight: f64,
    ) {
        let cache = PrecomputedCatalog::new(&model, &catalog);
        let profile = PreferenceProfile::new().with_preference("satiety", value, weight);
        let fuzzified = fuzzify_profile(&model, &profile).expect("fuzzify");
        let cached = PrecomputedScorer::new(&model, &cache);
        let direct = FuzzyScorer::new(&model);
        for candidate in catalog.iter() {
            assert_eq!(
                cached.raw_score(candidate, &fuzzified),
                direct.raw_score(candidate, &fuzzified),
            );
        }
    }

    #[rstest]
    fn reports_values_outside_the_domain(model: FuzzyModel) {
        let candidate = Candidate::new("Feast")
            .with_attribute("satiety", 140.0)
            .with_attribute("sauce", 500.0);
        assert_eq!(
            out_of_domain_attributes(&model, &candidate),
            vec![("satiety", 140.0)]
        );
        let cache = PrecomputedCatalog::new(
            &model,
            &Catalog::new([candidate]).expect("valid catalog"),
        );
        let feast = cache.get("Feast").expect("cached feast");
        assert_eq!(feast.get("satiety").and_then(|set| set.get("filling")), Some(1.0));
    }

    #[rstest]
    fn in_domain_values_are_not_reported(model: FuzzyModel, catalog: Catalog) {
        for candidate in catalog.iter() {
            assert!(out_of_domain_attributes(&model, candidate).is_empty());
        }
    }

    #[rstest]
    fn falls_back_for_unknown_candidates(model: FuzzyModel) {
        let cache = PrecomputedCatalog::default();
        let profile = PreferenceProfile::new().with_preference("satiety", 90.0, 1.0);
        let fuzzified = fuzzify_profile(&model, &profile).expect("fuzzify");
        let stew = Candidate::new("Stew").with_attribute("satiety", 90.0);
        let score = PrecomputedScorer::new(&model, &cache).raw_score(&stew, &fuzzified);
        assert_eq!(score, FuzzyScorer::new(&model).raw_score(&stew, &fuzzified));
        assert!(score > 0.0);
    }
}
