//! Reference dish model and catalog.
//!
//! Seven features over `[0, 100]` sampled at step `1`, and twenty dishes
//! described on all of them.
//!
//! # Examples
//! ```
//! use savour_data::reference;
//!
//! let model = reference::model()?;
//! let catalog = reference::catalog()?;
//! assert_eq!(model.len(), 7);
//! assert_eq!(catalog.len(), 20);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![forbid(unsafe_code)]

use savour_core::{
    Candidate, Catalog, CatalogError, Domain, Feature, FuzzyModel, ModelError, PreferenceProfile,
    Triangle,
};

/// Feature names in declaration order.
pub const FEATURES: [&str; 7] = [
    "taste",
    "price",
    "temperature",
    "prep_time",
    "calories",
    "availability",
    "satiety",
];

/// Slider value of the neutral profile.
pub const NEUTRAL_SLIDER: f64 = 50.0;

/// Importance weight of the neutral profile.
pub const NEUTRAL_WEIGHT: f64 = 1.0;

type CategoryTable = &'static [(&'static str, [f64; 3])];

const TASTE: CategoryTable = &[
    ("sweet", [0.0, 0.0, 25.0]),
    ("salty", [20.0, 35.0, 50.0]),
    ("spicy", [40.0, 55.0, 70.0]),
    ("sour", [60.0, 75.0, 85.0]),
    ("bitter", [80.0, 100.0, 100.0]),
];

const LOW: [f64; 3] = [0.0, 0.0, 40.0];
const MID: [f64; 3] = [30.0, 50.0, 70.0];
const HIGH: [f64; 3] = [60.0, 100.0, 100.0];

const PRICE: CategoryTable = &[("cheap", LOW), ("medium", MID), ("expensive", HIGH)];
const TEMPERATURE: CategoryTable = &[("cold", LOW), ("warm", MID), ("hot", HIGH)];
const PREP_TIME: CategoryTable = &[("fast", LOW), ("medium", MID), ("long", HIGH)];
const CALORIES: CategoryTable = &[("low", LOW), ("medium", MID), ("high", HIGH)];
const AVAILABILITY: CategoryTable = &[("common", LOW), ("seasonal", MID), ("rare", HIGH)];
const SATIETY: CategoryTable = &[("light", LOW), ("medium", MID), ("filling", HIGH)];

const CATEGORIES: [CategoryTable; 7] = [
    TASTE,
    PRICE,
    TEMPERATURE,
    PREP_TIME,
    CALORIES,
    AVAILABILITY,
    SATIETY,
];

/// Dish values in [`FEATURES`] order.
const DISHES: [(&str, [f64; 7]); 20] = [
    ("Burger", [40.0, 50.0, 90.0, 10.0, 90.0, 10.0, 90.0]),
    ("Ice Cream", [0.0, 10.0, 10.0, 10.0, 50.0, 10.0, 10.0]),
    ("KFC Wings", [60.0, 50.0, 90.0, 10.0, 90.0, 10.0, 50.0]),
    ("Sushi", [40.0, 90.0, 10.0, 50.0, 10.0, 50.0, 10.0]),
    ("Pancakes", [10.0, 10.0, 50.0, 50.0, 50.0, 10.0, 50.0]),
    ("Pasta", [40.0, 50.0, 90.0, 50.0, 50.0, 10.0, 90.0]),
    ("Pizza", [40.0, 50.0, 90.0, 50.0, 90.0, 10.0, 90.0]),
    ("Dumplings", [40.0, 10.0, 50.0, 50.0, 50.0, 10.0, 50.0]),
    ("Pork Chop", [40.0, 50.0, 90.0, 50.0, 90.0, 10.0, 90.0]),
    ("Fries", [40.0, 10.0, 90.0, 10.0, 90.0, 10.0, 10.0]),
    ("Zapiekanka", [40.0, 10.0, 90.0, 10.0, 50.0, 10.0, 50.0]),
    ("Hunter's Stew", [40.0, 50.0, 90.0, 90.0, 90.0, 50.0, 90.0]),
    ("Sour Rye Soup", [80.0, 10.0, 90.0, 50.0, 50.0, 10.0, 50.0]),
    ("Kebab", [60.0, 50.0, 90.0, 10.0, 90.0, 10.0, 90.0]),
    ("Caesar Salad", [40.0, 50.0, 10.0, 10.0, 10.0, 10.0, 10.0]),
    ("Tacos", [60.0, 50.0, 50.0, 10.0, 50.0, 50.0, 50.0]),
    ("Donuts", [10.0, 10.0, 50.0, 50.0, 90.0, 10.0, 10.0]),
    ("Hot Dog", [40.0, 10.0, 90.0, 10.0, 90.0, 10.0, 50.0]),
    ("Potato Dumplings", [40.0, 10.0, 90.0, 50.0, 50.0, 10.0, 50.0]),
    ("Cheesecake", [10.0, 50.0, 10.0, 90.0, 90.0, 10.0, 50.0]),
];

/// Build the reference model with sampled evaluation.
///
/// # Errors
/// Returns [`ModelError`] only if the built-in tables are inconsistent.
pub fn model() -> Result<FuzzyModel, ModelError> {
    let mut model = FuzzyModel::new();
    for (name, categories) in FEATURES.into_iter().zip(CATEGORIES) {
        let mut feature = Feature::new(name, Domain::default())?;
        for &(category, [a, b, c]) in categories {
            let triangle = Triangle::new(a, b, c).map_err(|source| ModelError::Membership {
                feature: name.to_owned(),
                category: category.to_owned(),
                source,
            })?;
            feature.add_category(category, triangle)?;
        }
        model.add_feature(feature)?;
    }
    Ok(model)
}

/// Build the twenty reference dishes in catalog order.
///
/// # Errors
/// Returns [`CatalogError`] only if the built-in table repeats a name.
pub fn catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(DISHES.iter().map(|(name, values)| {
        FEATURES
            .into_iter()
            .zip(values.iter().copied())
            .fold(Candidate::new(*name), |candidate, (feature, value)| {
                candidate.with_attribute(feature, value)
            })
    }))
}

/// Profile with every slider centred and every weight at `1`.
#[must_use]
pub fn neutral_profile() -> PreferenceProfile {
    FEATURES
        .into_iter()
        .fold(PreferenceProfile::new(), |profile, feature| {
            profile.with_preference(feature, NEUTRAL_SLIDER, NEUTRAL_WEIGHT)
        })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use savour_core::Evaluation;
    use savour_scorer::Recommender;

    use super::*;

    #[rstest]
    fn model_declares_every_feature_in_order() {
        let model = model().expect("reference model");
        let names: Vec<_> = model.features().iter().map(Feature::name).collect();
        assert_eq!(names, FEATURES);
        assert_eq!(model.evaluation(), Evaluation::Sampled);
        let taste = model.feature("taste").expect("taste feature");
        assert_eq!(taste.categories().len(), 5);
    }

    #[rstest]
    #[case("taste", "sweet", 0.0, 1.0)]
    #[case("taste", "salty", 27.5, 0.5)]
    #[case("taste", "bitter", 90.0, 0.5)]
    #[case("price", "medium", 40.0, 0.5)]
    #[case("satiety", "filling", 80.0, 0.5)]
    fn reference_degrees(
        #[case] feature: &str,
        #[case] category: &str,
        #[case] value: f64,
        #[case] expected: f64,
    ) {
        let model = model().expect("reference model");
        let degrees = model.fuzzify_value(feature, value).expect("known feature");
        let degree = degrees.get(category).expect("known category");
        assert!((degree - expected).abs() < 1e-9, "{feature}/{category} at {value}");
    }

    #[rstest]
    fn catalog_lists_twenty_dishes_with_all_features() {
        let catalog = catalog().expect("reference catalog");
        assert_eq!(catalog.len(), 20);
        assert!(catalog
            .iter()
            .all(|dish| FEATURES.iter().all(|f| dish.attribute(f).is_some())));
        let sushi = catalog.get("Sushi").expect("sushi");
        assert_eq!(sushi.value("price"), 90.0);
    }

    #[rstest]
    fn neutral_profile_weighs_every_feature_equally() {
        let profile = neutral_profile();
        assert_eq!(profile.len(), FEATURES.len());
        assert_eq!(profile.total_weight(), 7.0);
    }

    #[rstest]
    fn neutral_profile_prefers_tacos() {
        let recommender = Recommender::new(
            model().expect("reference model"),
            catalog().expect("reference catalog"),
        );
        let recommendation = recommender
            .recommend(&neutral_profile())
            .expect("neutral recommendation");
        let best = recommendation.ranking.best().expect("non-empty ranking");
        assert_eq!(best.name, "Tacos");
        // Five centred features plus spicy(50) * spicy(60) for taste.
        let expected = (5.0 + (2.0 / 3.0) * (2.0 / 3.0)) / 7.0;
        assert!((best.score - expected).abs() < 1e-9);
    }

    #[rstest]
    #[case(100.0, "Burger")]
    #[case(0.0, "Ice Cream")]
    #[case(50.0, "Pancakes")]
    fn temperature_preference_picks_first_matching_dish(
        #[case] value: f64,
        #[case] expected: &str,
    ) {
        let recommender = Recommender::new(
            model().expect("reference model"),
            catalog().expect("reference catalog"),
        );
        let profile = PreferenceProfile::new().with_preference("temperature", value, 2.0);
        let recommendation = recommender.recommend(&profile).expect("recommendation");
        assert_eq!(
            recommendation.ranking.best().map(|entry| entry.name.as_str()),
            Some(expected)
        );
    }
}
