#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for end-to-end recommendations.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use savour_core::{
    Candidate, Catalog, Domain, Feature, FuzzyModel, PreferenceProfile, Triangle,
};
use savour_scorer::{Recommendation, Recommender, ScoreError};

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    model: FuzzyModel,
    catalog: RefCell<Option<Catalog>>,
    profile: RefCell<PreferenceProfile>,
    outcome: RefCell<Option<Result<Recommendation, ScoreError>>>,
}

#[fixture]
/// Build a fresh `TestContext` with a temperature and price model.
pub fn context() -> TestContext {
    let triangle = |a, b, c| Triangle::new(a, b, c).expect("valid triangle");
    let three_way = |name: &str, labels: [&str; 3]| {
        let [low, mid, high] = labels;
        Feature::new(name, Domain::default())
            .and_then(|f| f.with_category(low, triangle(0.0, 0.0, 40.0)))
            .and_then(|f| f.with_category(mid, triangle(30.0, 50.0, 70.0)))
            .and_then(|f| f.with_category(high, triangle(60.0, 100.0, 100.0)))
            .expect("valid feature")
    };
    let model = FuzzyModel::new()
        .with_feature(three_way("temperature", ["cold", "warm", "hot"]))
        .and_then(|m| m.with_feature(three_way("price", ["cheap", "medium", "expensive"])))
        .expect("valid model");
    TestContext {
        model,
        catalog: RefCell::new(None),
        profile: RefCell::new(PreferenceProfile::new()),
        outcome: RefCell::new(None),
    }
}

fn dish(name: &str, temperature: f64, price: f64) -> Candidate {
    Candidate::new(name)
        .with_attribute("temperature", temperature)
        .with_attribute("price", price)
}

fn recommendation(context: &TestContext) -> Recommendation {
    context
        .outcome
        .borrow()
        .as_ref()
        .expect("recommendation must be requested")
        .clone()
        .expect("recommendation should succeed")
}

fn ranked_names(context: &TestContext) -> Vec<String> {
    recommendation(context)
        .ranking
        .into_inner()
        .into_iter()
        .map(|entry| entry.name)
        .collect()
}

#[given("a catalog of ice cream, soup and salad")]
fn three_dishes(context: &TestContext) {
    let catalog = Catalog::new([
        dish("Ice Cream", 10.0, 10.0),
        dish("Soup", 90.0, 10.0),
        dish("Salad", 10.0, 50.0),
    ])
    .expect("valid catalog");
    *context.catalog.borrow_mut() = Some(catalog);
}

#[given("a catalog with two identical dishes")]
fn identical_dishes(context: &TestContext) {
    let catalog = Catalog::new([dish("Twin A", 90.0, 50.0), dish("Twin B", 90.0, 50.0)])
        .expect("valid catalog");
    *context.catalog.borrow_mut() = Some(catalog);
}

#[given("an empty catalog")]
fn empty_catalog(context: &TestContext) {
    *context.catalog.borrow_mut() = Some(Catalog::default());
}

#[given("a profile preferring hot food")]
fn hot_profile(context: &TestContext) {
    let mut profile = context.profile.borrow_mut();
    profile.set_preference("temperature", 100.0, 2.0);
    profile.set_preference("price", 50.0, 0.5);
}

#[given("a profile with every weight set to zero")]
fn zero_profile(context: &TestContext) {
    let mut profile = context.profile.borrow_mut();
    profile.set_preference("temperature", 100.0, 0.0);
    profile.set_preference("price", 10.0, 0.0);
}

#[given("a profile naming an unknown feature")]
fn unknown_profile(context: &TestContext) {
    context
        .profile
        .borrow_mut()
        .set_preference("spiciness", 80.0, 1.0);
}

#[when("I request a recommendation")]
fn request(context: &TestContext) {
    let catalog = context
        .catalog
        .borrow_mut()
        .take()
        .expect("catalog must be initialised");
    let recommender = Recommender::new(context.model.clone(), catalog);
    let outcome = recommender.recommend(&context.profile.borrow());
    *context.outcome.borrow_mut() = Some(outcome);
}

#[then("\"Soup\" is ranked first")]
fn soup_first(context: &TestContext) {
    let names = ranked_names(context);
    assert_eq!(names.first().map(String::as_str), Some("Soup"));
}

#[then("the scores are normalised by the total weight")]
fn normalised(context: &TestContext) {
    let result = recommendation(context);
    assert_eq!(result.normalisation.divisor(), 2.5);
    assert!(result.ranking.entries().iter().all(|entry| entry.score <= 1.0));
}

#[then("every score is 0")]
fn all_zero(context: &TestContext) {
    let result = recommendation(context);
    assert!(result.ranking.entries().iter().all(|entry| entry.score == 0.0));
}

#[then("the normalisation is degenerate")]
fn degenerate(context: &TestContext) {
    assert!(recommendation(context).normalisation.is_degenerate());
}

#[then("\"Twin A\" is ranked before \"Twin B\"")]
fn twins_in_order(context: &TestContext) {
    assert_eq!(ranked_names(context), ["Twin A", "Twin B"]);
}

#[then("the ranking is empty")]
fn ranking_empty(context: &TestContext) {
    assert!(recommendation(context).ranking.is_empty());
}

#[then("the request fails for feature \"spiciness\"")]
fn fails_for_unknown(context: &TestContext) {
    let outcome = context.outcome.borrow();
    let Some(Err(err)) = outcome.as_ref() else {
        panic!("recommendation should fail");
    };
    assert_eq!(
        err,
        &ScoreError::UnknownFeature {
            feature: "spiciness".into()
        }
    );
}

#[scenario(path = "tests/features/recommendation.feature", index = 0)]
fn hot_preference_ranks_soup_first(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommendation.feature", index = 1)]
fn zero_weights_are_degenerate(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommendation.feature", index = 2)]
fn ties_keep_catalog_order(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommendation.feature", index = 3)]
fn empty_catalog_ranks_nothing(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommendation.feature", index = 4)]
fn unknown_features_fail(context: TestContext) {
    let _ = context;
}
