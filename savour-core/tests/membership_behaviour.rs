#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for fuzzifying crisp values against a feature.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use savour_core::{Domain, Evaluation, Feature, FuzzySet, Triangle};

#[fixture]
fn feature() -> RefCell<Option<Feature>> {
    RefCell::new(None)
}

#[fixture]
fn degrees() -> RefCell<FuzzySet> {
    RefCell::new(FuzzySet::new())
}

fn triangle(a: f64, b: f64, c: f64) -> Triangle {
    Triangle::new(a, b, c).expect("valid triangle")
}

#[given("a temperature feature with cold, warm and hot categories")]
fn temperature(#[from(feature)] feature: &RefCell<Option<Feature>>) {
    let built = Feature::new("temperature", Domain::default())
        .and_then(|f| f.with_category("cold", triangle(0.0, 0.0, 40.0)))
        .and_then(|f| f.with_category("warm", triangle(30.0, 50.0, 70.0)))
        .and_then(|f| f.with_category("hot", triangle(60.0, 100.0, 100.0)))
        .expect("valid feature");
    feature.replace(Some(built));
}

#[when("I fuzzify the value {value}")]
fn fuzzify(
    value: f64,
    #[from(feature)] feature: &RefCell<Option<Feature>>,
    #[from(degrees)] degrees: &RefCell<FuzzySet>,
) {
    let borrowed = feature.borrow();
    let found = borrowed.as_ref().expect("feature must be defined");
    degrees.replace(found.fuzzify(value, Evaluation::Sampled));
}

#[when("I apply weight {weight} to the value {value}")]
fn fuzzify_weighted(
    weight: f64,
    value: f64,
    #[from(feature)] feature: &RefCell<Option<Feature>>,
    #[from(degrees)] degrees: &RefCell<FuzzySet>,
) {
    let borrowed = feature.borrow();
    let found = borrowed.as_ref().expect("feature must be defined");
    degrees.replace(found.fuzzify_weighted(value, weight, Evaluation::Sampled));
}

#[then("the degree of {category} is {expected}")]
fn degree_is(category: String, expected: f64, #[from(degrees)] degrees: &RefCell<FuzzySet>) {
    let actual = degrees
        .borrow()
        .get(&category)
        .expect("category must be present");
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected} for {category}, got {actual}"
    );
}

#[scenario(path = "tests/features/membership.feature", index = 0)]
fn peak_gives_full_membership(feature: RefCell<Option<Feature>>, degrees: RefCell<FuzzySet>) {
    let _ = (feature, degrees);
}

#[scenario(path = "tests/features/membership.feature", index = 1)]
fn overlapping_categories(feature: RefCell<Option<Feature>>, degrees: RefCell<FuzzySet>) {
    let _ = (feature, degrees);
}

#[scenario(path = "tests/features/membership.feature", index = 2)]
fn out_of_domain_clamped(feature: RefCell<Option<Feature>>, degrees: RefCell<FuzzySet>) {
    let _ = (feature, degrees);
}

#[scenario(path = "tests/features/membership.feature", index = 3)]
fn weight_scales_degrees(feature: RefCell<Option<Feature>>, degrees: RefCell<FuzzySet>) {
    let _ = (feature, degrees);
}
