//! The fuzzy model: every feature the engine can score.
//!
//! A [`FuzzyModel`] is built once at startup and shared read-only by every
//! scoring request.

use thiserror::Error;

use crate::{DomainError, Feature, FuzzySet, MembershipError};

/// How crisp values are mapped onto membership degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Evaluation {
    /// Interpolate the curve sampled over the domain grid.
    #[default]
    Sampled,
    /// Evaluate the triangle directly.
    Analytic,
}

/// Errors raised while assembling a model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A feature or category name was blank.
    #[error("feature and category names must not be blank")]
    EmptyName,
    /// Two features shared a name.
    #[error("feature '{feature}' is defined more than once")]
    DuplicateFeature {
        /// Repeated feature name.
        feature: String,
    },
    /// Two categories of one feature shared a name.
    #[error("category '{category}' is defined more than once for feature '{feature}'")]
    DuplicateCategory {
        /// Owning feature.
        feature: String,
        /// Repeated category name.
        category: String,
    },
    /// A membership control point fell outside the feature domain.
    #[error("category '{category}' of feature '{feature}' has control point {point} outside the domain")]
    ControlPointOutOfDomain {
        /// Owning feature.
        feature: String,
        /// Offending category.
        category: String,
        /// Offending control point.
        point: f64,
    },
    /// A domain definition was invalid.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// A membership function definition was invalid.
    #[error("invalid membership function for category '{category}' of feature '{feature}'")]
    Membership {
        /// Owning feature.
        feature: String,
        /// Offending category.
        category: String,
        /// Underlying validation failure.
        #[source]
        source: MembershipError,
    },
}

/// Ordered collection of features with a shared evaluation strategy.
///
/// # Examples
/// ```
/// use savour_core::{Domain, Feature, FuzzyModel, Triangle};
///
/// let temperature = Feature::new("temperature", Domain::default())?
///     .with_category("warm", Triangle::new(30.0, 50.0, 70.0)?)?;
/// let model = FuzzyModel::new().with_feature(temperature)?;
///
/// assert!(model.feature("temperature").is_some());
/// assert!(model.feature("price").is_none());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FuzzyModel {
    features: Vec<Feature>,
    evaluation: Evaluation,
}

impl FuzzyModel {
    /// Construct an empty model using sampled evaluation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch the evaluation strategy.
    #[must_use]
    pub const fn with_evaluation(mut self, evaluation: Evaluation) -> Self {
        self.evaluation = evaluation;
        self
    }

    /// Add a feature while consuming `self`, enabling chaining.
    ///
    /// # Errors
    /// See [`FuzzyModel::add_feature`].
    pub fn with_feature(mut self, feature: Feature) -> Result<Self, ModelError> {
        self.add_feature(feature)?;
        Ok(self)
    }

    /// Append a feature.
    ///
    /// # Errors
    /// Returns [`ModelError::DuplicateFeature`] when the name is taken.
    pub fn add_feature(&mut self, feature: Feature) -> Result<(), ModelError> {
        if self.feature(feature.name()).is_some() {
            return Err(ModelError::DuplicateFeature {
                feature: feature.name().to_owned(),
            });
        }
        self.features.push(feature);
        Ok(())
    }

    /// Evaluation strategy shared by every feature.
    #[must_use]
    pub const fn evaluation(&self) -> Evaluation {
        self.evaluation
    }

    /// Features in declaration order.
    #[must_use]
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Look up a feature by name.
    #[must_use]
    pub fn feature(&self, name: &str) -> Option<&Feature> {
        self.features.iter().find(|feature| feature.name() == name)
    }

    /// Unweighted degrees of `value` for `feature`, or `None` when the model
    /// does not define it.
    #[must_use]
    pub fn fuzzify_value(&self, feature: &str, value: f64) -> Option<FuzzySet> {
        self.feature(feature)
            .map(|found| found.fuzzify(value, self.evaluation))
    }

    /// Number of features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Report whether the model has no features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Domain, Triangle};
    use rstest::rstest;

    fn feature(name: &str) -> Feature {
        Feature::new(name, Domain::default())
            .and_then(|f| {
                f.with_category(
                    "low",
                    Triangle::new(0.0, 0.0, 40.0).expect("valid triangle"),
                )
            })
            .expect("valid feature")
    }

    #[rstest]
    fn rejects_duplicate_features() {
        let err = FuzzyModel::new()
            .with_feature(feature("price"))
            .and_then(|model| model.with_feature(feature("price")))
            .expect_err("duplicate feature");
        assert_eq!(
            err,
            ModelError::DuplicateFeature {
                feature: "price".into()
            }
        );
    }

    #[rstest]
    fn keeps_feature_order() {
        let model = FuzzyModel::new()
            .with_feature(feature("taste"))
            .and_then(|model| model.with_feature(feature("price")))
            .expect("valid model");
        let names: Vec<_> = model.features().iter().map(Feature::name).collect();
        assert_eq!(names, vec!["taste", "price"]);
    }

    #[rstest]
    fn fuzzify_value_uses_model_evaluation() {
        let model = FuzzyModel::new()
            .with_evaluation(Evaluation::Analytic)
            .with_feature(feature("price"))
            .expect("valid model");
        let degrees = model.fuzzify_value("price", 20.0).expect("known feature");
        assert_eq!(degrees.get("low"), Some(0.5));
        assert!(model.fuzzify_value("taste", 20.0).is_none());
    }
}
