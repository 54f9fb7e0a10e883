//! Features and their fuzzy categories.

use crate::{Domain, FuzzySet, SampledMembership, Triangle};
use crate::model::{Evaluation, ModelError};

/// A named fuzzy category of a feature, e.g. "sweet" for taste.
///
/// The triangle is sampled over the feature domain when the category is
/// added, so the curve is available for both scoring and plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    name: String,
    triangle: Triangle,
    curve: SampledMembership,
}

impl Category {
    /// Category name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Analytic membership function.
    #[must_use]
    pub const fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    /// Membership function sampled over the feature domain.
    #[must_use]
    pub const fn curve(&self) -> &SampledMembership {
        &self.curve
    }
}

/// A named attribute with a bounded domain and ordered fuzzy categories.
///
/// # Examples
/// ```
/// use savour_core::{Domain, Evaluation, Feature, Triangle};
///
/// let temperature = Feature::new("temperature", Domain::default())?
///     .with_category("cold", Triangle::new(0.0, 0.0, 40.0)?)?
///     .with_category("warm", Triangle::new(30.0, 50.0, 70.0)?)?
///     .with_category("hot", Triangle::new(60.0, 100.0, 100.0)?)?;
///
/// let degrees = temperature.fuzzify(35.0, Evaluation::Sampled);
/// assert_eq!(degrees.get("cold"), Some(0.125));
/// assert_eq!(degrees.get("warm"), Some(0.25));
/// assert_eq!(degrees.get("hot"), Some(0.0));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    name: String,
    domain: Domain,
    categories: Vec<Category>,
}

impl Feature {
    /// Construct a feature without categories.
    ///
    /// # Errors
    /// Returns [`ModelError::EmptyName`] when `name` is blank.
    pub fn new(name: impl Into<String>, domain: Domain) -> Result<Self, ModelError> {
        let feature = name.into();
        if feature.trim().is_empty() {
            return Err(ModelError::EmptyName);
        }
        Ok(Self {
            name: feature,
            domain,
            categories: Vec::new(),
        })
    }

    /// Add a category while consuming `self`, enabling chaining.
    ///
    /// # Errors
    /// See [`Feature::add_category`].
    pub fn with_category(
        mut self,
        name: impl Into<String>,
        triangle: Triangle,
    ) -> Result<Self, ModelError> {
        self.add_category(name, triangle)?;
        Ok(self)
    }

    /// Append a category after the existing ones.
    ///
    /// # Errors
    /// Returns [`ModelError`] when the name is blank or already used in this
    /// feature, or when a control point lies outside the domain.
    pub fn add_category(
        &mut self,
        name: impl Into<String>,
        triangle: Triangle,
    ) -> Result<(), ModelError> {
        let category = name.into();
        if category.trim().is_empty() {
            return Err(ModelError::EmptyName);
        }
        if self.category(&category).is_some() {
            return Err(ModelError::DuplicateCategory {
                feature: self.name.clone(),
                category,
            });
        }
        if let Some(&point) = triangle
            .points()
            .iter()
            .find(|&&point| !self.domain.contains(point))
        {
            return Err(ModelError::ControlPointOutOfDomain {
                feature: self.name.clone(),
                category,
                point,
            });
        }
        let curve = triangle.sample(&self.domain);
        self.categories.push(Category {
            name: category,
            triangle,
            curve,
        });
        Ok(())
    }

    /// Feature name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Feature domain.
    #[must_use]
    pub const fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Categories in declaration order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by name.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }

    /// Membership degree of `value` in `category`.
    ///
    /// `value` is clamped into the feature domain first.
    #[must_use]
    pub fn degree(&self, category: &Category, value: f64, evaluation: Evaluation) -> f64 {
        let clamped = self.domain.clamp(value);
        match evaluation {
            Evaluation::Sampled => category.curve.interpolate(clamped),
            Evaluation::Analytic => category.triangle.evaluate(clamped),
        }
    }

    /// Unweighted degrees of `value` for every category.
    #[must_use]
    pub fn fuzzify(&self, value: f64, evaluation: Evaluation) -> FuzzySet {
        self.categories
            .iter()
            .map(|category| {
                (
                    category.name.as_str(),
                    self.degree(category, value, evaluation),
                )
            })
            .collect()
    }

    /// Degrees of `value` for every category, scaled by `weight`.
    ///
    /// The weight is a linear importance multiplier; results are not clamped
    /// and exceed `1` when `weight > 1`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "importance weights scale membership degrees linearly"
    )]
    pub fn fuzzify_weighted(&self, value: f64, weight: f64, evaluation: Evaluation) -> FuzzySet {
        self.categories
            .iter()
            .map(|category| {
                (
                    category.name.as_str(),
                    self.degree(category, value, evaluation) * weight,
                )
            })
            .collect()
    }

    /// Category label shown beneath a slider positioned at `value`.
    ///
    /// The domain, widened by one resolution step, is split into equal bands,
    /// one per category, in declaration order. Returns `None` when the feature
    /// has no categories.
    ///
    /// # Examples
    /// ```
    /// use savour_core::{Domain, Feature, Triangle};
    ///
    /// let price = Feature::new("price", Domain::default())?
    ///     .with_category("cheap", Triangle::new(0.0, 0.0, 40.0)?)?
    ///     .with_category("medium", Triangle::new(30.0, 50.0, 70.0)?)?
    ///     .with_category("expensive", Triangle::new(60.0, 100.0, 100.0)?)?;
    /// assert_eq!(price.label_for(0.0), Some("cheap"));
    /// assert_eq!(price.label_for(50.0), Some("medium"));
    /// assert_eq!(price.label_for(100.0), Some("expensive"));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "slider bands are computed from the clamped position"
    )]
    pub fn label_for(&self, value: f64) -> Option<&str> {
        let count = self.categories.len();
        let last = count.checked_sub(1)?;
        let position = self.domain.clamp(value) - self.domain.min();
        let span = self.domain.max() - self.domain.min();
        let band = (position * count as f64 / (span + self.domain.resolution())).floor() as usize;
        self.categories
            .get(band.min(last))
            .map(|category| category.name.as_str())
    }

    /// Human readable name: snake case becomes capitalised words.
    ///
    /// # Examples
    /// ```
    /// use savour_core::{Domain, Feature};
    ///
    /// let feature = Feature::new("prep_time", Domain::default())?;
    /// assert_eq!(feature.display_name(), "Prep time");
    /// # Ok::<(), savour_core::ModelError>(())
    /// ```
    #[must_use]
    pub fn display_name(&self) -> String {
        let spaced = self.name.to_lowercase().replace('_', " ");
        let mut chars = spaced.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }
}
