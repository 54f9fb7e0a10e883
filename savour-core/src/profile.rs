//! Preference profiles: per-feature crisp targets with importance weights.
//!
//! Weights live in `0.0..=MAX_WEIGHT`. `set_preference` clamps into range;
//! `try_set_preference` rejects out-of-range input instead.

use thiserror::Error;

/// Upper bound of an importance weight.
pub const MAX_WEIGHT: f64 = 2.0;

/// A crisp target value and how much it matters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Preference {
    /// Desired crisp value in the feature domain.
    pub value: f64,
    /// Importance multiplier in `0.0..=MAX_WEIGHT`.
    pub weight: f64,
}

/// Errors returned by [`PreferenceProfile::try_set_preference`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    /// The weight was not finite or outside `0.0..=MAX_WEIGHT`.
    #[error(
        "weight {weight} for feature '{feature}' must be between 0 and {max}",
        max = MAX_WEIGHT
    )]
    InvalidWeight {
        /// Feature the weight was declared for.
        feature: String,
        /// Rejected weight.
        weight: f64,
    },
    /// The target value was `NaN` or infinite.
    #[error("value {value} for feature '{feature}' must be finite")]
    NonFiniteValue {
        /// Feature the value was declared for.
        feature: String,
        /// Rejected value.
        value: f64,
    },
}

/// A user's preferences across features, in declaration order.
///
/// # Examples
/// ```
/// use savour_core::PreferenceProfile;
///
/// let profile = PreferenceProfile::new()
///     .with_preference("taste", 40.0, 1.0)
///     .with_preference("price", 10.0, 0.5);
/// assert_eq!(profile.preference("price").map(|p| p.weight), Some(0.5));
/// assert_eq!(profile.total_weight(), 1.5);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PreferenceProfile {
    preferences: Vec<(String, Preference)>,
}

impl PreferenceProfile {
    /// Construct an empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the preference for a feature, if present.
    ///
    /// # Examples
    /// ```
    /// use savour_core::PreferenceProfile;
    ///
    /// let profile = PreferenceProfile::new().with_preference("satiety", 90.0, 1.0);
    /// assert!(profile.preference("satiety").is_some());
    /// assert!(profile.preference("calories").is_none());
    /// ```
    #[must_use]
    pub fn preference(&self, feature: &str) -> Option<Preference> {
        self.preferences
            .iter()
            .find(|(name, _)| name == feature)
            .map(|(_, preference)| *preference)
    }

    /// Insert or update a preference.
    ///
    /// The weight is clamped into `0.0..=MAX_WEIGHT`; a `NaN` weight becomes
    /// `0.0`. Updating keeps the feature's original position.
    ///
    /// # Examples
    /// ```
    /// use savour_core::{MAX_WEIGHT, PreferenceProfile};
    ///
    /// let mut profile = PreferenceProfile::new();
    /// profile.set_preference("price", 30.0, 5.0);
    /// assert_eq!(profile.preference("price").map(|p| p.weight), Some(MAX_WEIGHT));
    /// ```
    pub fn set_preference(&mut self, feature: impl Into<String>, value: f64, weight: f64) {
        let clamped = if weight.is_nan() {
            0.0
        } else {
            weight.clamp(0.0, MAX_WEIGHT)
        };
        self.upsert(feature.into(), Preference {
            value,
            weight: clamped,
        });
    }

    /// Insert or update a preference, rejecting invalid input.
    ///
    /// # Errors
    /// Returns [`ProfileError`] when the value is not finite or the weight is
    /// not finite or outside `0.0..=MAX_WEIGHT`. The profile is unchanged on
    /// error.
    pub fn try_set_preference(
        &mut self,
        feature: impl Into<String>,
        value: f64,
        weight: f64,
    ) -> Result<(), ProfileError> {
        let name = feature.into();
        if !value.is_finite() {
            return Err(ProfileError::NonFiniteValue {
                feature: name,
                value,
            });
        }
        if !(0.0..=MAX_WEIGHT).contains(&weight) {
            return Err(ProfileError::InvalidWeight {
                feature: name,
                weight,
            });
        }
        self.upsert(name, Preference { value, weight });
        Ok(())
    }

    /// Add a preference while returning `self` for chaining.
    #[must_use]
    pub fn with_preference(mut self, feature: impl Into<String>, value: f64, weight: f64) -> Self {
        self.set_preference(feature, value, weight);
        self
    }

    /// Iterate over `(feature, preference)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Preference)> {
        self.preferences
            .iter()
            .map(|(name, preference)| (name.as_str(), *preference))
    }

    /// Sum of all declared weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.preferences
            .iter()
            .map(|(_, preference)| preference.weight)
            .sum()
    }

    /// Number of features with a preference.
    #[must_use]
    pub fn len(&self) -> usize {
        self.preferences.len()
    }

    /// Report whether no preferences were declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.preferences.is_empty()
    }

    fn upsert(&mut self, feature: String, preference: Preference) {
        if let Some(slot) = self
            .preferences
            .iter_mut()
            .find(|(name, _)| *name == feature)
        {
            slot.1 = preference;
        } else {
            self.preferences.push((feature, preference));
        }
    }
}
