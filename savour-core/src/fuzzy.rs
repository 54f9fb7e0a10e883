//! Fuzzified values: category degrees per feature.

/// Membership degree of one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDegree {
    /// Category name.
    pub category: String,
    /// Membership degree, possibly scaled by an importance weight.
    pub degree: f64,
}

/// Category degrees for a single feature, in category order.
///
/// Degrees produced for a candidate lie in `[0, 1]`. Degrees produced for a
/// weighted preference are scaled by the weight and may exceed `1`.
///
/// # Examples
/// ```
/// use savour_core::FuzzySet;
///
/// let set = FuzzySet::from_iter([("cold", 0.25), ("warm", 0.5)]);
/// assert_eq!(set.get("warm"), Some(0.5));
/// assert_eq!(set.get("hot"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FuzzySet {
    degrees: Vec<CategoryDegree>,
}

impl FuzzySet {
    /// Construct an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            degrees: Vec::new(),
        }
    }

    /// Append a category degree.
    pub fn push(&mut self, category: impl Into<String>, degree: f64) {
        self.degrees.push(CategoryDegree {
            category: category.into(),
            degree,
        });
    }

    /// Degree of `category`, if present.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<f64> {
        self.degrees
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.degree)
    }

    /// Iterate over the category degrees in order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryDegree> {
        self.degrees.iter()
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    /// Report whether the set has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    /// Sum of pairwise products over this set's categories.
    ///
    /// Categories missing from `other` count as degree `0`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "dot product of membership degrees"
    )]
    pub fn dot(&self, other: &Self) -> f64 {
        self.degrees
            .iter()
            .map(|entry| entry.degree * other.get(&entry.category).unwrap_or(0.0))
            .sum()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for FuzzySet {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (category, degree) in iter {
            set.push(category, degree);
        }
        set
    }
}

/// A preference profile mapped to weighted category degrees.
///
/// Features keep the order in which the profile declared them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FuzzifiedProfile {
    features: Vec<(String, FuzzySet)>,
}

impl FuzzifiedProfile {
    /// Construct an empty fuzzified profile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            features: Vec::new(),
        }
    }

    /// Record the degrees for `feature`, replacing any earlier entry.
    pub fn insert(&mut self, feature: impl Into<String>, set: FuzzySet) {
        let name = feature.into();
        if let Some(slot) = self.features.iter_mut().find(|(known, _)| *known == name) {
            slot.1 = set;
        } else {
            self.features.push((name, set));
        }
    }

    /// Degrees recorded for `feature`, if present.
    #[must_use]
    pub fn get(&self, feature: &str) -> Option<&FuzzySet> {
        self.features
            .iter()
            .find(|(name, _)| name == feature)
            .map(|(_, set)| set)
    }

    /// Iterate over `(feature, degrees)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FuzzySet)> {
        self.features.iter().map(|(name, set)| (name.as_str(), set))
    }

    /// Number of features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Report whether no features were fuzzified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(feature = "serde")]
mod serialise {
    //! Maps keyed by name, preserving declaration order.

    use serde::ser::{Serialize, SerializeMap, Serializer};

    use super::{FuzzifiedProfile, FuzzySet};

    impl Serialize for FuzzySet {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for entry in self.iter() {
                map.serialize_entry(&entry.category, &entry.degree)?;
            }
            map.end()
        }
    }

    impl Serialize for FuzzifiedProfile {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (feature, set) in self.iter() {
                map.serialize_entry(feature, set)?;
            }
            map.end()
        }
    }
}
