//! Candidate entities and the catalog they are ranked from.

use std::collections::{BTreeMap, HashSet};

use thiserror::Error;

/// Crisp value assumed for a feature a candidate does not define.
pub const NEUTRAL_VALUE: f64 = 0.0;

/// A named entity with crisp feature values.
///
/// # Examples
/// ```
/// use savour_core::Candidate;
///
/// let sushi = Candidate::new("Sushi")
///     .with_attribute("price", 90.0)
///     .with_attribute("temperature", 10.0);
/// assert_eq!(sushi.value("price"), 90.0);
/// assert_eq!(sushi.value("satiety"), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Candidate {
    name: String,
    attributes: BTreeMap<String, f64>,
}

impl Candidate {
    /// Construct a candidate without attributes.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Set a crisp value while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_attribute(mut self, feature: impl Into<String>, value: f64) -> Self {
        self.set_attribute(feature, value);
        self
    }

    /// Insert or replace a crisp value.
    pub fn set_attribute(&mut self, feature: impl Into<String>, value: f64) {
        self.attributes.insert(feature.into(), value);
    }

    /// Candidate name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Crisp value for `feature`, if defined.
    #[must_use]
    pub fn attribute(&self, feature: &str) -> Option<f64> {
        self.attributes.get(feature).copied()
    }

    /// Crisp value for `feature`, falling back to [`NEUTRAL_VALUE`].
    #[must_use]
    pub fn value(&self, feature: &str) -> f64 {
        self.attribute(feature).unwrap_or(NEUTRAL_VALUE)
    }

    /// Iterate over defined `(feature, value)` pairs sorted by feature name.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, f64)> {
        self.attributes
            .iter()
            .map(|(feature, value)| (feature.as_str(), *value))
    }
}

/// Errors raised while assembling a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A candidate had a blank name.
    #[error("candidate names must not be blank")]
    EmptyName,
    /// Two candidates shared a name.
    #[error("candidate '{name}' appears more than once")]
    DuplicateCandidate {
        /// Repeated candidate name.
        name: String,
    },
}

/// Ordered, immutable collection of candidates.
///
/// Iteration order is insertion order and is the tie-break order when
/// ranking.
///
/// # Examples
/// ```
/// use savour_core::{Candidate, Catalog};
///
/// let catalog = Catalog::new([Candidate::new("Pizza"), Candidate::new("Pasta")])?;
/// let names: Vec<_> = catalog.iter().map(Candidate::name).collect();
/// assert_eq!(names, ["Pizza", "Pasta"]);
/// # Ok::<(), savour_core::CatalogError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Catalog {
    candidates: Vec<Candidate>,
}

impl Catalog {
    /// Validate and construct a catalog.
    ///
    /// # Errors
    /// Returns [`CatalogError`] for blank or repeated candidate names.
    pub fn new<I>(candidates: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = Candidate>,
    {
        let collected: Vec<Candidate> = candidates.into_iter().collect();
        let mut seen = HashSet::with_capacity(collected.len());
        for candidate in &collected {
            if candidate.name.trim().is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if !seen.insert(candidate.name.as_str()) {
                return Err(CatalogError::DuplicateCandidate {
                    name: candidate.name.clone(),
                });
            }
        }
        Ok(Self {
            candidates: collected,
        })
    }

    /// Look up a candidate by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Candidate> {
        self.candidates
            .iter()
            .find(|candidate| candidate.name == name)
    }

    /// Iterate over candidates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    /// Number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Report whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
