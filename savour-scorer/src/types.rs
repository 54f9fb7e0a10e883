//! Public output types for scoring and ranking.
#![forbid(unsafe_code)]

use serde::Serialize;

/// How raw scores were turned into normalised scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Normalisation {
    /// Raw scores were divided by the profile's total weight.
    Weighted {
        /// Sum of the declared weights.
        total_weight: f64,
    },
    /// Every weight was zero, so raw scores were divided by `1.0`.
    ///
    /// Scores are raw sums rather than fractions of a perfect match.
    Degenerate,
}

impl Normalisation {
    /// Choose the normalisation for a profile's total weight.
    ///
    /// Zero, negative or non-finite totals are degenerate.
    ///
    /// # Examples
    /// ```
    /// use savour_scorer::Normalisation;
    ///
    /// assert_eq!(Normalisation::from_total_weight(0.0), Normalisation::Degenerate);
    /// assert_eq!(Normalisation::from_total_weight(2.5).divisor(), 2.5);
    /// ```
    #[must_use]
    pub fn from_total_weight(total_weight: f64) -> Self {
        if total_weight.is_finite() && total_weight > 0.0 {
            Self::Weighted { total_weight }
        } else {
            Self::Degenerate
        }
    }

    /// Denominator applied to raw scores.
    #[must_use]
    pub const fn divisor(self) -> f64 {
        match self {
            Self::Weighted { total_weight } => total_weight,
            Self::Degenerate => 1.0,
        }
    }

    /// Report whether scores are raw sums.
    #[must_use]
    pub const fn is_degenerate(self) -> bool {
        matches!(self, Self::Degenerate)
    }
}

/// A candidate with its normalised match score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    /// Candidate name.
    pub name: String,
    /// Normalised score; `1.0` is a perfect match.
    pub score: f64,
}

impl ScoredCandidate {
    /// Score as a percentage of a perfect match.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "percentages scale the normalised score"
    )]
    pub fn percent(&self) -> f64 {
        self.score * 100.0
    }
}

/// Scores for every candidate of a catalog, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSheet {
    /// Scores in catalog order; not sorted.
    pub scores: Vec<ScoredCandidate>,
    /// Normalisation applied to the raw scores.
    pub normalisation: Normalisation,
}

/// Candidates ordered by descending score.
///
/// Equal scores keep catalog order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Ranking {
    entries: Vec<ScoredCandidate>,
}

impl Ranking {
    pub(crate) const fn from_sorted(entries: Vec<ScoredCandidate>) -> Self {
        Self { entries }
    }

    /// Entries from best to worst.
    #[must_use]
    pub fn entries(&self) -> &[ScoredCandidate] {
        &self.entries
    }

    /// The best `count` entries.
    #[must_use]
    pub fn top(&self, count: usize) -> &[ScoredCandidate] {
        self.entries.get(..count).unwrap_or(&self.entries)
    }

    /// Best entry, if any.
    #[must_use]
    pub fn best(&self) -> Option<&ScoredCandidate> {
        self.entries.first()
    }

    /// 1-based position of `name`, if ranked.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.name == name)
            .map(|index| index.saturating_add(1))
    }

    /// Number of ranked candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether nothing was ranked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the ranking and return the ordered entries.
    #[must_use]
    pub fn into_inner(self) -> Vec<ScoredCandidate> {
        self.entries
    }
}
