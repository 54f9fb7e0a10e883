//! Score candidates against a fuzzified preference profile.
//!
//! The `Scorer` trait assigns a raw match score to a
//! [`Candidate`](crate::Candidate) given the caller's
//! [`FuzzifiedProfile`](crate::FuzzifiedProfile). Normalisation by the
//! profile's total weight and ranking happen downstream.

use crate::{Candidate, FuzzifiedProfile};

/// Calculate a raw match score for a candidate.
///
/// Higher scores indicate a better match between the candidate and the
/// caller's weighted preferences. Implementations must be thread-safe
/// (`Send` + `Sync`) so scorers can serve concurrent requests.
/// The method is infallible; unknown features must have been rejected while
/// fuzzifying the profile.
///
/// Implementations must:
/// - Produce finite (`f64::is_finite`) scores.
/// - Return non-negative values.
///
/// Use [`Scorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use savour_core::{Candidate, FuzzifiedProfile, Scorer};
///
/// struct UnitScorer;
///
/// impl Scorer for UnitScorer {
///     fn raw_score(&self, _candidate: &Candidate, _profile: &FuzzifiedProfile) -> f64 {
///         1.0
///     }
/// }
///
/// let candidate = Candidate::new("Tacos");
/// let profile = FuzzifiedProfile::new();
/// assert_eq!(UnitScorer.raw_score(&candidate, &profile), 1.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return the unnormalised match of `candidate` against `profile`.
    fn raw_score(&self, candidate: &Candidate, profile: &FuzzifiedProfile) -> f64;

    /// Validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps negatives to `0.0`.
    /// Scores above `1.0` are legitimate and left untouched.
    #[must_use]
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.max(0.0)
    }
}
