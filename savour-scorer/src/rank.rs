//! Stable descending ranking.
#![forbid(unsafe_code)]

use std::cmp::Ordering;

use crate::{Ranking, ScoredCandidate};

/// Sort scored candidates by descending score.
///
/// The sort is stable: equal scores keep their input order. Incomparable
/// scores (`NaN`) are treated as equal to their neighbours.
///
/// # Examples
/// ```
/// use savour_scorer::{ScoredCandidate, rank};
///
/// let ranking = rank(vec![
///     ScoredCandidate { name: "Fries".into(), score: 0.4 },
///     ScoredCandidate { name: "Pizza".into(), score: 0.9 },
///     ScoredCandidate { name: "Kebab".into(), score: 0.4 },
/// ]);
/// let names: Vec<_> = ranking.entries().iter().map(|e| e.name.as_str()).collect();
/// assert_eq!(names, ["Pizza", "Fries", "Kebab"]);
/// ```
#[must_use]
pub fn rank(mut scores: Vec<ScoredCandidate>) -> Ranking {
    scores.sort_by(|lhs, rhs| {
        rhs.score
            .partial_cmp(&lhs.score)
            .unwrap_or(Ordering::Equal)
    });
    Ranking::from_sorted(scores)
}
