//! Triangular membership functions and their sampled curves.
//!
//! A [`Triangle`] is evaluated analytically. A [`SampledMembership`] holds the
//! same shape sampled over a [`Domain`] grid and answers arbitrary queries by
//! linear interpolation between adjacent samples.

use thiserror::Error;

use crate::Domain;

/// Piecewise-linear fuzzy set with control points `a <= b <= c`.
///
/// `a == b` gives a left shoulder (full membership up to `b`), `b == c` a
/// right shoulder (full membership from `b`). When all three coincide the set
/// is a singleton at `b`.
///
/// # Examples
/// ```
/// use savour_core::Triangle;
///
/// let warm = Triangle::new(30.0, 50.0, 70.0)?;
/// assert_eq!(warm.evaluate(50.0), 1.0);
/// assert_eq!(warm.evaluate(40.0), 0.5);
/// assert_eq!(warm.evaluate(70.0), 0.0);
/// # Ok::<(), savour_core::MembershipError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Triangle {
    a: f64,
    b: f64,
    c: f64,
}

/// Errors returned by [`Triangle::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MembershipError {
    /// A control point was `NaN` or infinite.
    #[error("control points must be finite (got ({a}, {b}, {c}))")]
    NonFinite {
        /// Left foot.
        a: f64,
        /// Peak.
        b: f64,
        /// Right foot.
        c: f64,
    },
    /// Control points were not ordered `a <= b <= c`.
    #[error("control points must satisfy a <= b <= c (got ({a}, {b}, {c}))")]
    Unordered {
        /// Left foot.
        a: f64,
        /// Peak.
        b: f64,
        /// Right foot.
        c: f64,
    },
}

impl Triangle {
    /// Validate and construct a triangle.
    ///
    /// # Errors
    /// Returns [`MembershipError`] when a point is not finite or the points
    /// are out of order.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, MembershipError> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return Err(MembershipError::NonFinite { a, b, c });
        }
        if a > b || b > c {
            return Err(MembershipError::Unordered { a, b, c });
        }
        Ok(Self { a, b, c })
    }

    /// Control points as `[a, b, c]`.
    #[must_use]
    pub const fn points(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    /// Membership degree of `x` in `[0, 1]`.
    ///
    /// No clamping happens here; callers evaluating against a feature clamp
    /// into the feature domain first. `NaN` yields `0`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::float_cmp,
        reason = "triangular membership is a ratio of exact control point distances"
    )]
    pub fn evaluate(&self, x: f64) -> f64 {
        let Self { a, b, c } = *self;
        if x.is_nan() {
            return 0.0;
        }
        if a == b && b == c {
            return if x == b { 1.0 } else { 0.0 };
        }
        if (a == b && x <= b) || (b == c && x >= b) || x == b {
            return 1.0;
        }
        if x <= a || x >= c {
            return 0.0;
        }
        if x < b {
            (x - a) / (b - a)
        } else {
            (c - x) / (c - b)
        }
    }

    /// Sample the triangle at every grid point of `domain`.
    #[must_use]
    pub fn sample(&self, domain: &Domain) -> SampledMembership {
        let grid = domain.grid();
        let degrees = grid.iter().map(|&x| self.evaluate(x)).collect();
        SampledMembership { grid, degrees }
    }
}

/// A membership curve sampled once over a domain grid.
///
/// Queries between grid points are answered by linear interpolation, so the
/// curve reproduces the triangle exactly wherever its corners fall on the
/// grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledMembership {
    grid: Vec<f64>,
    degrees: Vec<f64>,
}

impl SampledMembership {
    /// Build a curve from explicit samples.
    ///
    /// Returns `None` when the lengths differ, the grid is empty, or the grid
    /// is not strictly increasing.
    #[must_use]
    pub fn from_samples(grid: Vec<f64>, degrees: Vec<f64>) -> Option<Self> {
        if grid.is_empty() || grid.len() != degrees.len() {
            return None;
        }
        if grid.windows(2).any(|pair| !matches!(pair, [lo, hi] if lo < hi)) {
            return None;
        }
        Some(Self { grid, degrees })
    }

    /// Sampled degrees in grid order.
    #[must_use]
    pub fn degrees(&self) -> &[f64] {
        &self.degrees
    }

    /// Grid points in ascending order.
    #[must_use]
    pub fn grid(&self) -> &[f64] {
        &self.grid
    }

    /// Iterate over `(x, degree)` pairs, e.g. for plotting.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.grid.iter().copied().zip(self.degrees.iter().copied())
    }

    /// Degree at `x`, linearly interpolated between the neighbouring samples.
    ///
    /// `x` is clamped into the grid range; `NaN` is treated as the first grid
    /// point.
    ///
    /// # Examples
    /// ```
    /// use savour_core::{Domain, Triangle};
    ///
    /// let curve = Triangle::new(0.0, 0.0, 40.0)?.sample(&Domain::default());
    /// assert_eq!(curve.interpolate(10.0), 0.75);
    /// assert!((curve.interpolate(10.5) - 0.7375).abs() < 1e-12);
    /// # Ok::<(), savour_core::MembershipError>(())
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::float_cmp,
        reason = "linear interpolation between two stored samples"
    )]
    pub fn interpolate(&self, x: f64) -> f64 {
        let (Some(&first), Some(&last)) = (self.grid.first(), self.grid.last()) else {
            return 0.0;
        };
        let query = if x.is_nan() { first } else { x.clamp(first, last) };
        let upper = self.grid.partition_point(|&point| point < query);
        let (Some(&hi_x), Some(&hi_y)) = (self.grid.get(upper), self.degrees.get(upper)) else {
            return self.degrees.last().copied().unwrap_or(0.0);
        };
        if hi_x == query {
            return hi_y;
        }
        let Some(lower) = upper.checked_sub(1) else {
            return hi_y;
        };
        let (Some(&lo_x), Some(&lo_y)) = (self.grid.get(lower), self.degrees.get(lower)) else {
            return hi_y;
        };
        lo_y + (hi_y - lo_y) * (query - lo_x) / (hi_x - lo_x)
    }
}
