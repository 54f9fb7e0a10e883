//! Bounded, discretised numeric domains.
//!
//! Every feature is defined over a closed interval `[min, max]`. Membership
//! curves are sampled once over the domain grid and crisp inputs are clamped
//! into the interval before evaluation.

use thiserror::Error;

/// Lower bound of the reference domain.
pub const DEFAULT_MIN: f64 = 0.0;
/// Upper bound of the reference domain.
pub const DEFAULT_MAX: f64 = 100.0;
/// Grid spacing of the reference domain.
pub const DEFAULT_RESOLUTION: f64 = 1.0;

/// Largest number of grid points a domain may sample.
pub const MAX_GRID_POINTS: u32 = 1_000_000;

// Absorbs rounding when the span is an exact multiple of the resolution.
const GRID_EPSILON: f64 = 1e-9;

/// Closed interval with a sampling resolution.
///
/// # Examples
/// ```
/// use savour_core::Domain;
///
/// let domain = Domain::new(0.0, 10.0, 2.5)?;
/// assert_eq!(domain.grid(), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
/// assert_eq!(domain.clamp(42.0), 10.0);
/// # Ok::<(), savour_core::DomainError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Domain {
    min: f64,
    max: f64,
    resolution: f64,
}

/// Errors returned by [`Domain::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    /// A bound was `NaN` or infinite.
    #[error("domain bounds must be finite (got [{min}, {max}])")]
    NonFiniteBounds {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
    /// The lower bound was not strictly below the upper bound.
    #[error("domain lower bound {min} must be below upper bound {max}")]
    EmptyRange {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
    /// The grid spacing was zero, negative, or not finite.
    #[error("domain resolution must be positive and finite (got {resolution})")]
    InvalidResolution {
        /// Requested spacing.
        resolution: f64,
    },
    /// The resolution would sample more than [`MAX_GRID_POINTS`] points.
    #[error(
        "domain [{min}, {max}] with resolution {resolution} exceeds {limit} grid points",
        limit = MAX_GRID_POINTS
    )]
    GridTooLarge {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
        /// Requested spacing.
        resolution: f64,
    },
}

impl Domain {
    /// Validate and construct a domain.
    ///
    /// # Errors
    /// Returns [`DomainError`] for non-finite bounds, an empty range, an
    /// unusable resolution, or a grid larger than [`MAX_GRID_POINTS`].
    #[expect(
        clippy::float_arithmetic,
        reason = "the grid size is the span divided by the resolution"
    )]
    pub fn new(min: f64, max: f64, resolution: f64) -> Result<Self, DomainError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(DomainError::NonFiniteBounds { min, max });
        }
        if min >= max {
            return Err(DomainError::EmptyRange { min, max });
        }
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(DomainError::InvalidResolution { resolution });
        }
        let intervals = (max - min) / resolution;
        if intervals >= f64::from(MAX_GRID_POINTS - 1) {
            return Err(DomainError::GridTooLarge {
                min,
                max,
                resolution,
            });
        }
        Ok(Self {
            min,
            max,
            resolution,
        })
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Spacing between adjacent grid points.
    #[must_use]
    pub const fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Report whether `x` lies inside the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        (self.min..=self.max).contains(&x)
    }

    /// Clamp `x` into the interval.
    ///
    /// `NaN` maps to the lower bound so downstream arithmetic stays finite.
    ///
    /// # Examples
    /// ```
    /// use savour_core::Domain;
    ///
    /// let domain = Domain::default();
    /// assert_eq!(domain.clamp(-5.0), 0.0);
    /// assert_eq!(domain.clamp(f64::NAN), 0.0);
    /// assert_eq!(domain.clamp(55.5), 55.5);
    /// ```
    #[must_use]
    pub fn clamp(&self, x: f64) -> f64 {
        if x.is_nan() {
            return self.min;
        }
        x.clamp(self.min, self.max)
    }

    /// Ordered grid points covering the interval.
    ///
    /// Points are spaced by the resolution starting at `min`. When the span is
    /// not a multiple of the resolution, `max` is appended as the last point.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "grid points are derived from the span and the positive resolution"
    )]
    pub fn grid(&self) -> Vec<f64> {
        let steps = ((self.max - self.min) / self.resolution + GRID_EPSILON).floor() as usize;
        let mut points: Vec<f64> = (0..=steps)
            .map(|step| self.min + step as f64 * self.resolution)
            .collect();
        if let Some(last) = points.last_mut() {
            if (*last - self.max).abs() <= GRID_EPSILON * self.resolution {
                *last = self.max;
            } else if *last < self.max {
                points.push(self.max);
            }
        }
        points
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}
