//! Asymmetric tolerance bands around ground-truth steering angles.
//!
//! Purpose
//! -------
//! Decide whether a predicted angle is "close enough" to the recorded one.
//! The acceptance interval scales with the recorded angle: by default
//! `[0.75·a, 1.25·a]` for `a >= 0`, with the bounds swapped for negative
//! angles so the interval stays ordered.
//!
//! Invariants & assumptions
//! ------------------------
//! - `0 <= lower_ratio <= upper_ratio`, both finite.
//! - For every finite angle, `band.lower <= band.upper`.
//! - For negative angles both bounds are `<= 0`; for positive angles both
//!   are `>= 0`.
//! - Membership is inclusive on both ends.
use crate::evaluation::errors::{EvalError, EvalResult};

/// Default lower ratio of the acceptance band.
pub const DEFAULT_LOWER_RATIO: f64 = 0.75;
/// Default upper ratio of the acceptance band.
pub const DEFAULT_UPPER_RATIO: f64 = 1.25;

/// ToleranceOptions — ratios applied to the recorded angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceOptions {
    pub lower_ratio: f64,
    pub upper_ratio: f64,
}

impl ToleranceOptions {
    /// Errors
    /// ------
    /// - `EvalError::InvalidTolerance` when a ratio is non-finite or
    ///   negative, or when `lower_ratio > upper_ratio`.
    pub fn new(lower_ratio: f64, upper_ratio: f64) -> EvalResult<Self> {
        let invalid =
            |reason: &'static str| EvalError::InvalidTolerance { lower_ratio, upper_ratio, reason };
        if !lower_ratio.is_finite() || !upper_ratio.is_finite() {
            return Err(invalid("ratios must be finite"));
        }
        if lower_ratio < 0.0 {
            return Err(invalid("ratios must be non-negative"));
        }
        if lower_ratio > upper_ratio {
            return Err(invalid("lower ratio must not exceed upper ratio"));
        }
        Ok(ToleranceOptions { lower_ratio, upper_ratio })
    }

    /// Band for a recorded `angle`.
    pub fn band(&self, angle: f64) -> ToleranceBand {
        ToleranceBand::around(angle, self)
    }
}

impl Default for ToleranceOptions {
    fn default() -> Self {
        ToleranceOptions { lower_ratio: DEFAULT_LOWER_RATIO, upper_ratio: DEFAULT_UPPER_RATIO }
    }
}

/// ToleranceBand — inclusive acceptance interval `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceBand {
    pub lower: f64,
    pub upper: f64,
}

impl ToleranceBand {
    /// Derive the band for `angle`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use steering_fit::evaluation::{ToleranceBand, ToleranceOptions};
    /// let band = ToleranceBand::around(-0.2, &ToleranceOptions::default());
    /// assert!(band.lower <= band.upper && band.upper <= 0.0);
    /// assert!(band.contains(-0.2));
    /// ```
    pub fn around(angle: f64, options: &ToleranceOptions) -> ToleranceBand {
        let near = options.lower_ratio * angle;
        let far = options.upper_ratio * angle;
        if angle < 0.0 {
            ToleranceBand { lower: far, upper: near }
        } else {
            ToleranceBand { lower: near, upper: far }
        }
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Verify the positive-angle band and inclusive edges.
    //
    // Given
    // -----
    // - `angle = 0.04`, default ratios.
    //
    // Expect
    // ------
    // - Band ≈ `[0.03, 0.05]`; both computed edges are members; values just
    //   outside are not.
    fn positive_angle_band_is_inclusive() {
        let band = ToleranceOptions::default().band(0.04);

        assert!((band.lower - 0.03).abs() < 1e-15);
        assert!((band.upper - 0.05).abs() < 1e-15);
        assert!(band.contains(band.lower));
        assert!(band.contains(band.upper));
        assert!(!band.contains(0.0299));
        assert!(!band.contains(0.0501));
    }

    #[test]
    // Purpose
    // -------
    // Verify the sign-aware swap for negative angles.
    //
    // Given
    // -----
    // - Angles -0.5, -0.26, -1e-9 with default ratios.
    //
    // Expect
    // ------
    // - `lower <= upper <= 0` and `lower == 1.25·a`, `upper == 0.75·a`.
    fn negative_angle_band_swaps_bounds() {
        let options = ToleranceOptions::default();

        for angle in [-0.5, -0.26, -1e-9] {
            let band = options.band(angle);

            assert!(band.lower <= band.upper, "angle {angle}");
            assert!(band.upper <= 0.0 && band.lower <= 0.0, "angle {angle}");
            assert_eq!(band.lower, 1.25 * angle);
            assert_eq!(band.upper, 0.75 * angle);
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure invalid ratio pairs are rejected.
    fn options_reject_invalid_ratios() {
        assert!(ToleranceOptions::new(f64::NAN, 1.25).is_err());
        assert!(ToleranceOptions::new(-0.1, 1.25).is_err());
        assert!(ToleranceOptions::new(1.3, 1.25).is_err());
        assert_eq!(ToleranceOptions::new(0.75, 1.25), Ok(ToleranceOptions::default()));
    }
}
