//! Outlier band — named, overridable thresholds for known sensor faults.
//!
//! Purpose
//! -------
//! Hold the empirical thresholds that identify bad telemetry: a speed
//! window in which large steering readings are dominated by sensor noise.
//! The defaults reproduce the reference cleaning rules; they are
//! configuration, not physical constants, and should be re-validated per
//! vehicle.
//!
//! Invariants & assumptions
//! ------------------------
//! - All four bounds are finite.
//! - `speed_min <= speed_max`.
//! - `positive_angle_threshold > 0.0` and `negative_angle_threshold < 0.0`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover defaults, the rejection branches of
//!   [`OutlierBand::new`], and the inclusive band membership test.
use crate::filtering::errors::{FilterError, FilterResult};

/// Lower edge of the noisy speed window.
pub const DEFAULT_SPEED_MIN: f64 = -85.0;
/// Upper edge of the noisy speed window.
pub const DEFAULT_SPEED_MAX: f64 = 49.0;
/// Angles at or above this are suspect inside the speed window.
pub const DEFAULT_POSITIVE_ANGLE_THRESHOLD: f64 = 0.26;
/// Angles at or below this are suspect inside the speed window.
pub const DEFAULT_NEGATIVE_ANGLE_THRESHOLD: f64 = -0.26;

/// OutlierBand — thresholds for the angle/speed fault signature.
///
/// Fields
/// ------
/// - `speed_min`, `speed_max`: `f64`
///   Inclusive speed window in which large angles are rejected.
/// - `positive_angle_threshold`: `f64`
///   Angles `>=` this value inside the window are rejected.
/// - `negative_angle_threshold`: `f64`
///   Angles `<=` this value inside the window are rejected.
///
/// Notes
/// -----
/// - Zero-angle rejection is not configurable; a zero angle is missing
///   data everywhere in the crate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierBand {
    pub speed_min: f64,
    pub speed_max: f64,
    pub positive_angle_threshold: f64,
    pub negative_angle_threshold: f64,
}

impl OutlierBand {
    /// Construct a validated band.
    ///
    /// Errors
    /// ------
    /// - `FilterError::InvalidBand`
    ///   Returned when a bound is non-finite, when `speed_min > speed_max`,
    ///   or when an angle threshold is on the wrong side of zero. The
    ///   payload names the first offending field.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use steering_fit::filtering::OutlierBand;
    /// let band = OutlierBand::new(-60.0, 40.0, 0.3, -0.3).unwrap();
    /// assert!(band.rejects(10.0, 0.35));
    /// assert!(OutlierBand::new(40.0, -60.0, 0.3, -0.3).is_err());
    /// ```
    pub fn new(
        speed_min: f64, speed_max: f64, positive_angle_threshold: f64,
        negative_angle_threshold: f64,
    ) -> FilterResult<Self> {
        let fields = [
            ("speed_min", speed_min),
            ("speed_max", speed_max),
            ("positive_angle_threshold", positive_angle_threshold),
            ("negative_angle_threshold", negative_angle_threshold),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(FilterError::InvalidBand {
                    field,
                    value,
                    reason: "Outlier bounds must be finite.",
                });
            }
        }

        if speed_min > speed_max {
            return Err(FilterError::InvalidBand {
                field: "speed_min",
                value: speed_min,
                reason: "speed_min must not exceed speed_max.",
            });
        }

        if positive_angle_threshold <= 0.0 {
            return Err(FilterError::InvalidBand {
                field: "positive_angle_threshold",
                value: positive_angle_threshold,
                reason: "Positive angle threshold must be > 0.",
            });
        }

        if negative_angle_threshold >= 0.0 {
            return Err(FilterError::InvalidBand {
                field: "negative_angle_threshold",
                value: negative_angle_threshold,
                reason: "Negative angle threshold must be < 0.",
            });
        }

        Ok(OutlierBand { speed_min, speed_max, positive_angle_threshold, negative_angle_threshold })
    }

    /// Whether `speed` lies in the inclusive noisy window.
    #[inline]
    pub fn in_speed_window(&self, speed: f64) -> bool {
        speed >= self.speed_min && speed <= self.speed_max
    }

    /// Whether a non-zero sample matches the fault signature.
    #[inline]
    pub fn rejects(&self, speed: f64, angle: f64) -> bool {
        self.in_speed_window(speed)
            && (angle >= self.positive_angle_threshold || angle <= self.negative_angle_threshold)
    }
}

impl Default for OutlierBand {
    fn default() -> Self {
        OutlierBand {
            speed_min: DEFAULT_SPEED_MIN,
            speed_max: DEFAULT_SPEED_MAX,
            positive_angle_threshold: DEFAULT_POSITIVE_ANGLE_THRESHOLD,
            negative_angle_threshold: DEFAULT_NEGATIVE_ANGLE_THRESHOLD,
        }
    }
}
