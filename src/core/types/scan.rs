//! Raw range-sensor scan type.

use serde::{Deserialize, Serialize};

/// Sentinel distance reported by the sensor when a ray produced no return.
///
/// The SLAM engine is expected to treat measurements at or beyond this value
/// as "no detection" rather than as a real obstacle.
pub const NO_DETECTION_MM: f32 = 12_000.0;

/// One revolution of raw range measurements in polar form.
///
/// Two index-aligned sequences: `distances_mm[i]` is the range measured at
/// `angles_deg[i]`. Angles are in degrees in [0, 360) and are not required
/// to be sorted; distances are non-negative millimeters with
/// [`NO_DETECTION_MM`] marking missed returns.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RangeScan {
    /// Range measurements in millimeters
    pub distances_mm: Vec<f32>,
    /// Beam angles in degrees, index-aligned with `distances_mm`
    pub angles_deg: Vec<f32>,
}

impl RangeScan {
    /// Create a new scan from paired measurement vectors.
    pub fn new(distances_mm: Vec<f32>, angles_deg: Vec<f32>) -> Self {
        Self {
            distances_mm,
            angles_deg,
        }
    }

    /// Number of measurements.
    #[inline]
    pub fn len(&self) -> usize {
        self.distances_mm.len()
    }

    /// Check if the scan has no measurements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.distances_mm.is_empty()
    }

    /// Check whether a measurement is the no-detection sentinel.
    #[inline]
    pub fn is_no_detection(distance_mm: f32) -> bool {
        distance_mm >= NO_DETECTION_MM
    }

    /// Iterate over (distance_mm, angle_deg) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.distances_mm
            .iter()
            .copied()
            .zip(self.angles_deg.iter().copied())
    }

    /// Count measurements that produced a real return.
    pub fn valid_count(&self) -> usize {
        self.distances_mm
            .iter()
            .filter(|&&d| d.is_finite() && d >= 0.0 && !Self::is_no_detection(d))
            .count()
    }

    /// Validate internal consistency of the scan data.
    ///
    /// Returns Ok(()) if valid, or a message describing the inconsistency.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.distances_mm.len() != self.angles_deg.len() {
            return Err("distances and angles length mismatch");
        }
        if self.distances_mm.iter().any(|d| !d.is_finite() || *d < 0.0) {
            return Err("distances must be finite and non-negative");
        }
        if self
            .angles_deg
            .iter()
            .any(|a| !a.is_finite() || *a < 0.0 || *a >= 360.0)
        {
            return Err("angles must lie in [0, 360)");
        }
        Ok(())
    }
}
