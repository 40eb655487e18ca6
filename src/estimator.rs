//! Pose estimation via an opaque SLAM engine.
//!
//! The SLAM algorithm itself lives behind the [`SlamEngine`] trait so that
//! alternative engines can be substituted; this module only adapts its
//! output to the crate's world-frame conventions and manages the optional
//! occupancy map snapshot.

use crate::core::math::{deg2rad, normalize_deg};
use crate::core::types::{Pose2D, RangeScan};
use crate::error::{MargaError, Result};

/// Pose estimate as reported by a SLAM engine, in the engine's own units.
///
/// Position is world-frame millimeters; heading is degrees and is NOT
/// required to be normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPoseEstimate {
    pub x_mm: f32,
    pub y_mm: f32,
    pub theta_deg: f32,
}

/// Capability interface for an incremental SLAM engine.
///
/// The engine consumes one full scan per control cycle and maintains its
/// own map and pose state internally.
pub trait SlamEngine {
    /// Feed one scan into the engine's incremental update and return the
    /// refined pose estimate.
    ///
    /// A failure here is fatal for the cycle: the engine makes no
    /// partial-state guarantee beyond its own, and the caller decides
    /// whether to reuse the last good pose.
    fn update(&mut self, scan: &RangeScan) -> Result<RawPoseEstimate>;

    /// Copy the current occupancy estimate into `buffer`.
    ///
    /// `buffer` must hold exactly `map_size_pixels() * map_size_pixels()`
    /// bytes.
    fn fill_map(&self, buffer: &mut [u8]) -> Result<()>;

    /// Side length of the engine's square occupancy grid, in pixels.
    fn map_size_pixels(&self) -> usize;
}

/// Fixed-size square occupancy grid buffer.
///
/// Owned by the pipeline driver and overwritten in place by
/// [`PoseEstimator::update`]; never resized after construction.
#[derive(Debug, Clone)]
pub struct MapBuffer {
    size_pixels: usize,
    bytes: Vec<u8>,
}

impl MapBuffer {
    /// Allocate a zeroed size × size buffer.
    pub fn new(size_pixels: usize) -> Self {
        Self {
            size_pixels,
            bytes: vec![0u8; size_pixels * size_pixels],
        }
    }

    /// Side length in pixels.
    #[inline]
    pub fn size_pixels(&self) -> usize {
        self.size_pixels
    }

    /// Occupancy byte values, row-major.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Mutable access for the estimator to overwrite.
    #[inline]
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

/// Wraps a [`SlamEngine`] and adapts its estimates to crate conventions.
pub struct PoseEstimator<E: SlamEngine> {
    engine: E,
}

impl<E: SlamEngine> PoseEstimator<E> {
    /// Wrap a SLAM engine.
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Process one scan and return the updated vehicle pose.
    ///
    /// The engine's heading (degrees, any range) is normalized to [0, 360)
    /// and converted to radians so the returned pose matches the world-frame
    /// conventions used by the rest of the crate. If `map` is supplied it is
    /// overwritten in place with the engine's current occupancy snapshot.
    pub fn update(&mut self, scan: &RangeScan, map: Option<&mut MapBuffer>) -> Result<Pose2D> {
        if let Err(msg) = scan.validate() {
            return Err(MargaError::Slam(format!("malformed scan: {}", msg)));
        }

        let raw = self.engine.update(scan)?;
        let theta = deg2rad(normalize_deg(raw.theta_deg));
        let pose = Pose2D::new(raw.x_mm, raw.y_mm, theta);

        if let Some(buffer) = map {
            let expected = self.engine.map_size_pixels() * self.engine.map_size_pixels();
            if buffer.bytes().len() != expected {
                return Err(MargaError::Slam(format!(
                    "map buffer size mismatch: expected {} bytes, got {}",
                    expected,
                    buffer.bytes().len()
                )));
            }
            self.engine.fill_map(buffer.bytes_mut())?;
        }

        tracing::trace!(
            x_mm = pose.x,
            y_mm = pose.y,
            theta_rad = pose.theta,
            "pose updated"
        );

        Ok(pose)
    }

    /// Access the wrapped engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    /// Engine that reports a fixed pose and paints the map with a marker.
    struct FixedEngine {
        pose: RawPoseEstimate,
        map_size: usize,
        fail: bool,
    }

    impl SlamEngine for FixedEngine {
        fn update(&mut self, _scan: &RangeScan) -> Result<RawPoseEstimate> {
            if self.fail {
                return Err(MargaError::Slam("engine refused scan".into()));
            }
            Ok(self.pose)
        }

        fn fill_map(&self, buffer: &mut [u8]) -> Result<()> {
            buffer.fill(0xAB);
            Ok(())
        }

        fn map_size_pixels(&self) -> usize {
            self.map_size
        }
    }

    fn scan() -> RangeScan {
        RangeScan::new(vec![1000.0, 2000.0], vec![0.0, 180.0])
    }

    #[test]
    fn test_heading_normalized_to_radians() {
        let engine = FixedEngine {
            pose: RawPoseEstimate {
                x_mm: 10.0,
                y_mm: -5.0,
                theta_deg: -90.0,
            },
            map_size: 4,
            fail: false,
        };
        let mut estimator = PoseEstimator::new(engine);
        let pose = estimator.update(&scan(), None).unwrap();

        assert_relative_eq!(pose.x, 10.0);
        assert_relative_eq!(pose.y, -5.0);
        // -90 deg normalizes to 270 deg = 3π/2 rad
        assert_relative_eq!(pose.theta, 3.0 * PI / 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_map_snapshot_written() {
        let engine = FixedEngine {
            pose: RawPoseEstimate {
                x_mm: 0.0,
                y_mm: 0.0,
                theta_deg: 0.0,
            },
            map_size: 4,
            fail: false,
        };
        let mut estimator = PoseEstimator::new(engine);
        let mut map = MapBuffer::new(4);

        estimator.update(&scan(), Some(&mut map)).unwrap();
        assert!(map.bytes().iter().all(|&b| b == 0xAB));
        assert_eq!(map.bytes().len(), 16);
    }

    #[test]
    fn test_map_size_mismatch_rejected() {
        let engine = FixedEngine {
            pose: RawPoseEstimate {
                x_mm: 0.0,
                y_mm: 0.0,
                theta_deg: 0.0,
            },
            map_size: 8,
            fail: false,
        };
        let mut estimator = PoseEstimator::new(engine);
        let mut map = MapBuffer::new(4);

        assert!(estimator.update(&scan(), Some(&mut map)).is_err());
    }

    #[test]
    fn test_engine_failure_propagates() {
        let engine = FixedEngine {
            pose: RawPoseEstimate {
                x_mm: 0.0,
                y_mm: 0.0,
                theta_deg: 0.0,
            },
            map_size: 4,
            fail: true,
        };
        let mut estimator = PoseEstimator::new(engine);
        assert!(matches!(
            estimator.update(&scan(), None),
            Err(MargaError::Slam(_))
        ));
    }

    #[test]
    fn test_malformed_scan_rejected() {
        let engine = FixedEngine {
            pose: RawPoseEstimate {
                x_mm: 0.0,
                y_mm: 0.0,
                theta_deg: 0.0,
            },
            map_size: 4,
            fail: false,
        };
        let mut estimator = PoseEstimator::new(engine);
        let bad = RangeScan::new(vec![1000.0], vec![0.0, 90.0]);
        assert!(matches!(
            estimator.update(&bad, None),
            Err(MargaError::Slam(_))
        ));
    }
}
