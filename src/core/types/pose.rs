//! Pose and point types for the world frame.

use serde::{Deserialize, Serialize};

use crate::core::math::normalize_angle;

/// A 2D point in world-frame millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate in millimeters
    pub x: f32,
    /// Y coordinate in millimeters
    pub y: f32,
}

impl Point2D {
    /// Create a new point.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared distance to another point (avoids sqrt).
    #[inline]
    pub fn distance_squared(&self, other: &Point2D) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Distance to another point in millimeters.
    #[inline]
    pub fn distance(&self, other: &Point2D) -> f32 {
        self.distance_squared(other).sqrt()
    }
}

impl Default for Point2D {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Vehicle pose in the world frame.
///
/// Position (x, y) in millimeters, heading theta in radians normalized to
/// [0, 2π) with 0 along the world +X axis, counter-clockwise positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    /// X position in millimeters
    pub x: f32,
    /// Y position in millimeters
    pub y: f32,
    /// Heading in radians, normalized to [0, 2π)
    pub theta: f32,
}

impl Pose2D {
    /// Create a new pose with theta normalized to [0, 2π).
    #[inline]
    pub fn new(x: f32, y: f32, theta: f32) -> Self {
        Self {
            x,
            y,
            theta: normalize_angle(theta),
        }
    }

    /// Pose at the world origin with zero heading.
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            theta: 0.0,
        }
    }

    /// Position of this pose as a point.
    #[inline]
    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Transform a point from the vehicle frame to the world frame.
    #[inline]
    pub fn transform_point(&self, point: &Point2D) -> Point2D {
        let (sin_t, cos_t) = self.theta.sin_cos();
        Point2D::new(
            self.x + point.x * cos_t - point.y * sin_t,
            self.y + point.x * sin_t + point.y * cos_t,
        )
    }

    /// Transform a point from the world frame to the vehicle frame.
    ///
    /// The vehicle's forward direction maps to local +X, its left side to
    /// local +Y.
    #[inline]
    pub fn inverse_transform_point(&self, point: &Point2D) -> Point2D {
        let (sin_t, cos_t) = self.theta.sin_cos();
        let dx = point.x - self.x;
        let dy = point.y - self.y;
        Point2D::new(dx * cos_t + dy * sin_t, -dx * sin_t + dy * cos_t)
    }
}

impl Default for Pose2D {
    fn default() -> Self {
        Self::origin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_point_distance() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(300.0, 400.0);
        assert_relative_eq!(a.distance(&b), 500.0);
        assert_relative_eq!(a.distance_squared(&b), 250_000.0);
    }

    #[test]
    fn test_pose_normalizes_theta() {
        let p = Pose2D::new(0.0, 0.0, -FRAC_PI_2);
        assert_relative_eq!(p.theta, 3.0 * FRAC_PI_2, epsilon = 1e-6);

        let q = Pose2D::new(0.0, 0.0, 2.0 * PI + 0.5);
        assert_relative_eq!(q.theta, 0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_transform_point() {
        let pose = Pose2D::new(1000.0, 0.0, FRAC_PI_2);
        let local = Point2D::new(100.0, 0.0);
        let world = pose.transform_point(&local);
        assert_relative_eq!(world.x, 1000.0, epsilon = 1e-3);
        assert_relative_eq!(world.y, 100.0, epsilon = 1e-3);
    }

    #[test]
    fn test_inverse_transform_roundtrip() {
        let pose = Pose2D::new(500.0, -250.0, 1.2);
        let local = Point2D::new(120.0, -40.0);
        let world = pose.transform_point(&local);
        let back = pose.inverse_transform_point(&world);
        assert_relative_eq!(back.x, local.x, epsilon = 1e-2);
        assert_relative_eq!(back.y, local.y, epsilon = 1e-2);
    }
}
