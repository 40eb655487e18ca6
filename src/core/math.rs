//! Mathematical primitives for localization and path tracking.
//!
//! Angle normalization, degree/radian conversion, Euclidean distance and
//! segment projection. All distances are in millimeters.

use std::f32::consts::TAU;

use super::types::Point2D;

/// Normalize an angle in degrees to [0, 360).
///
/// # Example
/// ```
/// use marga_nav::core::math::normalize_deg;
///
/// assert!((normalize_deg(-90.0) - 270.0).abs() < 1e-4);
/// assert!((normalize_deg(720.0)).abs() < 1e-4);
/// ```
#[inline]
pub fn normalize_deg(angle: f32) -> f32 {
    let a = angle % 360.0;
    if a < 0.0 { a + 360.0 } else { a }
}

/// Normalize an angle in radians to [0, 2π).
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let a = angle % TAU;
    if a < 0.0 { a + TAU } else { a }
}

/// Convert degrees to radians.
#[inline]
pub fn deg2rad(angle_deg: f32) -> f32 {
    angle_deg.to_radians()
}

/// Euclidean distance between two points in millimeters.
#[inline]
pub fn distance(a: Point2D, b: Point2D) -> f32 {
    a.distance(&b)
}

/// Closest point to `p` on the segment from `a` to `b`.
///
/// The projection is clamped to the segment: positions beyond either end
/// map to the corresponding endpoint. A degenerate segment (`a == b`)
/// returns `a`.
pub fn closest_point_on_segment(a: Point2D, b: Point2D, p: Point2D) -> Point2D {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let len_sq = abx * abx + aby * aby;
    if len_sq <= f32::EPSILON {
        return a;
    }

    let t = ((p.x - a.x) * abx + (p.y - a.y) * aby) / len_sq;
    let t = t.clamp(0.0, 1.0);
    Point2D::new(a.x + t * abx, a.y + t * aby)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    #[test]
    fn test_normalize_deg_in_range() {
        assert_relative_eq!(normalize_deg(0.0), 0.0);
        assert_relative_eq!(normalize_deg(359.9), 359.9);
    }

    #[test]
    fn test_normalize_deg_wraps() {
        assert_relative_eq!(normalize_deg(360.0), 0.0);
        assert_relative_eq!(normalize_deg(450.0), 90.0);
        assert_relative_eq!(normalize_deg(-90.0), 270.0);
        assert_relative_eq!(normalize_deg(-720.0), 0.0);
    }

    #[test]
    fn test_normalize_angle_wraps() {
        assert_relative_eq!(normalize_angle(TAU), 0.0, epsilon = 1e-6);
        assert_relative_eq!(normalize_angle(-PI), PI, epsilon = 1e-6);
        assert_relative_eq!(normalize_angle(3.0 * PI), PI, epsilon = 1e-5);
    }

    #[test]
    fn test_deg2rad() {
        assert_relative_eq!(deg2rad(180.0), PI, epsilon = 1e-6);
        assert_relative_eq!(deg2rad(90.0), PI / 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_distance() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert_relative_eq!(distance(a, b), 5.0);
    }

    #[test]
    fn test_projection_interior() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(100.0, 0.0);
        let p = Point2D::new(50.0, 10.0);
        let q = closest_point_on_segment(a, b, p);
        assert_relative_eq!(q.x, 50.0, epsilon = 1e-4);
        assert_relative_eq!(q.y, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_projection_clamps_to_endpoints() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(100.0, 0.0);

        let before = closest_point_on_segment(a, b, Point2D::new(-50.0, 5.0));
        assert_relative_eq!(before.x, 0.0);
        assert_relative_eq!(before.y, 0.0);

        let after = closest_point_on_segment(a, b, Point2D::new(150.0, -5.0));
        assert_relative_eq!(after.x, 100.0);
        assert_relative_eq!(after.y, 0.0);
    }

    #[test]
    fn test_projection_degenerate_segment() {
        let a = Point2D::new(7.0, 7.0);
        let q = closest_point_on_segment(a, a, Point2D::new(0.0, 0.0));
        assert_relative_eq!(q.x, 7.0);
        assert_relative_eq!(q.y, 7.0);
    }
}
