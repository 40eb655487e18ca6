//! Signed cross-track error against the recorded trace.

use super::PathTrace;
use crate::core::math::closest_point_on_segment;
use crate::core::types::Point2D;

/// Full result of a cross-track computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CteSolution {
    /// Signed lateral deviation in millimeters. Positive means the vehicle
    /// is to the left of the path direction, negative to the right.
    pub error_mm: f32,
    /// Index of the waypoint nearest to the queried position.
    pub nearest_index: usize,
    /// Reference segment endpoints, ordered in path-traversal direction.
    pub segment: (usize, usize),
    /// The queried position projected onto the reference segment.
    pub projected: Point2D,
}

/// Computes the signed lateral deviation of a position from the recorded
/// trace.
///
/// Stateless: the nearest waypoint is found by a full linear scan each
/// call, so the cost is bounded by the trace length per control cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossTrackError;

impl CrossTrackError {
    pub fn new() -> Self {
        Self
    }

    /// Signed cross-track error of (x, y) from the trace.
    ///
    /// Returns the 0 sentinel when the trace has fewer than two waypoints,
    /// which is normal during early startup.
    pub fn run(&self, x: f32, y: f32, trace: &PathTrace) -> f32 {
        self.solve(Point2D::new(x, y), trace)
            .map(|s| s.error_mm)
            .unwrap_or(0.0)
    }

    /// Compute the full solution, or `None` if no segment can be formed.
    ///
    /// The reference segment joins the nearest waypoint with whichever of
    /// its path-adjacent neighbors (wrapping at the ends) is closer to the
    /// queried position; the position is then projected onto that segment,
    /// clamped to its extent.
    pub fn solve(&self, position: Point2D, trace: &PathTrace) -> Option<CteSolution> {
        let points = trace.waypoints();
        let n = points.len();
        if n < 2 {
            return None;
        }

        // Nearest waypoint, first occurrence wins ties.
        let mut nearest = 0;
        let mut nearest_d2 = f32::INFINITY;
        for (i, p) in points.iter().enumerate() {
            let d2 = position.distance_squared(p);
            if d2 < nearest_d2 {
                nearest_d2 = d2;
                nearest = i;
            }
        }

        // Pick the closer of the two path-adjacent neighbors.
        let next = (nearest + 1) % n;
        let prev = (nearest + n - 1) % n;
        let d_next = position.distance_squared(&points[next]);
        let d_prev = position.distance_squared(&points[prev]);

        // Orient the segment in traversal direction so the sign convention
        // is stable regardless of which neighbor won.
        let (start, end) = if d_next < d_prev {
            (nearest, next)
        } else {
            (prev, nearest)
        };

        let a = points[start];
        let b = points[end];
        let projected = closest_point_on_segment(a, b, position);
        let magnitude = position.distance(&projected);

        // Left-of-direction is positive: sign of the 2D cross product of
        // the segment direction with the offset from its start.
        let cross = (b.x - a.x) * (position.y - a.y) - (b.y - a.y) * (position.x - a.x);
        let error_mm = if cross < 0.0 { -magnitude } else { magnitude };

        Some(CteSolution {
            error_mm,
            nearest_index: nearest,
            segment: (start, end),
            projected,
        })
    }
}
