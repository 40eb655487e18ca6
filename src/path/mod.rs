//! Recorded path trace and the components that consume it.
//!
//! The trace is single-writer (the recorder) with any number of readers
//! within a cycle; the surrounding driver serializes cycles, so no locking
//! is needed here.

mod cte;
mod projector;
mod recorder;

pub use cte::{CrossTrackError, CteSolution};
pub use projector::CarRelativeProjector;
pub use recorder::PathRecorder;

use serde::{Deserialize, Serialize};

use crate::core::types::Point2D;

/// An ordered sequence of visited waypoints in world-frame millimeters.
///
/// Insertion order is traversal order. Growth happens only through the
/// [`PathRecorder`], which enforces the minimum-spacing admission rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathTrace {
    waypoints: Vec<Point2D>,
}

impl PathTrace {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trace directly from waypoints (persistence and tests).
    pub fn from_waypoints(waypoints: Vec<Point2D>) -> Self {
        Self { waypoints }
    }

    /// Number of waypoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Check if the trace has no waypoints.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// All waypoints in traversal order.
    #[inline]
    pub fn waypoints(&self) -> &[Point2D] {
        &self.waypoints
    }

    /// Waypoint at `index`, if it exists.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Point2D> {
        self.waypoints.get(index).copied()
    }

    /// Total length of the trace in millimeters (0 for fewer than 2 points).
    pub fn total_length_mm(&self) -> f32 {
        self.waypoints
            .windows(2)
            .map(|w| w[0].distance(&w[1]))
            .sum()
    }

    /// Axis-aligned bounding box, or `None` for an empty trace.
    pub fn bounds(&self) -> Option<(Point2D, Point2D)> {
        let first = self.waypoints.first()?;
        let mut min = *first;
        let mut max = *first;
        for p in &self.waypoints[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some((min, max))
    }

    pub(crate) fn push(&mut self, point: Point2D) {
        self.waypoints.push(point);
    }
}
