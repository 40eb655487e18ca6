//! Vehicle-relative projection of the trace for display overlays.

use super::PathTrace;
use crate::core::types::Pose2D;

/// Projects the recorded trace into a vehicle-centered pixel frame.
///
/// Output feeds a best-effort debug overlay only; it never enters the
/// control loop and never fails. Only plain pixel coordinates cross the
/// boundary — no rendering-library types.
#[derive(Debug, Clone, Copy)]
pub struct CarRelativeProjector {
    width_px: u32,
    height_px: u32,
    max_range_mm: f32,
}

impl CarRelativeProjector {
    /// Create a projector for a display of the given resolution, with
    /// `max_range_mm` mapped to the display half-extent.
    pub fn new(width_px: u32, height_px: u32, max_range_mm: f32) -> Self {
        Self {
            width_px,
            height_px,
            max_range_mm,
        }
    }

    /// Transform the trace into pixel coordinates around the vehicle.
    ///
    /// Each waypoint is translated relative to the vehicle position,
    /// rotated by −θ so the vehicle's forward axis maps to display +X,
    /// scaled so `max_range_mm` reaches the display edge, and offset to
    /// the display center. An empty trace (or a non-positive range
    /// configuration) yields an empty overlay rather than an error.
    pub fn run(&self, pose: &Pose2D, trace: &PathTrace) -> Vec<(i32, i32)> {
        if trace.is_empty() || self.max_range_mm <= 0.0 {
            return Vec::new();
        }

        let cx = self.width_px as f32 / 2.0;
        let cy = self.height_px as f32 / 2.0;

        trace
            .waypoints()
            .iter()
            .map(|p| {
                let local = pose.inverse_transform_point(p);
                let px = local.x / self.max_range_mm * cx + cx;
                let py = local.y / self.max_range_mm * cy + cy;
                (px as i32, py as i32)
            })
            .collect()
    }
}
