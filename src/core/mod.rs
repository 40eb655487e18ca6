//! Foundation layer: geometry primitives and core types.

pub mod math;
pub mod types;

pub use types::{Point2D, Pose2D, RangeScan, NO_DETECTION_MM};
