//! Core data types shared across the crate.

mod pose;
mod scan;

pub use pose::{Point2D, Pose2D};
pub use scan::{RangeScan, NO_DETECTION_MM};
