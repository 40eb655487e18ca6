//! MargaNav - localization and path-tracking support for a lidar-equipped
//! ground vehicle.
//!
//! Each control cycle converts one revolution of raw (distance, angle)
//! samples into a world-frame pose through an opaque SLAM engine, records a
//! sparse trace of visited positions, and measures the signed lateral
//! deviation of the vehicle from that trace for the steering controller.
//! The trace can also be projected into the vehicle's local frame for a
//! display overlay, and persisted across runs.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                  acquisition/                       │  ← sensor polling + mailbox
//! └─────────────────────────────────────────────────────┘
//!                          │ RangeScan
//! ┌─────────────────────────────────────────────────────┐
//! │                   pipeline/                         │  ← one call per control cycle
//! │        estimator → recorder → cross-track           │
//! └─────────────────────────────────────────────────────┘
//!                          │ PathTrace
//! ┌─────────────────────────────────────────────────────┐
//! │                 path::projector                     │  ← display overlay only
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The SLAM algorithm, the sensor transport and all rendering live behind
//! narrow seams ([`SlamEngine`], [`RangeSensor`], plain pixel output) so
//! engines, drivers and displays can be substituted.
//!
//! ## Coordinate conventions
//!
//! - World frame: millimeters, established at SLAM initialization.
//! - Heading: radians in [0, 2π), CCW positive from world +X.
//! - Scan angles: degrees in [0, 360); missed returns carry the
//!   [`NO_DETECTION_MM`] sentinel.

pub mod acquisition;
pub mod config;
pub mod core;
pub mod error;
pub mod estimator;
pub mod path;
pub mod pipeline;

pub use acquisition::{spawn_acquisition, RangeSensor, ScanMailbox};
pub use config::MargaConfig;
pub use core::types::{Point2D, Pose2D, RangeScan, NO_DETECTION_MM};
pub use error::{MargaError, Result};
pub use estimator::{MapBuffer, PoseEstimator, RawPoseEstimate, SlamEngine};
pub use path::{CarRelativeProjector, CrossTrackError, CteSolution, PathRecorder, PathTrace};
pub use pipeline::{CycleOutput, TrackerPipeline};
