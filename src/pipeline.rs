//! Per-cycle orchestration of the localization and tracking components.

use std::path::Path;

use crate::core::types::{Pose2D, RangeScan};
use crate::error::Result;
use crate::estimator::{MapBuffer, PoseEstimator, SlamEngine};
use crate::path::{CrossTrackError, PathRecorder, PathTrace};

/// Everything the steering controller needs from one control cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleOutput {
    /// Updated vehicle pose.
    pub pose: Pose2D,
    /// Signed lateral deviation from the recorded trace (0 until the trace
    /// has at least two waypoints).
    pub cross_track_mm: f32,
    /// Number of waypoints recorded so far.
    pub waypoints: usize,
}

/// Drives one scan through estimation, recording and cross-track
/// computation.
///
/// Invoked synchronously once per fixed-rate cycle by the external
/// scheduler; the path is single-writer (the recorder) within a cycle, so
/// no locking is needed as long as cycles are serialized. Display
/// projection is intentionally not part of the cycle — feed [`Self::trace`]
/// to a [`crate::path::CarRelativeProjector`] separately.
pub struct TrackerPipeline<E: SlamEngine> {
    estimator: PoseEstimator<E>,
    recorder: PathRecorder,
    cte: CrossTrackError,
}

impl<E: SlamEngine> TrackerPipeline<E> {
    /// Build a pipeline around a SLAM engine.
    pub fn new(engine: E, min_spacing_mm: f32) -> Self {
        Self {
            estimator: PoseEstimator::new(engine),
            recorder: PathRecorder::new(min_spacing_mm),
            cte: CrossTrackError::new(),
        }
    }

    /// Run one control cycle on the latest scan.
    ///
    /// A SLAM failure aborts the cycle without touching the recorded
    /// trace; the caller decides whether to steer on the last good output.
    pub fn cycle(&mut self, scan: &RangeScan, map: Option<&mut MapBuffer>) -> Result<CycleOutput> {
        let pose = self.estimator.update(scan, map)?;

        let trace = self.recorder.run(pose.x, pose.y);
        let cross_track_mm = self.cte.run(pose.x, pose.y, trace);

        Ok(CycleOutput {
            pose,
            cross_track_mm,
            waypoints: trace.len(),
        })
    }

    /// The recorded trace (for display projection or persistence).
    pub fn trace(&self) -> &PathTrace {
        self.recorder.trace()
    }

    /// Persist the recorded trace.
    pub fn save_trace<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.recorder.save(path)
    }

    /// Restore a trace recorded on a previous run.
    pub fn load_trace<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.recorder.load(path)
    }
}
