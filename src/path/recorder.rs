//! Sparse path recording and persistence.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::PathTrace;
use crate::core::types::Point2D;
use crate::error::{MargaError, Result};

// Path file format constants
const PATH_MAGIC: u32 = 0x4D50_5448; // "MPTH"
const PATH_VERSION: u32 = 1;
const HEADER_LEN: usize = 12; // magic + version + count

/// Records a sparse trace of visited positions.
///
/// A new point is admitted only if it is farther than the configured
/// minimum spacing from the last recorded reference point, which starts at
/// the world origin. This guarantees consecutive waypoints are at least the
/// minimum spacing apart.
#[derive(Debug, Clone)]
pub struct PathRecorder {
    trace: PathTrace,
    min_spacing_mm: f32,
    reference: Point2D,
}

impl PathRecorder {
    /// Create a recorder with the given minimum waypoint spacing.
    pub fn new(min_spacing_mm: f32) -> Self {
        Self {
            trace: PathTrace::new(),
            min_spacing_mm,
            reference: Point2D::default(),
        }
    }

    /// Offer the current position for recording.
    ///
    /// Appends (x, y) if it is farther than the minimum spacing from the
    /// reference point, and returns the full trace either way.
    pub fn run(&mut self, x: f32, y: f32) -> &PathTrace {
        let point = Point2D::new(x, y);
        let d = self.reference.distance(&point);
        if d > self.min_spacing_mm {
            self.trace.push(point);
            self.reference = point;
            tracing::debug!(x, y, spacing_mm = d, "waypoint recorded");
        }
        &self.trace
    }

    /// The recorded trace.
    pub fn trace(&self) -> &PathTrace {
        &self.trace
    }

    /// Serialize the trace to `path`.
    ///
    /// Little-endian binary: magic, version and waypoint count, then one
    /// (f32 x, f32 y) pair per waypoint. The round-trip through
    /// [`PathRecorder::load`] is exact.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        writer.write_all(&PATH_MAGIC.to_le_bytes())?;
        writer.write_all(&PATH_VERSION.to_le_bytes())?;
        writer.write_all(&(self.trace.len() as u32).to_le_bytes())?;

        for p in self.trace.waypoints() {
            writer.write_all(&p.x.to_le_bytes())?;
            writer.write_all(&p.y.to_le_bytes())?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Restore a previously saved trace from `path`, replacing the current
    /// one.
    ///
    /// The reference point becomes the last restored waypoint so the
    /// spacing invariant holds across runs. A missing or unreadable file
    /// surfaces as [`MargaError::Io`]; corrupt or incompatible data as
    /// [`MargaError::PathFormat`].
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let bytes = std::fs::read(path)?;
        let trace = parse_path_file(&bytes)?;

        if let Some(last) = trace.waypoints().last() {
            self.reference = *last;
        }
        tracing::info!(waypoints = trace.len(), "path trace restored");
        self.trace = trace;
        Ok(())
    }
}

/// Parse the path file body, distinguishing corruption from I/O failures.
fn parse_path_file(bytes: &[u8]) -> Result<PathTrace> {
    if bytes.len() < HEADER_LEN {
        return Err(MargaError::PathFormat("file shorter than header".into()));
    }

    let magic = u32::from_le_bytes(bytes[0..4].try_into().unwrap());
    if magic != PATH_MAGIC {
        return Err(MargaError::PathFormat("invalid magic number".into()));
    }

    let version = u32::from_le_bytes(bytes[4..8].try_into().unwrap());
    if version != PATH_VERSION {
        return Err(MargaError::PathFormat(format!(
            "unsupported version: {}",
            version
        )));
    }

    let count = u32::from_le_bytes(bytes[8..12].try_into().unwrap()) as usize;
    let body = &bytes[HEADER_LEN..];
    if body.len() != count * 8 {
        return Err(MargaError::PathFormat(format!(
            "expected {} waypoints ({} bytes), found {} bytes",
            count,
            count * 8,
            body.len()
        )));
    }

    let mut waypoints = Vec::with_capacity(count);
    for pair in body.chunks_exact(8) {
        let x = f32::from_le_bytes(pair[0..4].try_into().unwrap());
        let y = f32::from_le_bytes(pair[4..8].try_into().unwrap());
        waypoints.push(Point2D::new(x, y));
    }

    Ok(PathTrace::from_waypoints(waypoints))
}
