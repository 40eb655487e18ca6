//! Continuous scan acquisition and hand-off to the control loop.
//!
//! The sensor driver is polled on its own thread; completed scans are
//! handed to the control loop through a single-slot mailbox, so the
//! consumer always sees a complete scan even while the next one is being
//! read. Transport faults are non-fatal: they are logged and the loop
//! keeps polling, leaving the last good scan in place.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::core::types::RangeScan;
use crate::error::Result;

/// Driver seam for the rotating range sensor.
///
/// Implementations wrap the actual transport (serial, network, simulation)
/// and yield one complete revolution per scan. `poll` returns `Ok(None)`
/// when no new revolution has completed since the last call.
pub trait RangeSensor: Send {
    /// Poll for the next completed scan.
    fn poll(&mut self) -> Result<Option<RangeScan>>;
}

/// Single-slot mailbox for the latest completed scan.
///
/// Latest-wins: publishing replaces the slot content, and reading leaves
/// it in place so the control loop can reuse the last good scan when the
/// sensor stalls.
#[derive(Debug, Default)]
pub struct ScanMailbox {
    slot: Mutex<Option<RangeScan>>,
}

impl ScanMailbox {
    /// Create an empty mailbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slot with a newly completed scan.
    pub fn publish(&self, scan: RangeScan) {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(scan);
    }

    /// The most recently published scan, if any.
    pub fn latest(&self) -> Option<RangeScan> {
        let slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        slot.clone()
    }
}

/// Spawn the acquisition thread.
///
/// Polls `sensor` at `poll_interval` until `shutdown` is set, publishing
/// each completed scan into `mailbox`. Sensor errors are logged and the
/// loop continues; the thread exits cleanly on shutdown.
pub fn spawn_acquisition<S: RangeSensor + 'static>(
    mut sensor: S,
    mailbox: Arc<ScanMailbox>,
    shutdown: Arc<AtomicBool>,
    poll_interval: Duration,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("acquisition".into())
        .spawn(move || {
            tracing::info!("acquisition thread started");
            let mut error_count: u64 = 0;

            while !shutdown.load(Ordering::Acquire) {
                match sensor.poll() {
                    Ok(Some(scan)) => {
                        mailbox.publish(scan);
                    }
                    Ok(None) => {}
                    Err(e) => {
                        // Common during shutdown and transient line noise;
                        // keep the last good scan and carry on.
                        error_count += 1;
                        tracing::warn!(error_count, "sensor poll failed: {}", e);
                    }
                }
                thread::sleep(poll_interval);
            }

            tracing::info!("acquisition thread shutting down");
        })
}
