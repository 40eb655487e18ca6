//! Configuration loading for marga-nav

use std::path::Path;

use serde::Deserialize;

use crate::error::{MargaError, Result};
use crate::path::CarRelativeProjector;

/// Main configuration structure
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MargaConfig {
    #[serde(default)]
    pub sensor: SensorConfig,
    #[serde(default)]
    pub slam: SlamConfig,
    #[serde(default)]
    pub recorder: RecorderConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Range sensor settings
#[derive(Clone, Debug, Deserialize)]
pub struct SensorConfig {
    /// Serial port of the sensor (default: /dev/ttyUSB0)
    #[serde(default = "default_port")]
    pub port: String,

    /// Acquisition poll interval in milliseconds (default: 20)
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
}

/// SLAM engine model parameters
#[derive(Clone, Debug, Deserialize)]
pub struct SlamConfig {
    /// Occupancy map side length in pixels (default: 500)
    #[serde(default = "default_map_size_pixels")]
    pub map_size_pixels: usize,

    /// Occupancy map side length in meters (default: 10)
    #[serde(default = "default_map_size_meters")]
    pub map_size_meters: u32,

    /// Samples per revolution fed to the engine (default: 360)
    #[serde(default = "default_scan_size")]
    pub scan_size: usize,

    /// Sensor revolution rate in Hz (default: 10)
    #[serde(default = "default_scan_rate_hz")]
    pub scan_rate_hz: f32,

    /// Angular span of one revolution in degrees (default: 360)
    #[serde(default = "default_detection_angle_deg")]
    pub detection_angle_deg: f32,

    /// Distance sentinel for missed returns in millimeters (default: 12000)
    #[serde(default = "default_no_detection_mm")]
    pub no_detection_mm: f32,
}

/// Path recorder settings
#[derive(Clone, Debug, Deserialize)]
pub struct RecorderConfig {
    /// Minimum spacing between recorded waypoints in millimeters
    /// (default: 100)
    #[serde(default = "default_min_spacing")]
    pub min_spacing_mm: f32,

    /// Where to persist the recorded trace
    #[serde(default = "default_path_file")]
    pub path_file: String,
}

/// Vehicle-centered display settings
#[derive(Clone, Debug, Deserialize)]
pub struct DisplayConfig {
    /// Display width in pixels (default: 500)
    #[serde(default = "default_display_px")]
    pub width_px: u32,

    /// Display height in pixels (default: 500)
    #[serde(default = "default_display_px")]
    pub height_px: u32,

    /// World distance mapped to the display half-extent in millimeters
    /// (default: 5000)
    #[serde(default = "default_max_range_mm")]
    pub max_range_mm: f32,
}

impl DisplayConfig {
    /// Build a projector for this display geometry.
    pub fn projector(&self) -> CarRelativeProjector {
        CarRelativeProjector::new(self.width_px, self.height_px, self.max_range_mm)
    }
}

// Default value functions
fn default_port() -> String {
    "/dev/ttyUSB0".to_string()
}
fn default_poll_interval() -> u64 {
    20
}
fn default_map_size_pixels() -> usize {
    500
}
fn default_map_size_meters() -> u32 {
    10
}
fn default_scan_size() -> usize {
    360
}
fn default_scan_rate_hz() -> f32 {
    10.0
}
fn default_detection_angle_deg() -> f32 {
    360.0
}
fn default_no_detection_mm() -> f32 {
    12_000.0
}
fn default_min_spacing() -> f32 {
    100.0
}
fn default_path_file() -> String {
    "output/path.mpth".to_string()
}
fn default_display_px() -> u32 {
    500
}
fn default_max_range_mm() -> f32 {
    5000.0
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            poll_interval_ms: default_poll_interval(),
        }
    }
}

impl Default for SlamConfig {
    fn default() -> Self {
        Self {
            map_size_pixels: default_map_size_pixels(),
            map_size_meters: default_map_size_meters(),
            scan_size: default_scan_size(),
            scan_rate_hz: default_scan_rate_hz(),
            detection_angle_deg: default_detection_angle_deg(),
            no_detection_mm: default_no_detection_mm(),
        }
    }
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            min_spacing_mm: default_min_spacing(),
            path_file: default_path_file(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width_px: default_display_px(),
            height_px: default_display_px(),
            max_range_mm: default_max_range_mm(),
        }
    }
}

impl MargaConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| MargaError::Config(format!("Failed to read config file: {}", e)))?;
        let config: MargaConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
