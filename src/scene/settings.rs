use crate::field::point::PointSource;
use crate::foundation::error::{CellscanError, CellscanResult};
use crate::scene::validate::validate_settings;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// How a session animates and binds reactive input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantMode {
    /// One still frame; the observation depth never moves.
    Static,
    /// The depth oscillates between 0 and `z_spread`.
    Animated,
    /// Like `Animated`, with reactive channels driving the threshold edges.
    AudioReactive,
}

/// Canvas dimensions as configured, before any [`crate::Canvas`] validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSettings {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Capture rate and length.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CaptureSettings {
    /// Frames per second of the captured sequence.
    pub fps: u32,
    /// Capture length in seconds.
    pub duration_secs: f32,
}

/// The JSON-facing parameter surface.
///
/// Every field has a default, so `{}` parses to a working configuration.
/// Loaded via [`Settings::from_path`] / [`Settings::from_reader`] and checked
/// with [`Settings::validate`] before a session is built.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Output raster dimensions.
    pub canvas: CanvasSettings,
    /// Number of points to sample (1–150 by contract).
    pub point_count: u32,
    /// Upper bound of the z sampling range, in [0,1]. 0 collapses to a 2D
    /// pattern.
    pub z_spread: f32,
    /// Point size / contrast scalar; the field's distance cap.
    pub point_size: f32,
    /// Threshold range `[low, high]` applied to the distance field.
    pub threshold: [f32; 2],
    /// Animation speed multiplier (0–2).
    pub speed: f32,
    /// Whether the observation depth advances at all.
    pub animate: bool,
    /// Variant behavior selector.
    pub mode: VariantMode,
    /// Random sampling or the built-in preset constellation.
    pub point_source: PointSource,
    /// Seed for reproducible point sampling.
    pub seed: u64,
    /// Capture rate and length.
    pub capture: CaptureSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas: CanvasSettings {
                width: 1080,
                height: 1080,
            },
            point_count: 50,
            z_spread: 1.0,
            point_size: 0.5,
            threshold: [0.15, 0.7],
            speed: 0.3,
            animate: true,
            mode: VariantMode::Animated,
            point_source: PointSource::Random,
            seed: 0,
            capture: CaptureSettings {
                fps: 30,
                duration_secs: 10.0,
            },
        }
    }
}

impl Settings {
    /// Parse settings from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CellscanResult<Self> {
        let settings: Settings = serde_json::from_reader(r)
            .map_err(|e| CellscanError::validation(format!("parse settings JSON: {e}")))?;
        Ok(settings)
    }

    /// Parse settings from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CellscanResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CellscanError::validation(format!("open settings JSON '{}': {e}", path.display()))
        })?;
        let r = BufReader::new(f);
        Self::from_reader(r)
    }

    /// Check every field against its contract.
    ///
    /// All violations are collected and reported together, each with its
    /// field path.
    pub fn validate(&self) -> CellscanResult<()> {
        validate_settings(self)
            .map_err(|e| CellscanError::validation(format!("settings validation failed: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/settings.rs"]
mod tests;
