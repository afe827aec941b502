//! Cellscan renders animated Worley-noise (cellular) patterns on the CPU.
//!
//! An oscillating observation depth scans a 3D point cloud; each frame maps
//! the per-pixel minimum distance to the nearest point through a smoothstep
//! threshold into a grayscale raster. The public API is session-oriented:
//!
//! - Load and validate [`Settings`]
//! - Create a [`SceneSession`] and step it frame by frame
//! - Or run a [`CaptureSession`] to stream a fixed-rate sequence into a
//!   [`FrameSink`] (in-memory, PNG sequence, or `ffmpeg` MP4)
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Observation-depth animation.
pub mod anim;
/// Fixed-rate capture into frame sinks.
pub mod capture;
/// The point cloud and distance-field math.
pub mod field;
/// Reactive channels and their calibration pipeline.
pub mod reactive;
/// Frame containers and the CPU renderer.
pub mod render;
/// The serde parameter surface.
pub mod scene;
/// Session-oriented frame stepping.
pub mod session;

pub use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
pub use crate::foundation::error::{CellscanError, CellscanResult};
pub use crate::foundation::math::{Rng64, smoothstep};

pub use crate::anim::driver::{AnimationDriver, BASE_STEP, Direction, ObservationState, StepMode};
pub use crate::capture::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
pub use crate::capture::recorder::{CaptureOpts, CaptureSession, CaptureStats};
pub use crate::capture::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig};
pub use crate::field::point::{PointField, PointSet, PointSource};
pub use crate::reactive::calibrate::{BandEnergies, ReactiveCalibrator};
pub use crate::reactive::channels::ReactiveChannels;
pub use crate::render::fingerprint::{FrameFingerprint, fingerprint_plan};
pub use crate::render::frame::Frame;
pub use crate::render::params::{FramePlan, RenderParameters, ThresholdMapping};
pub use crate::render::renderer::{DistanceFieldRenderer, RendererOpts};
pub use crate::scene::settings::{CanvasSettings, CaptureSettings, Settings, VariantMode};
pub use crate::session::command::{Command, SceneControls};
pub use crate::session::scene_session::{SceneSession, SceneSessionOpts};
