use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{CellscanError, CellscanResult};
use crate::render::frame::Frame;
use std::path::PathBuf;

/// Configuration provided to a [`FrameSink`] at the start of a capture.
#[derive(Debug, Clone, Copy)]
pub struct SinkConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Capture rate.
    pub fps: Fps,
}

/// Sink contract for consuming captured frames in timeline order.
///
/// Ordering contract: `push_frame` is called in strictly increasing
/// `FrameIndex` order within the captured range. Sinks borrow the frame and
/// must copy what they keep; holding the capture loop longer than one frame's
/// budget stalls the animation.
pub trait FrameSink {
    /// Start a capture.
    fn begin(&mut self, cfg: SinkConfig) -> CellscanResult<()>;
    /// Consume one frame.
    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> CellscanResult<()>;
    /// Finish the capture.
    fn end(&mut self) -> CellscanResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    /// Frames in timeline order.
    pub frames: Vec<(FrameIndex, Frame)>,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The config received at `begin`, if a capture has started.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> CellscanResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> CellscanResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> CellscanResult<()> {
        Ok(())
    }
}

/// Sink writing numbered PNG files into a directory.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    prefix: String,
    cfg: Option<SinkConfig>,
}

impl PngSequenceSink {
    /// Create a sink writing `<prefix>_<index:05>.png` under `dir`.
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            cfg: None,
        }
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> CellscanResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            CellscanError::capture(format!(
                "create capture dir '{}': {e}",
                self.dir.display()
            ))
        })?;
        self.cfg = Some(cfg);
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> CellscanResult<()> {
        if self.cfg.is_none() {
            return Err(CellscanError::capture("png sink not started"));
        }

        let path = self.dir.join(format!("{}_{:05}.png", self.prefix, idx.0));
        image::save_buffer_with_format(
            &path,
            &frame.data,
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| CellscanError::capture(format!("write png '{}': {e}", path.display())))?;
        Ok(())
    }

    fn end(&mut self) -> CellscanResult<()> {
        self.cfg = None;
        Ok(())
    }
}
