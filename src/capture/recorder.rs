use crate::capture::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Fps, FrameIndex, FrameRange};
use crate::foundation::error::CellscanResult;
use crate::reactive::channels::ReactiveChannels;
use crate::render::fingerprint::{FrameFingerprint, fingerprint_plan};
use crate::render::frame::Frame;
use crate::scene::settings::CaptureSettings;
use crate::session::scene_session::SceneSession;

/// Shortest and longest supported capture.
const DURATION_MIN_SECS: f32 = 1.0;
const DURATION_MAX_SECS: f32 = 30.0;

/// Options for one capture run.
#[derive(Clone, Copy, Debug)]
pub struct CaptureOpts {
    /// Capture rate.
    pub fps: Fps,
    /// Capture length in seconds; clamped into [1, 30] at run time.
    pub duration_secs: f32,
    /// Reuse the previous raster when a frame's plan fingerprint is
    /// unchanged (frozen scenes render once).
    pub static_frame_elision: bool,
}

impl CaptureOpts {
    /// Build options from the settings surface.
    pub fn from_settings(s: &CaptureSettings) -> CellscanResult<Self> {
        Ok(Self {
            fps: Fps::new(s.fps, 1)?,
            duration_secs: s.duration_secs,
            static_frame_elision: true,
        })
    }
}

/// Capture run statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CaptureStats {
    /// Frames delivered to the sink.
    pub frames_total: u64,
    /// Frames actually rasterized.
    pub frames_rendered: u64,
    /// Frames served from the previous raster via fingerprint elision.
    pub frames_elided: u64,
}

/// Runs a [`SceneSession`] at a fixed rate for a bounded duration, pushing
/// every frame to a sink in strictly increasing order.
///
/// The run terminates automatically when the frame-count target
/// (`fps * duration`) is reached. Frames are sequential by nature (each depth
/// step depends on the last), so the capture loop is not parallel; elision
/// recovers most of the cost for frozen scenes.
pub struct CaptureSession {
    opts: CaptureOpts,
}

impl CaptureSession {
    /// Create a capture session.
    pub fn new(opts: CaptureOpts) -> Self {
        Self { opts }
    }

    /// Drive `session` for the configured duration into `sink`.
    ///
    /// `reactive` is sampled once per frame before the frame is advanced;
    /// return `None` for non-reactive captures.
    pub fn run(
        &self,
        session: &mut SceneSession,
        sink: &mut dyn FrameSink,
        mut reactive: impl FnMut(FrameIndex) -> Option<ReactiveChannels>,
    ) -> CellscanResult<CaptureStats> {
        let duration = self
            .opts
            .duration_secs
            .clamp(DURATION_MIN_SECS, DURATION_MAX_SECS);
        if duration != self.opts.duration_secs {
            tracing::warn!(
                requested = self.opts.duration_secs,
                applied = duration,
                "capture duration out of range, clamped"
            );
        }
        let target = self.opts.fps.secs_to_frames_floor(f64::from(duration));
        let range = FrameRange::new(FrameIndex(0), FrameIndex(target))?;

        let span = tracing::info_span!("capture", frames = range.len_frames());
        let _guard = span.enter();

        let canvas = session.settings().canvas;
        sink.begin(SinkConfig {
            width: canvas.width,
            height: canvas.height,
            fps: self.opts.fps,
        })?;

        let mut stats = CaptureStats {
            frames_total: range.len_frames(),
            ..Default::default()
        };
        let mut last: Option<(FrameFingerprint, Frame)> = None;

        for i in range.start.0..range.end.0 {
            let idx = FrameIndex(i);
            let plan = session.advance(reactive(idx))?;
            if let Some(e) = session.take_regen_error() {
                tracing::warn!(error = %e, "regeneration failed; capturing with the previous point set");
            }
            let fp = fingerprint_plan(&plan);

            if self.opts.static_frame_elision
                && let Some((last_fp, frame)) = last.as_ref()
                && *last_fp == fp
            {
                sink.push_frame(idx, frame)?;
                stats.frames_elided += 1;
                continue;
            }

            let frame = session.render_plan(&plan);
            sink.push_frame(idx, &frame)?;
            stats.frames_rendered += 1;
            last = Some((fp, frame));
        }

        sink.end()?;
        tracing::debug!(
            rendered = stats.frames_rendered,
            elided = stats.frames_elided,
            "capture finished"
        );
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/capture/recorder.rs"]
mod tests;
