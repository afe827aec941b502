use crate::field::point::PointSource;
use crate::foundation::error::{CellscanError, CellscanResult};
use crate::scene::settings::VariantMode;
use std::sync::mpsc;

/// A pending parameter change, applied at the next frame boundary.
///
/// Instead of mutating shared state mid-frame, changes queue here and the
/// session drains the queue atomically before evaluating a frame, so no
/// frame ever observes a half-applied change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Resize the output raster.
    SetCanvas {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
    /// Change the number of sampled points (triggers regeneration).
    SetPointCount(u32),
    /// Change the z sampling range (triggers regeneration).
    SetZSpread(f32),
    /// Change the point size / contrast scalar.
    SetPointSize(f32),
    /// Change the threshold range.
    SetThreshold {
        /// New low edge.
        low: f32,
        /// New high edge.
        high: f32,
    },
    /// Change the animation speed multiplier.
    SetSpeed(f32),
    /// Freeze or resume the observation depth.
    SetAnimate(bool),
    /// Switch variant behavior.
    SetMode(VariantMode),
    /// Switch between random sampling and the preset constellation
    /// (triggers regeneration).
    SetPointSource(PointSource),
    /// Force a point regeneration with current parameters.
    Regenerate,
}

/// Cloneable handle for queueing [`Command`]s into a running session.
#[derive(Clone, Debug)]
pub struct SceneControls {
    tx: mpsc::Sender<Command>,
}

impl SceneControls {
    pub(crate) fn new(tx: mpsc::Sender<Command>) -> Self {
        Self { tx }
    }

    /// Queue a command for the next frame boundary.
    pub fn send(&self, cmd: Command) -> CellscanResult<()> {
        self.tx
            .send(cmd)
            .map_err(|_| CellscanError::render("scene session is no longer accepting commands"))
    }
}
