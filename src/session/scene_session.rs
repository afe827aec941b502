use crate::anim::driver::{AnimationDriver, ObservationState, StepMode};
use crate::field::point::{PointField, PointSource};
use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::{CellscanError, CellscanResult};
use crate::reactive::channels::ReactiveChannels;
use crate::render::frame::Frame;
use crate::render::params::{FramePlan, RenderParameters, ThresholdMapping};
use crate::render::renderer::{DistanceFieldRenderer, RendererOpts};
use crate::scene::settings::{Settings, VariantMode};
use crate::session::command::{Command, SceneControls};
use std::sync::mpsc;

/// Options fixed at session construction.
#[derive(Clone, Copy, Debug, Default)]
pub struct SceneSessionOpts {
    /// Renderer parallelism options.
    pub renderer: RendererOpts,
    /// Animation stepping mode.
    pub step_mode: StepMode,
}

/// The single owner of all mutable scene state.
///
/// One frame is one call to [`SceneSession::advance`] (drain commands,
/// regenerate if needed, step the depth, snapshot a [`FramePlan`]) followed by
/// [`SceneSession::render_plan`] (a pure rasterization of the snapshot).
/// [`SceneSession::advance_frame`] combines the two; capture keeps them apart
/// so it can fingerprint plans and skip re-rendering identical frames.
pub struct SceneSession {
    settings: Settings,
    field: PointField,
    state: ObservationState,
    driver: AnimationDriver,
    renderer: DistanceFieldRenderer,

    tx: mpsc::Sender<Command>,
    rx: mpsc::Receiver<Command>,

    next_index: u64,
    last_regen_error: Option<CellscanError>,
}

impl SceneSession {
    /// Build a session from validated settings with default options.
    pub fn new(settings: Settings) -> CellscanResult<Self> {
        Self::with_opts(settings, SceneSessionOpts::default())
    }

    /// Build a session from validated settings.
    pub fn with_opts(settings: Settings, opts: SceneSessionOpts) -> CellscanResult<Self> {
        settings.validate()?;

        let mut field = PointField::with_seed(settings.seed);
        populate(&mut field, &settings)?;

        let renderer = DistanceFieldRenderer::new(opts.renderer)?;
        let (tx, rx) = mpsc::channel();

        Ok(Self {
            settings,
            field,
            state: ObservationState::new(),
            driver: AnimationDriver::new(opts.step_mode),
            renderer,
            tx,
            rx,
            next_index: 0,
            last_regen_error: None,
        })
    }

    /// Handle for queueing parameter changes from UI or control threads.
    pub fn controls(&self) -> SceneControls {
        SceneControls::new(self.tx.clone())
    }

    /// Current settings (pending commands not yet applied).
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Current observation state.
    pub fn observation(&self) -> ObservationState {
        self.state
    }

    /// Take the error from the most recent failed regeneration, if any.
    ///
    /// A failed regeneration never stops the frame loop: the previous point
    /// set stays in service and the error parks here for the caller.
    pub fn take_regen_error(&mut self) -> Option<CellscanError> {
        self.last_regen_error.take()
    }

    /// Advance one frame and snapshot its plan.
    ///
    /// Order per frame: drain pending commands atomically, regenerate the
    /// point field if a drained command asked for it, step the observation
    /// depth, then snapshot. The returned plan is immutable; nothing this
    /// session does afterwards can change what it renders to.
    pub fn advance(&mut self, reactive: Option<ReactiveChannels>) -> CellscanResult<FramePlan> {
        self.advance_with(reactive, None)
    }

    /// Advance one frame using a measured wall-clock delta.
    ///
    /// Only meaningful when the session was built with
    /// [`StepMode::DeltaTime`]; in the default per-frame mode the delta is
    /// ignored and this is identical to [`SceneSession::advance`].
    pub fn advance_timed(
        &mut self,
        reactive: Option<ReactiveChannels>,
        dt_secs: f32,
    ) -> CellscanResult<FramePlan> {
        self.advance_with(reactive, Some(dt_secs))
    }

    fn advance_with(
        &mut self,
        reactive: Option<ReactiveChannels>,
        dt_secs: Option<f32>,
    ) -> CellscanResult<FramePlan> {
        let needs_regen = self.drain_commands();
        if needs_regen
            && let Err(e) = populate(&mut self.field, &self.settings)
        {
            tracing::error!(error = %e, "point regeneration failed; keeping previous set");
            self.last_regen_error = Some(e);
        }

        let animating = self.settings.animate && self.settings.mode != VariantMode::Static;
        self.state = match dt_secs {
            Some(dt) => self.driver.step_timed(
                self.state,
                self.settings.speed,
                self.settings.z_spread,
                animating,
                dt,
            ),
            None => self.driver.step(
                self.state,
                self.settings.speed,
                self.settings.z_spread,
                animating,
            ),
        };

        let canvas = Canvas {
            width: self.settings.canvas.width,
            height: self.settings.canvas.height,
        };
        let mapping = match (self.settings.mode, reactive) {
            (VariantMode::AudioReactive, Some(channels)) => {
                ThresholdMapping::ReactiveCrossWired { channels }
            }
            _ => ThresholdMapping::Base,
        };
        let params = RenderParameters {
            max_dist: self.settings.point_size,
            threshold: self.settings.threshold,
            ratio: canvas.ratio(),
            mapping,
        };

        let index = FrameIndex(self.next_index);
        self.next_index += 1;

        Ok(FramePlan {
            index,
            canvas,
            depth: self.state.depth,
            points: self.field.points(),
            generation: self.field.generation(),
            params,
        })
    }

    /// Rasterize a plan. Pure with respect to session state.
    pub fn render_plan(&self, plan: &FramePlan) -> Frame {
        self.renderer.render(plan)
    }

    /// Advance one frame and render it.
    pub fn advance_frame(&mut self, reactive: Option<ReactiveChannels>) -> CellscanResult<Frame> {
        let plan = self.advance(reactive)?;
        Ok(self.render_plan(&plan))
    }

    /// Apply all queued commands; returns whether the point field must be
    /// rebuilt. Repeated regeneration triggers coalesce into one rebuild with
    /// the final parameters (the superseded requests are simply discarded).
    fn drain_commands(&mut self) -> bool {
        let mut needs_regen = false;
        let mut drained = 0usize;

        while let Ok(cmd) = self.rx.try_recv() {
            drained += 1;
            needs_regen |= self.apply_command(cmd);
        }

        if drained > 0 {
            tracing::debug!(drained, needs_regen, "applied queued commands");
        }
        needs_regen
    }

    fn apply_command(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::SetCanvas { width, height } => {
                self.settings.canvas.width = clamp_reporting(width, 100, 5700, "canvas width");
                self.settings.canvas.height = clamp_reporting(height, 100, 5700, "canvas height");
                false
            }
            Command::SetPointCount(n) => {
                self.settings.point_count = clamp_reporting(n, 1, 150, "point count");
                true
            }
            Command::SetZSpread(z) => {
                self.settings.z_spread = clamp_finite(z, 0.0, 1.0, "z spread");
                true
            }
            Command::SetPointSize(s) => {
                self.settings.point_size = clamp_finite(s, 0.01, 1.0, "point size");
                false
            }
            Command::SetThreshold { low, high } => {
                let low = clamp_finite(low, 0.0, 1.0, "threshold low");
                let high = clamp_finite(high, 0.0, 1.0, "threshold high");
                if low >= high {
                    tracing::warn!(low, high, "degenerate threshold range; field will flatten");
                }
                self.settings.threshold = [low, high];
                false
            }
            Command::SetSpeed(s) => {
                self.settings.speed = clamp_finite(s, 0.0, 2.0, "speed");
                false
            }
            Command::SetAnimate(on) => {
                self.settings.animate = on;
                false
            }
            Command::SetMode(mode) => {
                self.settings.mode = mode;
                false
            }
            Command::SetPointSource(src) => {
                let changed = self.settings.point_source != src;
                self.settings.point_source = src;
                changed
            }
            Command::Regenerate => true,
        }
    }
}

fn populate(field: &mut PointField, settings: &Settings) -> CellscanResult<()> {
    match settings.point_source {
        PointSource::Random => {
            field.regenerate(settings.point_count as usize, settings.z_spread)
        }
        PointSource::Preset => {
            field.set_preset();
            Ok(())
        }
    }
}

fn clamp_reporting(v: u32, min: u32, max: u32, what: &str) -> u32 {
    let clamped = v.clamp(min, max);
    if clamped != v {
        tracing::warn!(requested = v, applied = clamped, "{what} out of range, clamped");
    }
    clamped
}

fn clamp_finite(v: f32, min: f32, max: f32, what: &str) -> f32 {
    if !v.is_finite() {
        tracing::warn!(requested = v, applied = min, "{what} not finite, clamped");
        return min;
    }
    let clamped = v.clamp(min, max);
    if clamped != v {
        tracing::warn!(requested = v, applied = clamped, "{what} out of range, clamped");
    }
    clamped
}

#[cfg(test)]
#[path = "../../tests/unit/session/scene_session.rs"]
mod tests;
