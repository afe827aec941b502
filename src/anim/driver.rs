/// Depth advanced per frame at `speed = 1`, before the speed multiplier.
pub const BASE_STEP: f32 = 0.002;

/// Travel direction of the observation depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Depth grows toward `z_max`.
    Advancing,
    /// Depth shrinks toward 0.
    Reversing,
}

/// The animated scan position: a depth and its travel direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObservationState {
    /// Current observation depth.
    pub depth: f32,
    /// Current travel direction.
    pub direction: Direction,
}

impl ObservationState {
    /// Initial state: depth 0, advancing.
    pub fn new() -> Self {
        Self {
            depth: 0.0,
            direction: Direction::Advancing,
        }
    }
}

impl Default for ObservationState {
    fn default() -> Self {
        Self::new()
    }
}

/// How a step's magnitude relates to time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepMode {
    /// A fixed advance per invoked frame. Motion is frame-rate-dependent,
    /// which keeps exported durations stable across hosts, so this is the
    /// default.
    PerFrame,
    /// Advance scaled by elapsed wall-clock time, normalized so that one
    /// frame at `reference_fps` equals one [`StepMode::PerFrame`] step.
    DeltaTime {
        /// Frame rate at which the two modes coincide.
        reference_fps: f32,
    },
}

impl Default for StepMode {
    fn default() -> Self {
        Self::PerFrame
    }
}

/// Advances the observation depth once per frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnimationDriver {
    mode: StepMode,
}

impl AnimationDriver {
    /// Create a driver with the given stepping mode.
    pub fn new(mode: StepMode) -> Self {
        Self { mode }
    }

    /// The configured stepping mode.
    pub fn mode(&self) -> StepMode {
        self.mode
    }

    /// Advance `state` by one frame.
    ///
    /// The direction flag flips when `depth + delta` would cross a bound,
    /// but the pre-flip signed delta is still applied, so depth may overshoot
    /// a bound by at most one delta before the next step pulls it back. The
    /// overshoot is deliberate; clamping here would shift the oscillation
    /// phase of captured output.
    ///
    /// `animate = false` makes this a no-op. In `DeltaTime` mode this method
    /// assumes exactly one reference frame elapsed; use [`Self::step_timed`]
    /// when a measured delta is available.
    pub fn step(
        &self,
        state: ObservationState,
        speed: f32,
        z_max: f32,
        animate: bool,
    ) -> ObservationState {
        self.advance(state, speed * BASE_STEP, z_max, animate)
    }

    /// Advance `state` by `dt_secs` of wall-clock time.
    ///
    /// In `PerFrame` mode `dt_secs` is ignored and this is identical to
    /// [`Self::step`].
    pub fn step_timed(
        &self,
        state: ObservationState,
        speed: f32,
        z_max: f32,
        animate: bool,
        dt_secs: f32,
    ) -> ObservationState {
        let delta = match self.mode {
            StepMode::PerFrame => speed * BASE_STEP,
            StepMode::DeltaTime { reference_fps } => {
                speed * BASE_STEP * dt_secs.max(0.0) * reference_fps
            }
        };
        self.advance(state, delta, z_max, animate)
    }

    fn advance(
        &self,
        state: ObservationState,
        delta: f32,
        z_max: f32,
        animate: bool,
    ) -> ObservationState {
        if !animate {
            return state;
        }

        let signed = match state.direction {
            Direction::Advancing => delta,
            Direction::Reversing => -delta,
        };

        let mut direction = state.direction;
        if state.depth + signed >= z_max {
            direction = Direction::Reversing;
        } else if state.depth + signed <= 0.0 {
            direction = Direction::Advancing;
        }

        ObservationState {
            depth: state.depth + signed,
            direction,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/anim/driver.rs"]
mod tests;
