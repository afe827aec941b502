/// The five named reactive scalars consumed by the renderer, each in [0,1].
///
/// Values arrive already smoothed; the renderer applies no further easing.
/// Only `high` and `mid` drive anything in the default cross-wired mapping;
/// the rest are carried for callers that want them.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReactiveChannels {
    /// Low-band energy.
    pub bass: f32,
    /// Mid-band energy.
    pub mid: f32,
    /// High-band energy.
    pub high: f32,
    /// Weighted average band energy.
    pub avg: f32,
    /// Overall amplitude level.
    pub level: f32,
}

impl ReactiveChannels {
    /// Build a channel set, clamping every value into [0,1].
    pub fn new(bass: f32, mid: f32, high: f32, avg: f32, level: f32) -> Self {
        Self {
            bass: bass.clamp(0.0, 1.0),
            mid: mid.clamp(0.0, 1.0),
            high: high.clamp(0.0, 1.0),
            avg: avg.clamp(0.0, 1.0),
            level: level.clamp(0.0, 1.0),
        }
    }
}
