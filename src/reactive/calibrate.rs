use crate::foundation::math::lerp;
use crate::reactive::channels::ReactiveChannels;

/// Pre-smoothing applied to raw band energies before normalization.
const ENERGY_SMOOTHING: f32 = 0.8;
/// Default easing factor for normalized channel values.
const DEFAULT_EASING: f32 = 0.1;
/// The level channel eases slower than the bands.
const LEVEL_EASING: f32 = 0.05;

/// Weights for the averaged band energy (bass, mid, high).
const AVG_WEIGHTS: [f32; 3] = [0.3, 1.5, 2.0];

/// Raw per-frame analysis input: band energies and amplitude level, each
/// already scaled into [0,1] by the upstream analyzer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BandEnergies {
    /// Low-band energy.
    pub bass: f32,
    /// Mid-band energy.
    pub mid: f32,
    /// High-band energy.
    pub high: f32,
    /// Overall amplitude level.
    pub level: f32,
}

/// Running min/max bounds for one channel.
///
/// The minimum only updates on strictly positive observations, so silence
/// between songs does not collapse the calibration window.
#[derive(Clone, Copy, Debug)]
struct Bounds {
    min: f32,
    max: f32,
}

impl Bounds {
    fn new() -> Self {
        Self { min: 1.0, max: 0.0 }
    }

    fn observe(&mut self, v: f32) {
        if v > 0.0 {
            self.min = self.min.min(v);
        }
        self.max = self.max.max(v);
    }

    /// Clamp into the observed window and map to [0,1]; 0.5 when the window
    /// is empty or degenerate.
    fn normalize(&self, v: f32) -> f32 {
        if self.min >= self.max {
            return 0.5;
        }
        let clamped = v.clamp(self.min, self.max);
        (clamped - self.min) / (self.max - self.min)
    }
}

/// Turns raw band energies into smoothed, auto-calibrated [`ReactiveChannels`].
///
/// Per frame: pre-smooth the raw energies, fold them into the running
/// min/max windows, normalize against those windows, then ease each
/// normalized value toward its new target. The output is ready for
/// [`crate::session::SceneSession::advance`].
#[derive(Clone, Debug)]
pub struct ReactiveCalibrator {
    easing: f32,

    bass: f32,
    mid: f32,
    high: f32,
    avg: f32,

    bass_bounds: Bounds,
    mid_bounds: Bounds,
    high_bounds: Bounds,
    avg_bounds: Bounds,
    level_bounds: Bounds,

    prev: ReactiveChannels,
}

impl ReactiveCalibrator {
    /// Create a calibrator with the default easing factor.
    pub fn new() -> Self {
        Self {
            easing: DEFAULT_EASING,
            bass: 0.0,
            mid: 0.0,
            high: 0.0,
            avg: 0.0,
            bass_bounds: Bounds::new(),
            mid_bounds: Bounds::new(),
            high_bounds: Bounds::new(),
            avg_bounds: Bounds::new(),
            level_bounds: Bounds::new(),
            prev: ReactiveChannels {
                bass: 0.5,
                mid: 0.5,
                high: 0.5,
                avg: 0.5,
                level: 0.5,
            },
        }
    }

    /// Set the easing factor, clamped into [0.01, 1].
    ///
    /// Lower is smoother, higher responds faster.
    pub fn set_easing(&mut self, value: f32) {
        self.easing = value.clamp(0.01, 1.0);
    }

    /// Current easing factor.
    pub fn easing(&self) -> f32 {
        self.easing
    }

    /// Fold one frame of analysis into the calibration and return the
    /// smoothed channels.
    pub fn update(&mut self, raw: BandEnergies) -> ReactiveChannels {
        let [wb, wm, wh] = AVG_WEIGHTS;
        let new_avg = (raw.bass * wb + raw.mid * wm + raw.high * wh) / (wb + wm + wh);

        let blend = 1.0 - ENERGY_SMOOTHING;
        self.bass = lerp(self.bass, raw.bass, blend);
        self.mid = lerp(self.mid, raw.mid, blend);
        self.high = lerp(self.high, raw.high, blend);
        self.avg = lerp(self.avg, new_avg, blend);

        self.bass_bounds.observe(raw.bass);
        self.mid_bounds.observe(raw.mid);
        self.high_bounds.observe(raw.high);
        self.avg_bounds.observe(new_avg);
        self.level_bounds.observe(raw.level);

        let eased = ReactiveChannels {
            bass: lerp(
                self.prev.bass,
                self.bass_bounds.normalize(self.bass),
                self.easing,
            ),
            mid: lerp(
                self.prev.mid,
                self.mid_bounds.normalize(self.mid),
                self.easing,
            ),
            high: lerp(
                self.prev.high,
                self.high_bounds.normalize(self.high),
                self.easing,
            ),
            avg: lerp(
                self.prev.avg,
                self.avg_bounds.normalize(self.avg),
                self.easing,
            ),
            level: lerp(
                self.prev.level,
                self.level_bounds.normalize(raw.level),
                LEVEL_EASING,
            ),
        };

        self.prev = eased;
        eased
    }
}

impl Default for ReactiveCalibrator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reactive/calibrate.rs"]
mod tests;
