use crate::foundation::error::{CellscanError, CellscanResult};
use crate::foundation::math::Rng64;
use glam::Vec3;
use std::sync::Arc;

/// Where the field's points come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointSource {
    /// Uniformly sampled points: x,y in `[0,1)`, z in `[0, z_spread)`.
    Random,
    /// The built-in fixed 30-point constellation.
    Preset,
}

/// An immutable, fully constructed point set.
///
/// Shared by reference: the renderer holds a clone of the `Arc` for the
/// duration of a frame, so a concurrent regeneration can never expose a
/// partially built set.
pub type PointSet = Arc<[Vec3]>;

/// Owner of the sample point cloud.
///
/// The set is replaced wholesale on regeneration, never mutated in place. A
/// generation counter increments on every successful swap; frame
/// fingerprinting uses it to detect point-set changes without hashing the
/// points themselves.
pub struct PointField {
    points: PointSet,
    generation: u64,
    rng: Rng64,
}

impl PointField {
    /// Create an empty field seeded for reproducible sampling.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            points: Arc::from(Vec::new()),
            generation: 0,
            rng: Rng64::new(seed),
        }
    }

    /// Replace the point set with `count` uniformly sampled points.
    ///
    /// Each coordinate is sampled independently: x,y from `[0,1)`, z from
    /// `[0, z_spread)`. `count = 0` produces an empty set, which the renderer
    /// treats as "maximum distance everywhere" rather than a fault. On
    /// failure the previous set is retained untouched.
    pub fn regenerate(&mut self, count: usize, z_spread: f32) -> CellscanResult<()> {
        let z_spread = z_spread.clamp(0.0, 1.0);

        let mut pts = Vec::new();
        pts.try_reserve_exact(count).map_err(|e| {
            CellscanError::regeneration(format!("allocating {count} points failed: {e}"))
        })?;
        for _ in 0..count {
            let x = self.rng.next_f32_01();
            let y = self.rng.next_f32_01();
            let z = self.rng.next_f32_01() * z_spread;
            pts.push(Vec3::new(x, y, z));
        }

        self.points = pts.into();
        self.generation += 1;
        tracing::debug!(count, z_spread, generation = self.generation, "point field regenerated");
        Ok(())
    }

    /// Replace the point set with the built-in preset constellation.
    pub fn set_preset(&mut self) {
        self.points = preset_constellation().into();
        self.generation += 1;
        tracing::debug!(generation = self.generation, "point field set to preset constellation");
    }

    /// Current point set (cheap `Arc` clone).
    pub fn points(&self) -> PointSet {
        self.points.clone()
    }

    /// Number of points currently held.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Return `true` when the field holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Generation counter, incremented on every successful swap.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// A fixed, hand-placed constellation: 30 points with z in `[-0.5, 0.5]`,
/// for reproducible output without touching the sampling seed.
pub fn preset_constellation() -> Vec<Vec3> {
    vec![
        Vec3::new(0.83, 0.75, 0.50),
        Vec3::new(0.60, 0.07, 0.40),
        Vec3::new(0.28, 0.64, 0.30),
        Vec3::new(0.31, 0.26, 0.20),
        Vec3::new(0.15, 0.85, 0.10),
        Vec3::new(0.76, 0.32, 0.00),
        Vec3::new(0.45, 0.50, -0.10),
        Vec3::new(0.22, 0.12, -0.20),
        Vec3::new(0.90, 0.42, -0.30),
        Vec3::new(0.55, 0.81, -0.40),
        Vec3::new(0.38, 0.92, -0.50),
        Vec3::new(0.67, 0.18, 0.35),
        Vec3::new(0.12, 0.35, -0.35),
        Vec3::new(0.48, 0.67, 0.25),
        Vec3::new(0.00, 0.00, 0.00),
        Vec3::new(0.22, 0.45, 0.48),
        Vec3::new(0.71, 0.53, -0.25),
        Vec3::new(0.43, 0.29, 0.38),
        Vec3::new(0.81, 0.13, -0.37),
        Vec3::new(0.32, 0.48, -0.18),
        Vec3::new(0.67, 0.89, 0.12),
        Vec3::new(0.17, 0.62, -0.45),
        Vec3::new(0.93, 0.21, 0.22),
        Vec3::new(0.37, 0.74, -0.33),
        Vec3::new(0.59, 0.38, 0.45),
        Vec3::new(0.13, 0.96, -0.15),
        Vec3::new(0.78, 0.43, 0.31),
        Vec3::new(0.41, 0.12, -0.42),
        Vec3::new(0.25, 0.56, 0.18),
        Vec3::new(0.86, 0.78, -0.27),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/field/point.rs"]
mod tests;
