//! Observation-depth animation: bounded reflective oscillation.

/// The per-frame depth stepping rule.
pub mod driver;
