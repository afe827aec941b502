//! Frame containers, per-frame parameter snapshots, and the CPU renderer.

/// Frame-plan identity hashing for static-frame elision.
pub mod fingerprint;
/// The RGBA8 frame container.
pub mod frame;
/// Per-frame parameter snapshots.
pub mod params;
/// The rayon row-parallel rasterizer.
pub mod renderer;
