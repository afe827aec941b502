//! The 3D point cloud and the distance-field math evaluated against it.

/// Per-sample field evaluation: aspect correction, minimum distance,
/// smoothstep mapping.
pub mod distance;
/// Point-set ownership and regeneration.
pub mod point;
