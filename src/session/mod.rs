//! Session-oriented frame stepping: one owner of all mutable state, fed by a
//! command queue drained at frame boundaries.

/// Parameter-change commands and the queueing handle.
pub mod command;
/// The scene session itself.
pub mod scene_session;
