//! The capture surface: fixed-rate frame sequences delivered to sinks.

/// MP4 encoding through a system `ffmpeg` child process.
pub mod ffmpeg;
/// The bounded-duration capture loop.
pub mod recorder;
/// Sink contract and built-in sinks.
pub mod sink;
