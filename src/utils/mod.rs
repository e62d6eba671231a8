//! Utility helpers: logging support for the driver loop.

pub mod logging;

pub use logging::FrameTimer;
