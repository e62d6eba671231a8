//! Error types for the simulation core.
//!
//! Construction is the only fallible operation; stepping never fails.

use thiserror::Error;

/// Main error type for the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SimulationError {
    /// The ball was placed already overlapping the left wall.
    #[error(
        "the ball seems to be placed too far left: center {position_x} minus radius {radius} crosses the wall at {left}"
    )]
    InvalidInitialPlacement {
        position_x: f64,
        radius: f64,
        left: f64,
    },
}

/// Convenient result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimulationError>;
