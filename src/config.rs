//! Global configuration constants for the Bounce Box engine.

/// Default gravitational acceleration along the vertical axis
/// (m/s², negative = downward).
pub const DEFAULT_GRAVITY: f64 = -9.81;

/// Default simulation timestep (in seconds), one frame of a 30 FPS clock.
pub const DEFAULT_TIME_STEP: f64 = 1.0 / 30.0;

/// Default left wall coordinate (meters).
pub const DEFAULT_WALL_LEFT: f64 = 0.0;

/// Default bottom wall coordinate (meters).
pub const DEFAULT_WALL_BOTTOM: f64 = 0.0;

/// Default right wall coordinate (meters).
pub const DEFAULT_WALL_RIGHT: f64 = 10.0;

/// Default top wall coordinate (meters).
pub const DEFAULT_WALL_TOP: f64 = 10.0;

/// Default ball radius (meters).
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Default ball mass (kilograms).
pub const DEFAULT_MASS: f64 = 1.0;

/// Default ball temperature (degrees Celsius).
pub const DEFAULT_TEMPERATURE: f64 = 20.0;
