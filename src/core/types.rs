use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_MASS, DEFAULT_RADIUS, DEFAULT_TEMPERATURE};

/// Common math types re-exported for convenience.
pub use glam::DVec2;

/// One translational degree of freedom: a position paired with its velocity.
///
/// The ball's two axes are integrated independently, each as one of these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisState {
    pub position: f64,
    pub velocity: f64,
}

impl AxisState {
    pub fn new(position: f64, velocity: f64) -> Self {
        Self { position, velocity }
    }
}

/// Physical properties of the simulated ball.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BallProperties {
    /// Sphere radius in meters.
    pub radius: f64,
    /// Mass in kilograms.
    pub mass: f64,
    /// Temperature in degrees Celsius. Carried through unchanged; the
    /// dynamics never read it.
    pub temperature: f64,
}

impl Default for BallProperties {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            mass: DEFAULT_MASS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Instantaneous energy split of the vertical degree of freedom, in joules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Energy {
    pub kinetic: f64,
    pub potential: f64,
}

impl Energy {
    /// Total mechanical energy of the vertical axis.
    pub fn total(&self) -> f64 {
        self.kinetic + self.potential
    }
}
