use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::core::enclosure::Enclosure;
use crate::core::types::{AxisState, BallProperties, Energy};
use crate::dynamics::integrator;
use crate::error::{Result, SimulationError};

/// The simulated ball: kinematic state, physical properties, and the
/// enclosure it bounces in.
///
/// The enclosure is embedded by value at construction and never replaced,
/// so a body cannot migrate between enclosures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BouncingBody {
    position: DVec2,
    velocity: DVec2,
    properties: BallProperties,
    enclosure: Enclosure,
    elapsed_time: f64,
}

impl BouncingBody {
    /// Creates a ball with the given initial state.
    ///
    /// Fails when the ball already overlaps the left wall. The other three
    /// walls are not checked here; a ball seeded against one of them is
    /// reflected by the first [`step`](Self::step).
    pub fn new(
        position: DVec2,
        velocity: DVec2,
        properties: BallProperties,
        enclosure: Enclosure,
    ) -> Result<Self> {
        if position.x - properties.radius < enclosure.left {
            return Err(SimulationError::InvalidInitialPlacement {
                position_x: position.x,
                radius: properties.radius,
                left: enclosure.left,
            });
        }

        Ok(Self {
            position,
            velocity,
            properties,
            enclosure,
            elapsed_time: 0.0,
        })
    }

    /// Executes one time step of length `dt` seconds and updates the state.
    ///
    /// Gravity acts on the vertical axis only; the horizontal axis coasts.
    /// Wall contacts are resolved after integration, then the elapsed time
    /// is accumulated. `dt` is expected to be positive.
    pub fn step(&mut self, dt: f64) {
        let vertical = integrator::integrate(
            AxisState::new(self.position.y, self.velocity.y),
            dt,
            self.enclosure.gravity,
        );
        let horizontal = integrator::integrate(
            AxisState::new(self.position.x, self.velocity.x),
            dt,
            0.0,
        );

        self.position = DVec2::new(horizontal.position, vertical.position);
        self.velocity = DVec2::new(horizontal.velocity, vertical.velocity);

        self.reflect_off_walls();
        self.elapsed_time += dt;
    }

    /// Reverses a velocity component for every wall the ball's surface
    /// currently crosses. Each wall is tested independently, so a corner hit
    /// flips both components in the same call.
    ///
    /// Reflection only flips velocity; the ball is never pushed back inside
    /// the enclosure, so it can sit slightly past a wall until the next step
    /// carries it back in. All reflections are perfectly elastic.
    pub fn reflect_off_walls(&mut self) {
        let radius = self.properties.radius;

        if self.position.x - radius < self.enclosure.left {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.x + radius > self.enclosure.right {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y - radius < self.enclosure.bottom {
            self.velocity.y = -self.velocity.y;
        }
        if self.position.y + radius > self.enclosure.top {
            self.velocity.y = -self.velocity.y;
        }
    }

    /// Kinetic and potential energy of the vertical degree of freedom.
    ///
    /// Horizontal motion is excluded from the report. Potential energy uses
    /// the gravity magnitude, so it grows with height under either sign
    /// convention.
    pub fn energy(&self) -> Energy {
        Energy {
            kinetic: 0.5 * self.properties.mass * self.velocity.y * self.velocity.y,
            potential: self.properties.mass * self.enclosure.gravity.abs() * self.position.y,
        }
    }

    /// Center of the sphere, meters.
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Velocity in meters/second.
    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    /// Simulated time accumulated by `step` calls since construction.
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    pub fn properties(&self) -> &BallProperties {
        &self.properties
    }

    pub fn enclosure(&self) -> &Enclosure {
        &self.enclosure
    }
}
