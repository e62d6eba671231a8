//! Bounce Box – a gravity-driven ball-in-a-box simulation core for Rust.
//!
//! This crate simulates a single sphere moving under constant gravity inside
//! an axis-aligned rectangular enclosure, with perfectly elastic reflection
//! off the four walls. A rendering front-end drives the simulation one frame
//! at a time and reads position, velocity, and energy back between frames.

pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod utils;
pub mod world;

pub use glam::DVec2;

pub use crate::core::{
    body::BouncingBody,
    enclosure::Enclosure,
    types::{AxisState, BallProperties, Energy},
};
pub use crate::dynamics::integrator::integrate;
pub use crate::error::SimulationError;
pub use crate::world::{EnergySample, SharedSimulation, Simulation, StateSnapshot};
