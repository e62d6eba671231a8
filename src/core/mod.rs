//! Core types describing the ball, its enclosure, and shared value types.

pub mod body;
pub mod enclosure;
pub mod types;

pub use body::BouncingBody;
pub use enclosure::Enclosure;
pub use types::{AxisState, BallProperties, Energy};
