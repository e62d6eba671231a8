use crate::core::types::AxisState;

/// Advances one translational degree of freedom under constant acceleration.
///
/// Integrates the system
///
/// ```text
/// d(position)/dt = velocity
/// d(velocity)/dt = acceleration
/// ```
///
/// over `[0, dt]`. Acceleration is constant across the step, so the
/// closed-form solution is used directly: `v' = v + a·dt` and
/// `p' = p + v·dt + ½·a·dt²`. Pure function; the caller swaps the returned
/// state in.
pub fn integrate(state: AxisState, dt: f64, acceleration: f64) -> AxisState {
    AxisState {
        position: state.position + state.velocity * dt + 0.5 * acceleration * dt * dt,
        velocity: state.velocity + acceleration * dt,
    }
}
