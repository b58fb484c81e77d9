//! Classical fourth-order Runge-Kutta step.
//!
//! Given `y = state`, `t = time` and `h = dt`:
//!
//! ```text
//! k1 = f(y, t)
//! k2 = f(y + k1 * h/2, t + h/2)
//! k3 = f(y + k2 * h/2, t + h/2)
//! k4 = f(y + k3 * h,   t + h)
//!
//! y_next = y + (k1 + k4 + (k2 + k3) * 2) * h/6
//! ```
//!
//! The local truncation error is `O(h⁵)`.

use odestep_core::{DynamicalSystem, StateOf, TimeStep, VectorSpace};

/// Returns the state one classical RK4 step after `(state, time)`.
///
/// Evaluates [`DynamicalSystem::derivatives`] exactly four times and combines
/// the slopes with weights `(1, 2, 2, 1) / 6`.
pub fn step<S>(system: &S, state: &StateOf<S>, time: f64, dt: TimeStep) -> StateOf<S>
where
    S: DynamicalSystem + ?Sized,
{
    let h = dt.value();
    let half = dt.half();

    let k1 = system.derivatives(state, time);
    let k2 = system.derivatives(&state.add(&k1.scale(half)), time + half);
    let k3 = system.derivatives(&state.add(&k2.scale(half)), time + half);
    let k4 = system.derivatives(&state.add(&k3.scale(h)), time + h);

    let slope = k1.add(&k4).add(&k2.add(&k3).scale(2.0));
    state.add(&slope.scale(h / 6.0))
}
