//! Forward Euler step.
//!
//! Advances a state with a single derivative evaluation:
//!
//! ```text
//! state_{n+1} = state_n + derivative(state_n, t_n) * dt
//! ```
//!
//! The local truncation error is `O(dt²)`. It is the cheap baseline method;
//! prefer [`rk4`](super::rk4) when accuracy matters.
//!
//! # Example
//!
//! ```
//! use odestep_core::{TimeStep, from_fn};
//! use odestep_solvers::transient::euler;
//!
//! let system = from_fn(|_: &f64, _| 2.0);
//! let dt = TimeStep::new(0.5)?;
//!
//! assert_eq!(euler::step(&system, &1.0, 0.0, dt), 2.0);
//! # Ok::<(), odestep_core::TimeStepError>(())
//! ```

use odestep_core::{DynamicalSystem, StateOf, TimeStep, VectorSpace};

/// Returns the state one forward Euler step after `(state, time)`.
///
/// Evaluates [`DynamicalSystem::derivatives`] exactly once.
pub fn step<S>(system: &S, state: &StateOf<S>, time: f64, dt: TimeStep) -> StateOf<S>
where
    S: DynamicalSystem + ?Sized,
{
    let derivative = system.derivatives(state, time);
    state.add(&derivative.scale(dt.value()))
}
