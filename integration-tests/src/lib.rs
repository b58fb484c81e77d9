//! Shared helpers for the cross-crate integration tests.

use odestep_core::{DynamicalSystem, TimeStep};
use odestep_solvers::{Integrator, Method};

/// Advances `integrator` by `steps` steps of `method`.
pub fn advance<S: DynamicalSystem>(
    integrator: &mut Integrator<S>,
    method: Method,
    dt: TimeStep,
    steps: usize,
) {
    for _ in 0..steps {
        integrator.step(method, dt);
    }
}

/// Integrates `system` from `initial` at time zero to `duration` in `steps`
/// equal steps and returns the final integrator.
///
/// # Panics
///
/// Panics if `duration / steps` is not a valid time step.
pub fn integrate<S: DynamicalSystem>(
    system: S,
    initial: S::State,
    method: Method,
    duration: f64,
    steps: usize,
) -> Integrator<S> {
    let dt = TimeStep::new(duration / steps as f64).expect("valid time step");
    let mut integrator = Integrator::new(system, initial, 0.0);
    advance(&mut integrator, method, dt, steps);
    integrator
}
