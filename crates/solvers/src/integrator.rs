use odestep_core::{DynamicalSystem, TimeStep};

use crate::Method;

/// A dynamical system together with its current state and time.
///
/// An `Integrator` is constructed from a system, an initial state and an
/// initial time, and is then advanced one step at a time by an external
/// driver, which reads [`state`] and [`time`] after each call.
///
/// Each step computes the next state from the current `(state, time)` pair
/// before anything is written, then commits the new state and the advanced
/// time together. A caller therefore always sees a consistent pair.
///
/// # Example
///
/// ```
/// use odestep_core::{TimeStep, from_fn};
/// use odestep_solvers::Integrator;
///
/// let decay = from_fn(|y: &f64, _| -y);
/// let mut integrator = Integrator::new(decay, 1.0, 0.0);
///
/// let dt = TimeStep::new(0.01)?;
/// for _ in 0..100 {
///     integrator.rk4_step(dt);
/// }
///
/// assert!((integrator.state() - (-1.0_f64).exp()).abs() < 1e-9);
/// assert!((integrator.time() - 1.0).abs() < 1e-12);
/// # Ok::<(), odestep_core::TimeStepError>(())
/// ```
///
/// [`state`]: Integrator::state
/// [`time`]: Integrator::time
#[derive(Debug, Clone)]
pub struct Integrator<S: DynamicalSystem> {
    system: S,
    state: S::State,
    time: f64,
}

impl<S: DynamicalSystem> Integrator<S> {
    /// Creates an integrator at `state` and `time`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `time` is not finite.
    pub fn new(system: S, state: S::State, time: f64) -> Self {
        debug_assert!(time.is_finite(), "initial time must be finite, got {time}");
        log::debug!("integrator created at t = {time}");

        Self {
            system,
            state,
            time,
        }
    }

    /// Returns the system being integrated.
    pub fn system(&self) -> &S {
        &self.system
    }

    /// Returns the current state.
    pub fn state(&self) -> &S::State {
        &self.state
    }

    /// Returns the current time.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Consumes the integrator and returns its system, state and time.
    pub fn into_parts(self) -> (S, S::State, f64) {
        (self.system, self.state, self.time)
    }

    /// Advances one forward Euler step.
    pub fn euler_step(&mut self, dt: TimeStep) {
        self.step(Method::Euler, dt);
    }

    /// Advances one classical RK4 step.
    pub fn rk4_step(&mut self, dt: TimeStep) {
        self.step(Method::Rk4, dt);
    }

    /// Advances one step of `method`.
    pub fn step(&mut self, method: Method, dt: TimeStep) {
        let next = method.step(&self.system, &self.state, self.time, dt);

        self.state = next;
        self.time += dt.value();

        log::trace!("{method} step of {dt} to t = {}", self.time);
    }
}
