//! The scalar linear system `dy/dt = rate * y`.
//!
//! Its exact solution `y(t) = y₀ exp(rate t)` makes it the reference problem
//! for measuring the order of convergence of a step method.

use odestep_core::DynamicalSystem;

use crate::ParameterError;

/// Exponential growth (`rate > 0`) or decay (`rate < 0`) of a scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialSystem {
    rate: f64,
}

impl ExponentialSystem {
    /// Creates the system `dy/dt = rate * y`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Rate`] if `rate` is not finite.
    pub fn new(rate: f64) -> Result<Self, ParameterError> {
        if rate.is_finite() {
            Ok(Self { rate })
        } else {
            Err(ParameterError::Rate(rate))
        }
    }

    /// Returns the growth rate.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the exact value at time `t` starting from `initial` at time zero.
    #[must_use]
    pub fn exact(&self, initial: f64, t: f64) -> f64 {
        initial * (self.rate * t).exp()
    }
}

impl DynamicalSystem for ExponentialSystem {
    type State = f64;

    fn derivatives(&self, state: &f64, _time: f64) -> f64 {
        self.rate * state
    }
}
