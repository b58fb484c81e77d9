use std::{fmt, str::FromStr};

use odestep_core::{DynamicalSystem, StateOf, TimeStep};
use thiserror::Error;

use crate::transient::{euler, rk4};

/// Fixed-step integration methods supported by [`Integrator`].
///
/// [`Method::Rk4`] is the default: it costs four derivative evaluations per
/// step but is fourth-order accurate. [`Method::Euler`] costs one evaluation
/// and is first-order accurate.
///
/// [`Integrator`]: crate::Integrator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Method {
    /// Explicit forward Euler.
    Euler,

    /// Classical fourth-order Runge-Kutta.
    #[default]
    Rk4,
}

/// Error returned when parsing an unknown [`Method`] name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown integration method `{0}`, expected `euler` or `rk4`")]
pub struct ParseMethodError(String);

impl Method {
    /// All supported methods, cheapest first.
    pub const ALL: [Method; 2] = [Method::Euler, Method::Rk4];

    /// Returns the global order of accuracy.
    #[must_use]
    pub fn order(self) -> u32 {
        match self {
            Method::Euler => 1,
            Method::Rk4 => 4,
        }
    }

    /// Returns the number of derivative evaluations per step.
    #[must_use]
    pub fn evaluations(self) -> usize {
        match self {
            Method::Euler => 1,
            Method::Rk4 => 4,
        }
    }

    /// Returns the lowercase name of the method.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Method::Euler => "euler",
            Method::Rk4 => "rk4",
        }
    }

    /// Returns the state one step of this method after `(state, time)`.
    pub fn step<S>(self, system: &S, state: &StateOf<S>, time: f64, dt: TimeStep) -> StateOf<S>
    where
        S: DynamicalSystem + ?Sized,
    {
        match self {
            Method::Euler => euler::step(system, state, time, dt),
            Method::Rk4 => rk4::step(system, state, time, dt),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|method| method.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseMethodError(s.to_owned()))
    }
}
