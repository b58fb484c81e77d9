//! Fixed-step integrators for odestep systems.
//!
//! # Modules
//!
//! - [`transient`] — single-step update rules ([`euler`], [`rk4`])
//! - [`Method`] — selects one of those rules at runtime
//! - [`Integrator`] — owns a system's state and time and advances them
//!
//! RK4 is the default method. Forward Euler is kept as a cheap first-order
//! baseline.
//!
//! [`euler`]: transient::euler
//! [`rk4`]: transient::rk4

mod integrator;
mod method;

pub mod transient;

pub use integrator::Integrator;
pub use method::{Method, ParseMethodError};
pub use odestep_core::{DynamicalSystem, TimeStep, TimeStepError, VectorSpace};
