//! Single-step update rules for dynamical systems.
//!
//! Each rule is a pure function that maps the current `(state, time)` and a
//! step size to the next state. The rules never advance time themselves;
//! [`Integrator`] commits the new state and time together.
//!
//! # Rules
//!
//! - [`euler`] — explicit first-order, one derivative evaluation
//! - [`rk4`] — classical fourth-order Runge-Kutta, four derivative evaluations
//!
//! [`Integrator`]: crate::Integrator

pub mod euler;
pub mod rk4;
