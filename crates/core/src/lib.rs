//! Core traits and types for fixed-step ODE integration.
//!
//! This crate defines the abstractions that step functions and concrete
//! systems build on:
//!
//! - [`VectorSpace`] — a state that can be added to itself and scaled by a real
//! - [`DynamicalSystem`] — a derivative function over a [`VectorSpace`] state
//! - [`FnSystem`] — a closure adapted into a [`DynamicalSystem`] via [`from_fn`]
//! - [`TimeStep`] — a validated, finite and nonzero step size

mod system;
mod time_step;
mod vector_space;

pub use system::{DynamicalSystem, FnSystem, StateOf, from_fn};
pub use time_step::{TimeStep, TimeStepError};
pub use vector_space::VectorSpace;
