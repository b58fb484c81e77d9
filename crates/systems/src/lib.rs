//! Concrete dynamical systems for odestep.
//!
//! - [`oscillator`] — damped harmonic oscillator with a closed-form solution
//! - [`exponential`] — the scalar linear system `dy/dt = rate * y`
//!
//! Both systems validate their parameters on construction and report
//! violations as a [`ParameterError`].

mod error;

pub mod exponential;
pub mod oscillator;

pub use error::ParameterError;
pub use exponential::ExponentialSystem;
pub use oscillator::{DampedOscillator, OscillatorState, Regime};
