//! A damped harmonic oscillator.
//!
//! Uses the standard form of the universal oscillator equation,
//!
//! ```text
//! x'' + 2 ζ ω x' + ω² x = 0
//! ```
//!
//! written as a first-order system in position and velocity. The oscillator is
//! undriven, so its derivatives do not depend on time.

use odestep_core::{DynamicalSystem, VectorSpace};

use crate::ParameterError;

/// Position and velocity of a one-dimensional oscillator.
///
/// The time derivative of a state is also an `OscillatorState`: its
/// `position` field holds the velocity and its `velocity` field holds the
/// acceleration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct OscillatorState {
    pub position: f64,
    pub velocity: f64,
}

impl OscillatorState {
    /// Creates a state from a position and velocity.
    #[must_use]
    pub const fn new(position: f64, velocity: f64) -> Self {
        Self { position, velocity }
    }

    /// Sets the position.
    #[must_use]
    pub fn position(mut self, position: f64) -> Self {
        self.position = position;
        self
    }

    /// Sets the velocity.
    #[must_use]
    pub fn velocity(mut self, velocity: f64) -> Self {
        self.velocity = velocity;
        self
    }
}

/// Unit displacement, at rest.
impl Default for OscillatorState {
    fn default() -> Self {
        Self::new(1.0, 0.0)
    }
}

impl VectorSpace for OscillatorState {
    fn add(&self, other: &Self) -> Self {
        Self {
            position: self.position + other.position,
            velocity: self.velocity + other.velocity,
        }
    }

    fn scale(&self, factor: f64) -> Self {
        debug_assert!(factor.is_finite(), "scale factor must be finite, got {factor}");
        Self {
            position: self.position * factor,
            velocity: self.velocity * factor,
        }
    }
}

/// Damping regime, determined by the damping ratio `ζ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// `ζ = 0`: oscillates forever at the natural frequency.
    Undamped,

    /// `0 < ζ < 1`: oscillates with an exponentially decaying envelope.
    Underdamped,

    /// `ζ = 1`: returns to rest as fast as possible without oscillating.
    CriticallyDamped,

    /// `ζ > 1`: returns to rest slowly without oscillating.
    Overdamped,
}

/// A damped harmonic oscillator.
///
/// Parameterized by its natural frequency `ω` (rad/s) and dimensionless
/// damping ratio `ζ`. The default oscillator has `ω = 1` and `ζ = 0.1`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Parameters")
)]
pub struct DampedOscillator {
    omega: f64,
    zeta: f64,
}

impl DampedOscillator {
    /// Creates an oscillator with validated parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Frequency`] if `omega` is not finite and
    /// positive, or [`ParameterError::Damping`] if `zeta` is not finite and
    /// non-negative.
    pub fn new(omega: f64, zeta: f64) -> Result<Self, ParameterError> {
        if !omega.is_finite() || omega <= 0.0 {
            return Err(ParameterError::Frequency(omega));
        }
        if !zeta.is_finite() || zeta < 0.0 {
            return Err(ParameterError::Damping(zeta));
        }
        Ok(Self { omega, zeta })
    }

    /// Creates an oscillator without damping.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Frequency`] if `omega` is not finite and
    /// positive.
    pub fn undamped(omega: f64) -> Result<Self, ParameterError> {
        Self::new(omega, 0.0)
    }

    /// Returns the natural frequency `ω`.
    #[must_use]
    pub fn omega(&self) -> f64 {
        self.omega
    }

    /// Returns the damping ratio `ζ`.
    #[must_use]
    pub fn zeta(&self) -> f64 {
        self.zeta
    }

    /// Returns the damping regime.
    #[must_use]
    pub fn regime(&self) -> Regime {
        match self.zeta {
            z if z == 0.0 => Regime::Undamped,
            z if z < 1.0 => Regime::Underdamped,
            z if z == 1.0 => Regime::CriticallyDamped,
            _ => Regime::Overdamped,
        }
    }

    /// Returns the total energy per unit mass, `½v² + ½ω²x²`.
    #[must_use]
    pub fn energy(&self, state: &OscillatorState) -> f64 {
        let OscillatorState { position, velocity } = *state;
        0.5 * velocity * velocity + 0.5 * self.omega * self.omega * position * position
    }

    /// Returns the closed-form state at time `t` starting from `initial` at
    /// time zero.
    #[must_use]
    pub fn exact(&self, initial: &OscillatorState, t: f64) -> OscillatorState {
        let OscillatorState {
            position: x0,
            velocity: v0,
        } = *initial;
        let (omega, zeta) = (self.omega, self.zeta);

        match self.regime() {
            Regime::Undamped | Regime::Underdamped => {
                let sigma = zeta * omega;
                let omega_d = omega * (1.0 - zeta * zeta).sqrt();
                let a = x0;
                let b = (v0 + sigma * x0) / omega_d;
                let envelope = (-sigma * t).exp();
                let (sin, cos) = (omega_d * t).sin_cos();

                OscillatorState {
                    position: envelope * (a * cos + b * sin),
                    velocity: envelope
                        * ((b * omega_d - sigma * a) * cos - (a * omega_d + sigma * b) * sin),
                }
            }
            Regime::CriticallyDamped => {
                let a = x0;
                let b = v0 + omega * x0;
                let envelope = (-omega * t).exp();

                OscillatorState {
                    position: (a + b * t) * envelope,
                    velocity: (b - omega * (a + b * t)) * envelope,
                }
            }
            Regime::Overdamped => {
                let root = omega * (zeta * zeta - 1.0).sqrt();
                let r1 = -zeta * omega + root;
                let r2 = -zeta * omega - root;
                let c1 = (v0 - r2 * x0) / (r1 - r2);
                let c2 = x0 - c1;
                let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());

                OscillatorState {
                    position: c1 * e1 + c2 * e2,
                    velocity: r1 * c1 * e1 + r2 * c2 * e2,
                }
            }
        }
    }
}

impl Default for DampedOscillator {
    fn default() -> Self {
        Self {
            omega: 1.0,
            zeta: 0.1,
        }
    }
}

impl DynamicalSystem for DampedOscillator {
    type State = OscillatorState;

    /// Computes velocity and acceleration from position and velocity.
    fn derivatives(&self, state: &OscillatorState, _time: f64) -> OscillatorState {
        let OscillatorState { position, velocity } = *state;

        OscillatorState {
            position: velocity,
            velocity: -2.0 * self.zeta * self.omega * velocity - self.omega * self.omega * position,
        }
    }
}

/// Unvalidated oscillator parameters, as read from configuration.
#[cfg(feature = "serde-derive")]
#[derive(serde::Deserialize)]
struct Parameters {
    omega: f64,
    zeta: f64,
}

#[cfg(feature = "serde-derive")]
impl TryFrom<Parameters> for DampedOscillator {
    type Error = ParameterError;

    fn try_from(parameters: Parameters) -> Result<Self, Self::Error> {
        Self::new(parameters.omega, parameters.zeta)
    }
}
