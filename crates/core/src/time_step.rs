use std::fmt;

use thiserror::Error;

/// A finite, nonzero step size used to advance an integration.
///
/// `TimeStep` wraps an `f64` while enforcing that it is a real number other
/// than zero. The sign selects the direction: positive steps integrate forward
/// in time and negative steps integrate backward.
///
/// Step functions take a `TimeStep` rather than a raw `f64`, so an invalid
/// step size is rejected once, at construction, instead of producing NaN
/// states deep inside an integration.
///
/// # Example
///
/// ```
/// use odestep_core::{TimeStep, TimeStepError};
///
/// let dt = TimeStep::new(0.01)?;
/// assert_eq!(dt.value(), 0.01);
///
/// assert_eq!(TimeStep::new(0.0), Err(TimeStepError::Zero));
/// # Ok::<(), TimeStepError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct TimeStep(f64);

/// Error type returned when constructing an invalid [`TimeStep`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TimeStepError {
    #[error("time step must be finite, got {0}")]
    NotFinite(f64),

    #[error("time step must be nonzero")]
    Zero,
}

impl TimeStep {
    /// Constructs a `TimeStep` from a step size.
    ///
    /// # Errors
    ///
    /// Returns [`TimeStepError::NotFinite`] if `dt` is NaN or infinite, and
    /// [`TimeStepError::Zero`] if `dt` is zero.
    pub fn new(dt: f64) -> Result<Self, TimeStepError> {
        if !dt.is_finite() {
            return Err(TimeStepError::NotFinite(dt));
        }
        if dt == 0.0 {
            return Err(TimeStepError::Zero);
        }
        Ok(Self(dt))
    }

    /// Returns the step size.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns half the step size.
    #[must_use]
    pub fn half(self) -> f64 {
        self.0 / 2.0
    }

    /// Returns `true` if this step integrates forward in time.
    #[must_use]
    pub fn is_forward(self) -> bool {
        self.0 > 0.0
    }
}

impl TryFrom<f64> for TimeStep {
    type Error = TimeStepError;

    fn try_from(dt: f64) -> Result<Self, Self::Error> {
        Self::new(dt)
    }
}

impl From<TimeStep> for f64 {
    fn from(dt: TimeStep) -> Self {
        dt.0
    }
}

impl fmt::Display for TimeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
