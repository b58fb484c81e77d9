use thiserror::Error;

/// Errors that can occur when validating system parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParameterError {
    #[error("natural frequency must be finite and positive, got {0}")]
    Frequency(f64),

    #[error("damping ratio must be finite and non-negative, got {0}")]
    Damping(f64),

    #[error("growth rate must be finite, got {0}")]
    Rate(f64),
}
