//! Error types for exposure math.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = DomainError> = std::result::Result<T, E>;

/// An input outside the domain of the photometric formulas.
///
/// Raised as soon as a logarithm, square root, or division would receive an
/// invalid operand. The core never recovers from these; callers decide how to
/// present them.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("argument to logarithm must be positive (got {0})")]
    NonPositiveLogarithm(f64),

    #[error("argument to square root must be non-negative (got {0})")]
    NegativeSquareRoot(f64),

    #[error("{quantity} must be positive (got {value})")]
    NonPositive { quantity: &'static str, value: f64 },
}

/// Failures of the any-two-of-three exposure solver.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SolveError {
    #[error("enter any two of: aperture, shutter, EV100 (got {known})")]
    NotEnoughInputs { known: usize },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// `log2` that refuses non-positive (and NaN) arguments.
pub(crate) fn checked_log2(x: f64) -> Result<f64> {
    if x > 0.0 {
        Ok(x.log2())
    } else {
        Err(DomainError::NonPositiveLogarithm(x))
    }
}

/// `sqrt` that refuses negative (and NaN) arguments.
pub(crate) fn checked_sqrt(x: f64) -> Result<f64> {
    if x >= 0.0 {
        Ok(x.sqrt())
    } else {
        Err(DomainError::NegativeSquareRoot(x))
    }
}

/// `1 / x`, failing on an exact zero divisor.
pub(crate) fn checked_recip(x: f64) -> Result<f64> {
    if x == 0.0 {
        Err(DomainError::DivisionByZero)
    } else {
        Ok(1.0 / x)
    }
}

pub(crate) fn require_positive(quantity: &'static str, value: f64) -> Result<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(DomainError::NonPositive { quantity, value })
    }
}
