//! # Errors
use thiserror::Error;

/// The only way arithmetic on fractions can fail.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum ArithmeticError {
    #[error("denominator is zero")]
    ZeroDenominator,
    #[error("cannot invert zero")]
    ZeroInversion,
}

pub type Result<T> = std::result::Result<T, ArithmeticError>;
