//! # Exact fractions
//!
//! Rational numbers over `i32` that are kept in lowest terms with a positive denominator. Every
//! operation produces a new, reduced value; nothing is ever mutated in place.
//!
//! ```
//! use numbers::{Fraction, Rational};
//!
//! let value = Fraction::new(117_936, 15_288)?;
//! assert_eq!((*value.numerator(), *value.denominator()), (54, 7));
//! assert_eq!(value.to_integer(), 7);
//! assert_eq!(value.to_string(), "7.714285714285714");
//! # Ok::<(), numbers::ArithmeticError>(())
//! ```
pub use data::number_types::integer::gcd::gcd;
pub use data::number_types::rational::Fraction;
pub use data::number_types::rational::Rational;
pub use data::number_types::traits::gcd::WrappingGcd;
pub use error::{ArithmeticError, Result};

pub mod data;
pub mod error;
