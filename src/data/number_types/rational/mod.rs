//! # Rational numbers
//!
//! Fixed width fractions that are always stored in canonical form.
pub use fraction::Fraction;

mod fraction;
mod interop;
mod macros;
mod ops;
mod with_primitive;

/// Read access to the parts of a rational number.
pub trait Rational {
    type Numerator;
    type Denominator;

    fn numerator(&self) -> &Self::Numerator;
    fn denominator(&self) -> &Self::Denominator;
}
