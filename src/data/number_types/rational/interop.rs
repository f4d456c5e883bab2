//! # Conversions to and from the `num` rationals
//!
//! Going to a `num` ratio is lossless; the widest target, `BigRational`, is the way out when
//! fixed width arithmetic would overflow.
use std::convert::TryFrom;

use num::rational::Ratio;
use num::{BigInt, BigRational};

use crate::data::number_types::rational::{Fraction, Rational};
use crate::error::{ArithmeticError, Result};

impl<T> Rational for Ratio<T> {
    type Numerator = T;
    type Denominator = T;

    fn numerator(&self) -> &Self::Numerator {
        self.numer()
    }

    fn denominator(&self) -> &Self::Denominator {
        self.denom()
    }
}

impl From<Fraction> for Ratio<i32> {
    fn from(value: Fraction) -> Self {
        // Already in lowest terms with a positive denominator
        Ratio::new_raw(*value.numerator(), *value.denominator())
    }
}

impl From<Fraction> for Ratio<i64> {
    fn from(value: Fraction) -> Self {
        Ratio::new(i64::from(*value.numerator()), i64::from(*value.denominator()))
    }
}

impl From<Fraction> for BigRational {
    fn from(value: Fraction) -> Self {
        BigRational::new(BigInt::from(*value.numerator()), BigInt::from(*value.denominator()))
    }
}

impl TryFrom<Ratio<i32>> for Fraction {
    type Error = ArithmeticError;

    fn try_from(value: Ratio<i32>) -> Result<Self> {
        Fraction::new(*value.numer(), *value.denom())
    }
}
