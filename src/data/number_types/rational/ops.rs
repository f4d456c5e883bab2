//! # Field operations
//!
//! The operators follow the fixed width semantics: intermediate values are computed in `i64` and
//! truncated back to `i32` before the result is reduced. The `Checked*` traits reduce first and
//! only give up when the reduced value doesn't fit.
use std::convert::TryFrom;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, One, ToPrimitive, Zero};

use crate::data::number_types::rational::{Fraction, Rational};

fn widen(value: &Fraction) -> (i64, i64) {
    (i64::from(*value.numerator()), i64::from(*value.denominator()))
}

impl Add for Fraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let (numerator, denominator) = widen(&self);
        let (rhs_numerator, rhs_denominator) = widen(&rhs);

        Self::from_widened(
            numerator * rhs_denominator + rhs_numerator * denominator,
            denominator * rhs_denominator,
        )
    }
}

impl Sub for Fraction {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let (numerator, denominator) = widen(&self);
        Self::from_widened(-numerator, denominator)
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl Mul for Fraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let (numerator, denominator) = widen(&self);
        let (rhs_numerator, rhs_denominator) = widen(&rhs);

        Self::from_widened(numerator * rhs_numerator, denominator * rhs_denominator)
    }
}

impl Div for Fraction {
    type Output = Self;

    /// # Panics
    ///
    /// When dividing by zero. Use [`Fraction::try_div`] to get an error instead.
    fn div(self, rhs: Self) -> Self::Output {
        match self.try_div(rhs) {
            Ok(quotient) => quotient,
            Err(error) => panic!("{}", error),
        }
    }
}

macro_rules! forward_references {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident) => {
        impl $imp<&Fraction> for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: &Fraction) -> Self::Output {
                $imp::$method(self, *rhs)
            }
        }

        impl $imp<Fraction> for &Fraction {
            type Output = Fraction;

            fn $method(self, rhs: Fraction) -> Self::Output {
                $imp::$method(*self, rhs)
            }
        }

        impl $imp<&Fraction> for &Fraction {
            type Output = Fraction;

            fn $method(self, rhs: &Fraction) -> Self::Output {
                $imp::$method(*self, *rhs)
            }
        }

        impl $assign_imp for Fraction {
            fn $assign_method(&mut self, rhs: Fraction) {
                *self = $imp::$method(*self, rhs);
            }
        }

        impl $assign_imp<&Fraction> for Fraction {
            fn $assign_method(&mut self, rhs: &Fraction) {
                *self = $imp::$method(*self, *rhs);
            }
        }
    }
}

forward_references!(Add, add, AddAssign, add_assign);
forward_references!(Sub, sub, SubAssign, sub_assign);
forward_references!(Mul, mul, MulAssign, mul_assign);
forward_references!(Div, div, DivAssign, div_assign);

impl CheckedAdd for Fraction {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        let (numerator, denominator) = widen(self);
        let (rhs_numerator, rhs_denominator) = widen(v);

        Self::checked_from_widened(
            numerator * rhs_denominator + rhs_numerator * denominator,
            denominator * rhs_denominator,
        )
    }
}

impl CheckedSub for Fraction {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        let (numerator, denominator) = widen(self);
        let (rhs_numerator, rhs_denominator) = widen(v);

        Self::checked_from_widened(
            numerator * rhs_denominator - rhs_numerator * denominator,
            denominator * rhs_denominator,
        )
    }
}

impl CheckedMul for Fraction {
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        let (numerator, denominator) = widen(self);
        let (rhs_numerator, rhs_denominator) = widen(v);

        Self::checked_from_widened(numerator * rhs_numerator, denominator * rhs_denominator)
    }
}

impl CheckedDiv for Fraction {
    /// `None` for a zero divisor, as well as when the quotient doesn't fit.
    fn checked_div(&self, v: &Self) -> Option<Self> {
        let (numerator, denominator) = widen(self);
        let (rhs_numerator, rhs_denominator) = widen(v);

        Self::checked_from_widened(numerator * rhs_denominator, denominator * rhs_numerator)
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        *self.numerator() == 0
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self::ONE
    }
}

impl ToPrimitive for Fraction {
    fn to_i64(&self) -> Option<i64> {
        Some(self.to_long())
    }

    /// `None` if the truncated value is negative.
    fn to_u64(&self) -> Option<u64> {
        u64::try_from(self.to_long()).ok()
    }

    fn to_f32(&self) -> Option<f32> {
        Some(self.to_float())
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.to_double())
    }
}

impl Sum for Fraction {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Fraction> for Fraction {
    fn sum<I: Iterator<Item = &'a Fraction>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl Product for Fraction {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, Mul::mul)
    }
}

impl<'a> Product<&'a Fraction> for Fraction {
    fn product<I: Iterator<Item = &'a Fraction>>(iter: I) -> Self {
        iter.fold(Self::ONE, Mul::mul)
    }
}
