//! # Fractions of two `i32` values
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::{debug, trace};

use crate::data::number_types::rational::Rational;
use crate::data::number_types::traits::gcd::WrappingGcd;
use crate::error::{ArithmeticError, Result};

/// An immutable fraction of two integers, kept in lowest terms.
///
/// The denominator is positive and coprime with the numerator, and zero is stored as `0/1`. This
/// form is unique for each value, so equality and hashing only look at the fields.
///
/// Arithmetic widens to `i64` and truncates back to `i32` before reducing, so results that don't
/// fit wrap around. The `Checked*` implementations from `num` detect this instead.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(i32, i32)", into = "(i32, i32)"))]
pub struct Fraction {
    numerator: i32,
    /// Positive, unless constructed from values near `i32::MIN` that wrapped around.
    denominator: i32,
}

impl Fraction {
    /// The value zero, `0/1`.
    pub const ZERO: Self = Self { numerator: 0, denominator: 1 };
    /// The value one, `1/1`.
    pub const ONE: Self = Self { numerator: 1, denominator: 1 };

    /// Creates a fraction and reduces it to lowest terms.
    ///
    /// The sign of the denominator is moved to the numerator.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::ZeroDenominator`] if `denominator` is zero.
    ///
    /// ```
    /// use numbers::{ArithmeticError, Fraction};
    ///
    /// assert_eq!(Fraction::new(15_288, -117_936), Fraction::new(-7, 54));
    /// assert_eq!(Fraction::new(51, 0), Err(ArithmeticError::ZeroDenominator));
    /// ```
    pub fn new(numerator: i32, denominator: i32) -> Result<Self> {
        if denominator == 0 {
            debug!(numerator = numerator, "rejecting a fraction with a zero denominator");
            return Err(ArithmeticError::ZeroDenominator);
        }

        // Nonzero, because the denominator is
        let gcd = numerator.wrapping_gcd(denominator);
        let sign = denominator.signum();

        Ok(Self {
            numerator: sign.wrapping_mul(numerator).wrapping_div(gcd),
            denominator: sign.wrapping_mul(denominator).wrapping_div(gcd),
        })
    }

    /// Narrow the intermediate results of widened arithmetic and reduce them.
    ///
    /// # Panics
    ///
    /// If the truncated denominator is zero, which can only happen after overflow.
    pub(crate) fn from_widened(numerator: i64, denominator: i64) -> Self {
        match Self::new(numerator as i32, denominator as i32) {
            Ok(fraction) => fraction,
            Err(error) => panic!("fraction arithmetic overflowed: {}", error),
        }
    }

    /// Reduce the intermediate results of widened arithmetic before narrowing them.
    ///
    /// Returns `None` when the denominator is zero or when the reduced value doesn't fit.
    pub(crate) fn checked_from_widened(numerator: i64, denominator: i64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }

        let gcd = numerator.wrapping_gcd(denominator);
        let sign = denominator.signum();
        let (wide_numerator, wide_denominator) = (sign * numerator / gcd, sign * denominator / gcd);

        match (i32::try_from(wide_numerator), i32::try_from(wide_denominator)) {
            (Ok(numerator), Ok(denominator)) => Some(Self { numerator, denominator }),
            _ => {
                trace!(
                    numerator = wide_numerator,
                    denominator = wide_denominator,
                    "reduced fraction does not fit in 32 bits"
                );
                None
            }
        }
    }

    /// The multiplicative inverse.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::ZeroInversion`] if this is zero.
    pub fn invert(self) -> Result<Self> {
        if self.numerator == 0 {
            debug!("rejecting the inversion of zero");
            return Err(ArithmeticError::ZeroInversion);
        }

        Self::new(self.denominator, self.numerator)
    }

    /// Division that reports a zero divisor instead of panicking like the `/` operator.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::ZeroInversion`] if `rhs` is zero.
    pub fn try_div(self, rhs: Self) -> Result<Self> {
        Ok(self * rhs.invert()?)
    }

    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// Integer division of numerator by denominator, truncating towards zero.
    pub fn to_integer(&self) -> i32 {
        self.numerator.wrapping_div(self.denominator)
    }

    pub fn to_long(&self) -> i64 {
        i64::from(self.to_integer())
    }

    pub fn to_double(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }

    /// Rounds the `f64` value to the nearest `f32`.
    pub fn to_float(&self) -> f32 {
        self.to_double() as f32
    }

    /// Combination of both fields with the multiplier `31`.
    ///
    /// Equal fractions have equal hash codes, and this is the value that [`Hash`] writes.
    pub fn hash_code(&self) -> i32 {
        31_i32
            .wrapping_mul(31_i32.wrapping_add(self.numerator))
            .wrapping_add(self.denominator)
    }
}

impl Rational for Fraction {
    type Numerator = i32;
    type Denominator = i32;

    fn numerator(&self) -> &Self::Numerator {
        &self.numerator
    }

    fn denominator(&self) -> &Self::Denominator {
        &self.denominator
    }
}

impl From<i32> for Fraction {
    fn from(value: i32) -> Self {
        Self { numerator: value, denominator: 1 }
    }
}

impl From<&i32> for Fraction {
    fn from(value: &i32) -> Self {
        Self::from(*value)
    }
}

impl TryFrom<(i32, i32)> for Fraction {
    type Error = ArithmeticError;

    fn try_from((numerator, denominator): (i32, i32)) -> Result<Self> {
        Self::new(numerator, denominator)
    }
}

impl From<Fraction> for (i32, i32) {
    fn from(value: Fraction) -> Self {
        (value.numerator, value.denominator)
    }
}

impl From<Fraction> for f64 {
    fn from(value: Fraction) -> Self {
        value.to_double()
    }
}

impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // Both denominators are positive, so cross multiplying keeps the direction
        let left = i64::from(self.numerator) * i64::from(other.denominator);
        let right = i64::from(other.numerator) * i64::from(self.denominator);

        left.cmp(&right)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}", self.to_double())
        }
    }
}
