//! # Interactions with fixed size integers
//!
//! Only types that convert losslessly into `i32` are supported.
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::data::number_types::rational::{Fraction, Rational};

macro_rules! define_creation {
    ($t:ty) => {
        impl From<$t> for Fraction {
            fn from(value: $t) -> Self {
                Self::from(i32::from(value))
            }
        }
    }
}

define_creation!(i8);
define_creation!(i16);
define_creation!(u8);
define_creation!(u16);

macro_rules! define_interactions {
    ($t:ty) => {
        impl PartialEq<$t> for Fraction {
            fn eq(&self, other: &$t) -> bool {
                self.is_integer() && *self.numerator() == i32::from(*other)
            }
        }

        impl Add<$t> for Fraction {
            type Output = Self;

            fn add(self, rhs: $t) -> Self::Output {
                self + Fraction::from(i32::from(rhs))
            }
        }

        impl AddAssign<$t> for Fraction {
            fn add_assign(&mut self, rhs: $t) {
                *self = *self + rhs;
            }
        }

        impl Sub<$t> for Fraction {
            type Output = Self;

            fn sub(self, rhs: $t) -> Self::Output {
                self - Fraction::from(i32::from(rhs))
            }
        }

        impl SubAssign<$t> for Fraction {
            fn sub_assign(&mut self, rhs: $t) {
                *self = *self - rhs;
            }
        }

        impl Mul<$t> for Fraction {
            type Output = Self;

            fn mul(self, rhs: $t) -> Self::Output {
                self * Fraction::from(i32::from(rhs))
            }
        }

        impl MulAssign<$t> for Fraction {
            fn mul_assign(&mut self, rhs: $t) {
                *self = *self * rhs;
            }
        }

        impl Div<$t> for Fraction {
            type Output = Self;

            /// # Panics
            ///
            /// When `rhs` is zero.
            fn div(self, rhs: $t) -> Self::Output {
                self / Fraction::from(i32::from(rhs))
            }
        }

        impl DivAssign<$t> for Fraction {
            fn div_assign(&mut self, rhs: $t) {
                *self = *self / rhs;
            }
        }
    }
}

define_interactions!(i8);
define_interactions!(i16);
define_interactions!(i32);
define_interactions!(u8);
define_interactions!(u16);
