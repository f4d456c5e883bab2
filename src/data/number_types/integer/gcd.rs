//! # Greatest common divisor
use crate::data::number_types::traits::gcd::WrappingGcd;

macro_rules! impl_wrapping_gcd {
    ($t:ident) => {
        impl WrappingGcd for $t {
            fn wrapping_gcd(self, other: Self) -> Self {
                let (mut left, mut right) = (self.wrapping_abs(), other.wrapping_abs());
                // Operands are non-negative here, apart from a wrapped `MIN`
                while right != 0 {
                    let remainder = left.wrapping_rem(right);
                    left = right;
                    right = remainder;
                }

                left
            }
        }
    }
}

impl_wrapping_gcd!(i8);
impl_wrapping_gcd!(i16);
impl_wrapping_gcd!(i32);
impl_wrapping_gcd!(i64);
impl_wrapping_gcd!(i128);
impl_wrapping_gcd!(isize);

/// Computes the (non-negative) greatest common divisor of two integers.
///
/// ```
/// assert_eq!(numbers::gcd(-117_936, 15_288), 2184);
/// assert_eq!(numbers::gcd(0, 0), 0);
/// ```
pub fn gcd(left: i32, right: i32) -> i32 {
    left.wrapping_gcd(right)
}
