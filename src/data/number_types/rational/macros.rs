/// Shorthand to create a `Fraction` from literals.
///
/// A single argument creates an integer value. With two arguments the macro panics when the
/// denominator is zero.
///
/// ```
/// use numbers::{F, Fraction};
///
/// assert_eq!(F!(3), Fraction::from(3));
/// assert_eq!(F!(6, -4), Fraction::new(-3, 2).unwrap());
/// ```
#[macro_export]
macro_rules! F {
    ($value:expr) => {
        $crate::Fraction::from($value)
    };
    ($numerator:expr, $denominator:expr) => {
        match $crate::Fraction::new($numerator, $denominator) {
            Ok(value) => value,
            Err(error) => panic!("invalid fraction literal: {}", error),
        }
    };
}
