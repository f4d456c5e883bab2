/// Greatest common divisor of two signed integers in two's complement.
pub trait WrappingGcd: Sized {
    /// Euclidean reduction on the absolute values of both operands.
    ///
    /// The result is non-negative unless one of the operands is `MIN`: its absolute value wraps
    /// around to `MIN` itself, and the negative remainders that follow can leak into the result.
    fn wrapping_gcd(self, other: Self) -> Self;
}
