//! # Integers
pub mod gcd;
