pub mod gcd;
