//! # Number types
//!
//! Integer helpers and the fraction type built on them.
pub mod integer;
pub mod rational;
pub mod traits;
