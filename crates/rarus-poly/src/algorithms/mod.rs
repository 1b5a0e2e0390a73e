//! Polynomial algorithms.

pub mod gcd;
pub(crate) mod geobucket;
