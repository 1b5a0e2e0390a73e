//! # rarus-rings
//!
//! Coefficient rings for the rarus polynomial engine.
//!
//! This crate provides:
//! - The flat [`Ring`] capability trait consumed by the polynomial core
//! - Concrete implementations: arbitrary-precision [`Integer`] and [`Rational`]
//! - The [`EvalTarget`] capability for substitution targets, including
//!   possibly-noncommutative ones
//!
//! ## Design
//!
//! The polynomial engine is generic over a single flat trait rather than a
//! tower of algebraic marker traits. Everything the engine needs from a
//! coefficient ring (arithmetic, zero/one tests, content gcd, exact
//! division, unit normalization) lives on [`Ring`] directly.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integers;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use integers::Integer;
pub use rationals::Rational;
pub use traits::{CommutativeRing, EvalTarget, Ring};
