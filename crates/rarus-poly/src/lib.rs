//! # rarus-poly
//!
//! Sparse distributed multivariate polynomial arithmetic over generic
//! coefficient rings.
//!
//! This crate provides:
//! - Guard-bit-checked packed exponent vectors ([`Monomial`])
//! - The three classical monomial orderings ([`MonomialOrder`])
//! - Parent polynomial rings with optional construction caching
//! - Merge-based arithmetic preserving canonical term order
//! - Leading-term extraction, deflation/inflation, evaluation
//!   (including into noncommutative targets), univariate conversion
//! - Content-based multivariate gcd and lcm
//!
//! ## Invariants
//!
//! Every [`MPoly`] keeps its terms strictly descending under the parent
//! ring's monomial order, with no zero coefficients and no duplicate
//! monomials; the zero polynomial is the empty term sequence. All
//! operations produce new values; nothing is mutated in place.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod deflation;
pub mod error;
pub mod evaluate;
pub mod monomial;
pub mod mpoly;
pub mod ordering;
pub mod ring;
pub mod univariate;

#[cfg(test)]
mod proptests;

pub use algorithms::gcd::{content, exact_div, gcd, lcm, normalize, primitive_part};
pub use error::PolyError;
pub use monomial::Monomial;
pub use mpoly::MPoly;
pub use ordering::MonomialOrder;
pub use ring::{MPolyRing, RingCache};
