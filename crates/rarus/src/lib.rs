//! # Rarus
//!
//! A sparse distributed multivariate polynomial engine.
//!
//! Polynomials are kept as term lists sorted strictly descending under
//! a per-ring monomial ordering, with packed guard-bit-checked
//! exponent vectors, over pluggable coefficient rings.
//!
//! ## Quick Start
//!
//! ```rust
//! use rarus::prelude::*;
//!
//! let ring = MPolyRing::<Integer>::new(["x", "y"], MonomialOrder::DegLex);
//! let x = ring.gen(0).unwrap();
//! let y = ring.gen(1).unwrap();
//!
//! let f = x.mul(&y).unwrap().scale(&Integer::from(2)).add(&y.pow(3).unwrap());
//! assert_eq!(f.to_string(), "y^3 + 2*x*y");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use rarus_poly as poly;
pub use rarus_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use rarus_poly::{MPoly, MPolyRing, Monomial, MonomialOrder, PolyError, RingCache};
    pub use rarus_rings::{CommutativeRing, EvalTarget, Integer, Rational, Ring};
}
