//! Monomial orderings.
//!
//! The ordering is fixed per polynomial ring at construction time. All
//! three orderings are total orders compatible with monomial
//! multiplication, which is what keeps merge-based arithmetic canonical.

use std::cmp::Ordering;

use crate::monomial::{cmp_deglex, cmp_degrevlex, cmp_lex, Monomial};

/// A monomial ordering.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MonomialOrder {
    /// Lexicographic order.
    ///
    /// x > y > z means x^a y^b z^c > x^d y^e z^f iff the first nonzero
    /// difference (a-d, b-e, c-f) is positive.
    Lex,

    /// Degree lexicographic order.
    ///
    /// First compares total degree, then uses lex as tiebreaker.
    DegLex,

    /// Degree reverse lexicographic order.
    ///
    /// First compares total degree, then compares from the last variable
    /// backwards with the comparison reversed.
    #[default]
    DegRevLex,
}

impl MonomialOrder {
    /// Compares two monomials according to this ordering.
    ///
    /// # Panics
    ///
    /// Panics if the exponent vectors have different lengths.
    #[must_use]
    pub fn compare(&self, a: &Monomial, b: &Monomial) -> Ordering {
        match self {
            MonomialOrder::Lex => cmp_lex(a, b),
            MonomialOrder::DegLex => cmp_deglex(a, b),
            MonomialOrder::DegRevLex => cmp_degrevlex(a, b),
        }
    }

    /// Returns a short name for the ordering.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            MonomialOrder::Lex => "lex",
            MonomialOrder::DegLex => "deglex",
            MonomialOrder::DegRevLex => "degrevlex",
        }
    }
}

impl std::fmt::Display for MonomialOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
