//! Ring capability traits.
//!
//! This module defines the capability interface the polynomial engine
//! consumes. A coefficient ring is described by a single flat trait rather
//! than a class hierarchy: every operation the engine calls (arithmetic,
//! zero/one tests, content gcd, exact division, unit normalization) is a
//! method on [`Ring`].

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A commutative-ring capability with content/gcd support.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
/// - `gcd` is a greatest common divisor up to units; `gcd(0, 0) == 0`
/// - `exact_div(a, b)` returns `Some(q)` iff `q * b == a` has a solution
/// - `canonical_unit(x)` is a unit `u` such that `x / u` is the canonical
///   associate of `x` (e.g. the non-negative one over the integers)
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes a greatest common divisor.
    ///
    /// Used by the polynomial engine as its content gcd. Over a field the
    /// convention is `gcd(a, b) == 1` whenever either operand is nonzero.
    fn gcd(&self, other: &Self) -> Self;

    /// Divides exactly, returning `None` when `other` does not divide `self`.
    fn exact_div(&self, other: &Self) -> Option<Self>;

    /// Returns the canonical unit of this element.
    ///
    /// Dividing by the canonical unit of its leading coefficient brings a
    /// polynomial into canonical form: positive leading coefficient over the
    /// integers, monic over a field. The canonical unit of zero is one.
    fn canonical_unit(&self) -> Self {
        Self::one()
    }

    /// Computes self^n for non-negative n by binary exponentiation.
    fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// Marker trait asserting that multiplication is commutative.
///
/// Polynomial gcd and lcm are only available over commutative rings.
pub trait CommutativeRing: Ring {}

/// A substitution target for polynomial evaluation.
///
/// Any type with addition, multiplication and a multiplicative identity can
/// receive substituted values; multiplication need not be commutative.
/// Powering is repeated self-multiplication, which is well defined even in
/// the noncommutative case since a value always commutes with itself.
pub trait EvalTarget: Clone + Add<Output = Self> + Mul<Output = Self> {
    /// The multiplicative identity of the target.
    fn one() -> Self;

    /// Computes self^n by binary exponentiation.
    #[must_use]
    fn pow(&self, n: u64) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

impl<T: Ring> EvalTarget for T {
    fn one() -> Self {
        Ring::one()
    }
}
