//! Packed exponent vectors with overflow guard bits.
//!
//! A monomial stores one exponent per `u64` cell with the top bit of every
//! cell reserved as an overflow sentinel. Any operation that would set a
//! guard bit fails with [`PolyError::Overflow`] instead of wrapping, so a
//! silently-wrong exponent vector can never be constructed.

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::error::PolyError;

/// The reserved high bit of every exponent cell.
pub const GUARD_BIT: u64 = 1 << 63;

/// The largest representable exponent.
pub const MAX_EXPONENT: u64 = GUARD_BIT - 1;

/// A packed exponent vector, one cell per ring variable.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Monomial {
    exps: SmallVec<[u64; 4]>,
}

impl Monomial {
    /// Creates the monomial 1 (all exponents zero).
    #[must_use]
    pub fn one(nvars: usize) -> Self {
        Self {
            exps: SmallVec::from_elem(0, nvars),
        }
    }

    /// Creates the monomial x_i.
    ///
    /// # Panics
    ///
    /// Panics if `i >= nvars`.
    #[must_use]
    pub fn var(i: usize, nvars: usize) -> Self {
        assert!(i < nvars);
        let mut exps = SmallVec::from_elem(0u64, nvars);
        exps[i] = 1;
        Self { exps }
    }

    /// Creates a monomial from an exponent slice.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::Overflow`] if any exponent has the guard bit
    /// set.
    pub fn from_exponents(exps: &[u64]) -> Result<Self, PolyError> {
        if exps.iter().any(|&e| e & GUARD_BIT != 0) {
            return Err(PolyError::Overflow);
        }
        Ok(Self {
            exps: SmallVec::from_slice(exps),
        })
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn nvars(&self) -> usize {
        self.exps.len()
    }

    /// Returns the exponent of variable i.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[must_use]
    pub fn exponent(&self, i: usize) -> u64 {
        self.exps[i]
    }

    /// Returns all exponents.
    #[must_use]
    pub fn exponents(&self) -> &[u64] {
        &self.exps
    }

    /// Returns true if all exponents are zero.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.exps.iter().all(|&e| e == 0)
    }

    /// Multiplies two monomials (adds exponents cell-wise).
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::Overflow`] if any sum sets a guard bit.
    pub fn mul(&self, other: &Self) -> Result<Self, PolyError> {
        debug_assert_eq!(self.exps.len(), other.exps.len());
        let mut exps = SmallVec::with_capacity(self.exps.len());
        for (&a, &b) in self.exps.iter().zip(&other.exps) {
            // Both operands have the guard bit clear, so the sum fits in
            // the cell; the guard bit is set exactly on overflow.
            let sum = a + b;
            if sum & GUARD_BIT != 0 {
                return Err(PolyError::Overflow);
            }
            exps.push(sum);
        }
        Ok(Self { exps })
    }

    /// Divides by another monomial if every exponent divides.
    ///
    /// Returns `Some(quotient)` if `other` divides `self`.
    #[must_use]
    pub fn div(&self, other: &Self) -> Option<Self> {
        debug_assert_eq!(self.exps.len(), other.exps.len());
        let mut exps = SmallVec::with_capacity(self.exps.len());
        for (&a, &b) in self.exps.iter().zip(&other.exps) {
            if a < b {
                return None;
            }
            exps.push(a - b);
        }
        Some(Self { exps })
    }

    /// Returns true if `self` divides `other`.
    #[must_use]
    pub fn divides(&self, other: &Self) -> bool {
        self.exps.iter().zip(&other.exps).all(|(&a, &b)| a <= b)
    }

    /// Computes the total degree.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::Overflow`] if the sum leaves the representable
    /// range.
    pub fn total_degree(&self) -> Result<u64, PolyError> {
        let wide = self.total_degree_wide();
        if wide > u128::from(MAX_EXPONENT) {
            return Err(PolyError::Overflow);
        }
        #[allow(clippy::cast_possible_truncation)]
        Ok(wide as u64)
    }

    /// Total degree in a width that cannot overflow.
    ///
    /// Used by the degree comparators, which must stay infallible.
    pub(crate) fn total_degree_wide(&self) -> u128 {
        self.exps.iter().map(|&e| u128::from(e)).sum()
    }

    /// Returns a copy with the exponent of variable `i` replaced.
    ///
    /// `e` must not have the guard bit set.
    pub(crate) fn with_exponent(&self, i: usize, e: u64) -> Self {
        debug_assert_eq!(e & GUARD_BIT, 0);
        let mut exps = self.exps.clone();
        exps[i] = e;
        Self { exps }
    }
}

/// Compares two monomials lexicographically.
///
/// # Panics
///
/// Panics if the exponent vectors have different lengths.
pub fn cmp_lex(a: &Monomial, b: &Monomial) -> Ordering {
    assert_eq!(a.nvars(), b.nvars());
    for (&x, &y) in a.exponents().iter().zip(b.exponents()) {
        match x.cmp(&y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Compares two monomials by degree, then lexicographically.
///
/// # Panics
///
/// Panics if the exponent vectors have different lengths.
pub fn cmp_deglex(a: &Monomial, b: &Monomial) -> Ordering {
    match a.total_degree_wide().cmp(&b.total_degree_wide()) {
        Ordering::Equal => cmp_lex(a, b),
        ord => ord,
    }
}

/// Compares two monomials by degree, then reverse lexicographically with
/// the sign flipped (last variable first, smaller exponent wins the tie).
///
/// # Panics
///
/// Panics if the exponent vectors have different lengths.
pub fn cmp_degrevlex(a: &Monomial, b: &Monomial) -> Ordering {
    assert_eq!(a.nvars(), b.nvars());
    match a.total_degree_wide().cmp(&b.total_degree_wide()) {
        Ordering::Equal => {}
        ord => return ord,
    }

    for i in (0..a.nvars()).rev() {
        match b.exponent(i).cmp(&a.exponent(i)) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}
