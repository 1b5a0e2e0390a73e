//! Sparse distributed multivariate polynomials.
//!
//! An [`MPoly`] is an ordered term sequence: coefficients paired with
//! packed exponent vectors, sorted strictly descending under the parent
//! ring's monomial order, with no zero coefficients and no duplicate
//! monomials. The zero polynomial is the empty sequence. Every operation
//! returns a new value; existing polynomials are never mutated.

use std::sync::Arc;

use rarus_rings::Ring;

use crate::algorithms::geobucket;
use crate::error::PolyError;
use crate::monomial::Monomial;
use crate::ring::MPolyRing;

/// A sparse multivariate polynomial under a shared parent ring.
#[derive(Clone, Debug)]
pub struct MPoly<R: Ring> {
    ring: Arc<MPolyRing<R>>,
    terms: Vec<(Monomial, R)>,
}

impl<R: Ring> MPoly<R> {
    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero(ring: &Arc<MPolyRing<R>>) -> Self {
        Self {
            ring: Arc::clone(ring),
            terms: Vec::new(),
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one(ring: &Arc<MPolyRing<R>>) -> Self {
        Self::constant(ring, R::one())
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(ring: &Arc<MPolyRing<R>>, c: R) -> Self {
        if c.is_zero() {
            return Self::zero(ring);
        }
        Self {
            ring: Arc::clone(ring),
            terms: vec![(Monomial::one(ring.nvars()), c)],
        }
    }

    /// Creates a polynomial from (coefficient, exponent vector) pairs.
    ///
    /// Terms are sorted and combined; zero coefficients are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidArgument`] if an exponent vector does
    /// not have one entry per ring variable, or [`PolyError::Overflow`]
    /// if an exponent has the guard bit set.
    pub fn from_terms(
        ring: &Arc<MPolyRing<R>>,
        terms: impl IntoIterator<Item = (R, Vec<u64>)>,
    ) -> Result<Self, PolyError> {
        let nvars = ring.nvars();
        let mut raw = Vec::new();
        for (c, exps) in terms {
            if exps.len() != nvars {
                return Err(PolyError::invalid(format!(
                    "exponent vector has {} entries, ring has {} variables",
                    exps.len(),
                    nvars
                )));
            }
            raw.push((Monomial::from_exponents(&exps)?, c));
        }
        Ok(Self::from_raw_terms(Arc::clone(ring), raw))
    }

    /// Builds the generator x_i. Index validity is the caller's problem.
    pub(crate) fn gen_unchecked(ring: &Arc<MPolyRing<R>>, i: usize) -> Self {
        Self {
            ring: Arc::clone(ring),
            terms: vec![(Monomial::var(i, ring.nvars()), R::one())],
        }
    }

    /// Builds a polynomial from arbitrary raw terms, restoring the
    /// canonical-term invariants: sort descending, combine equal
    /// monomials, drop zeros.
    pub(crate) fn from_raw_terms(ring: Arc<MPolyRing<R>>, mut terms: Vec<(Monomial, R)>) -> Self {
        let order = ring.order();
        terms.sort_by(|a, b| order.compare(&b.0, &a.0));

        let mut out: Vec<(Monomial, R)> = Vec::with_capacity(terms.len());
        for (m, c) in terms {
            if let Some(last) = out.last_mut() {
                if last.0 == m {
                    last.1 = last.1.clone() + c;
                    if last.1.is_zero() {
                        out.pop();
                    }
                    continue;
                }
            }
            if !c.is_zero() {
                out.push((m, c));
            }
        }

        Self { ring, terms: out }
    }

    /// Wraps a term sequence that is already canonical.
    pub(crate) fn from_canonical_terms(ring: Arc<MPolyRing<R>>, terms: Vec<(Monomial, R)>) -> Self {
        debug_assert!(terms.windows(2).all(|w| {
            ring.order().compare(&w[0].0, &w[1].0) == std::cmp::Ordering::Greater
        }));
        debug_assert!(terms.iter().all(|(_, c)| !c.is_zero()));
        Self { ring, terms }
    }

    /// Returns the parent ring.
    #[must_use]
    pub fn ring(&self) -> &Arc<MPolyRing<R>> {
        &self.ring
    }

    /// Returns the number of variables of the parent ring.
    #[must_use]
    pub fn nvars(&self) -> usize {
        self.ring.nvars()
    }

    /// Returns the terms, sorted strictly descending.
    #[must_use]
    pub fn terms(&self) -> &[(Monomial, R)] {
        &self.terms
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if this is the constant polynomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.terms.len() == 1 && self.terms[0].0.is_one() && self.terms[0].1.is_one()
    }

    /// Returns true if this polynomial is a constant (including zero).
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.terms.is_empty() || (self.terms.len() == 1 && self.terms[0].0.is_one())
    }

    /// Returns the leading coefficient.
    ///
    /// The zero polynomial has leading coefficient zero; that degenerate
    /// case is the caller's to handle, not an error.
    #[must_use]
    pub fn leading_coeff(&self) -> R {
        self.terms.first().map_or_else(R::zero, |(_, c)| c.clone())
    }

    /// Returns the leading monomial as a coefficient-one polynomial.
    ///
    /// The zero polynomial has leading monomial zero.
    #[must_use]
    pub fn leading_monomial(&self) -> Self {
        match self.terms.first() {
            None => Self::zero(&self.ring),
            Some((m, _)) => Self {
                ring: Arc::clone(&self.ring),
                terms: vec![(m.clone(), R::one())],
            },
        }
    }

    /// Returns the leading term as a one-term polynomial.
    ///
    /// The zero polynomial has leading term zero.
    #[must_use]
    pub fn leading_term(&self) -> Self {
        match self.terms.first() {
            None => Self::zero(&self.ring),
            Some(t) => Self {
                ring: Arc::clone(&self.ring),
                terms: vec![t.clone()],
            },
        }
    }

    /// Computes the total degree.
    ///
    /// The zero polynomial has total degree 0 by convention.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::Overflow`] if a term's degree sum overflows.
    pub fn total_degree(&self) -> Result<u64, PolyError> {
        let mut max = 0u64;
        for (m, _) in &self.terms {
            max = max.max(m.total_degree()?);
        }
        Ok(max)
    }

    /// Computes the degree in variable `var` (the largest exponent).
    ///
    /// The zero polynomial has degree 0 in every variable.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidArgument`] if `var` is out of range.
    pub fn degree(&self, var: usize) -> Result<u64, PolyError> {
        if var >= self.nvars() {
            return Err(PolyError::invalid(format!(
                "variable index {var} out of range for {} variables",
                self.nvars()
            )));
        }
        Ok(self
            .terms
            .iter()
            .map(|(m, _)| m.exponent(var))
            .max()
            .unwrap_or(0))
    }

    /// Adds two polynomials by merging their sorted term sequences.
    ///
    /// # Panics
    ///
    /// Panics if the operands have different parent rings.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        assert!(
            self.ring.matches(&other.ring),
            "operands must share a parent ring"
        );
        let merged = geobucket::merge_sorted(self.ring.order(), &self.terms, &other.terms);
        Self::from_canonical_terms(Arc::clone(&self.ring), merged)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            ring: Arc::clone(&self.ring),
            terms: self
                .terms
                .iter()
                .map(|(m, c)| (m.clone(), -c.clone()))
                .collect(),
        }
    }

    /// Subtracts two polynomials.
    ///
    /// # Panics
    ///
    /// Panics if the operands have different parent rings.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies by a scalar.
    ///
    /// Monomials and their order are unchanged; coefficients that
    /// multiply to zero are dropped.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero(&self.ring);
        }
        let terms = self
            .terms
            .iter()
            .filter_map(|(m, x)| {
                let prod = x.clone() * c.clone();
                (!prod.is_zero()).then_some((m.clone(), prod))
            })
            .collect();
        Self::from_canonical_terms(Arc::clone(&self.ring), terms)
    }

    /// Multiplies by a single term `c * m`.
    ///
    /// Term order is preserved because monomial orders are translation
    /// compatible, so no re-sort is needed.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::Overflow`] if an exponent sum overflows.
    pub fn mul_term(&self, c: &R, m: &Monomial) -> Result<Self, PolyError> {
        if c.is_zero() {
            return Ok(Self::zero(&self.ring));
        }
        let mut terms = Vec::with_capacity(self.terms.len());
        for (m2, c2) in &self.terms {
            let mono = m2.mul(m)?;
            let coeff = c2.clone() * c.clone();
            if !coeff.is_zero() {
                terms.push((mono, coeff));
            }
        }
        Ok(Self::from_canonical_terms(Arc::clone(&self.ring), terms))
    }

    /// Multiplies two polynomials via geobucket accumulation.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::Overflow`] if an exponent sum overflows.
    ///
    /// # Panics
    ///
    /// Panics if the operands have different parent rings.
    pub fn mul(&self, other: &Self) -> Result<Self, PolyError> {
        assert!(
            self.ring.matches(&other.ring),
            "operands must share a parent ring"
        );
        let terms = geobucket::multiply(&self.terms, &other.terms, self.ring.order())?;
        Ok(Self::from_canonical_terms(Arc::clone(&self.ring), terms))
    }

    /// Computes self^n by binary exponentiation.
    ///
    /// `p^0` is the constant polynomial 1 for every `p`, including the
    /// zero polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::Overflow`] if an exponent sum overflows.
    pub fn pow(&self, n: u32) -> Result<Self, PolyError> {
        let mut result = Self::one(&self.ring);
        if n == 0 {
            return Ok(result);
        }

        let mut base = self.clone();
        let mut exp = n;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base)?;
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(&base)?;
            }
        }
        Ok(result)
    }

    /// Changes the coefficient ring by mapping every coefficient.
    ///
    /// The result lives under a fresh parent with the same variable names
    /// and ordering; coefficients that map to zero are dropped.
    #[must_use]
    pub fn map_coefficients<S: Ring>(&self, mut f: impl FnMut(&R) -> S) -> MPoly<S> {
        let ring = MPolyRing::<S>::new(
            self.ring.var_names().iter().cloned(),
            self.ring.order(),
        );
        let terms = self
            .terms
            .iter()
            .filter_map(|(m, c)| {
                let mapped = f(c);
                (!mapped.is_zero()).then_some((m.clone(), mapped))
            })
            .collect();
        MPoly::from_canonical_terms(ring, terms)
    }
}

impl<R: Ring> PartialEq for MPoly<R> {
    fn eq(&self, other: &Self) -> bool {
        self.ring.matches(&other.ring) && self.terms == other.terms
    }
}

impl<R: Ring> Eq for MPoly<R> {}

impl<R: Ring> std::fmt::Display for MPoly<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut out = String::new();
        for (k, (m, c)) in self.terms.iter().enumerate() {
            let mono = render_monomial(m, &self.ring);
            let mut coeff = format!("{c:?}");
            let negative = coeff.starts_with('-');
            if negative {
                coeff.remove(0);
            }
            if k == 0 {
                if negative {
                    out.push('-');
                }
            } else {
                out.push_str(if negative { " - " } else { " + " });
            }
            if mono == "1" {
                out.push_str(&coeff);
            } else if coeff == "1" {
                out.push_str(&mono);
            } else {
                out.push_str(&coeff);
                out.push('*');
                out.push_str(&mono);
            }
        }
        write!(f, "{out}")
    }
}

fn render_monomial<R: Ring>(m: &Monomial, ring: &MPolyRing<R>) -> String {
    let mut parts = Vec::new();
    for i in 0..ring.nvars() {
        let e = m.exponent(i);
        if e == 1 {
            parts.push(ring.var_name(i).to_string());
        } else if e > 1 {
            parts.push(format!("{}^{e}", ring.var_name(i)));
        }
    }
    if parts.is_empty() {
        "1".to_string()
    } else {
        parts.join("*")
    }
}
