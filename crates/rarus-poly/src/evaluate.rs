//! Polynomial evaluation.
//!
//! All three evaluation modes share one substitution scheme: per term,
//! the (mapped) coefficient is multiplied by each substituted variable
//! power in ascending variable order, and the per-term products are
//! summed. The fixed left-to-right variable order is part of the
//! contract: it is what makes substitution into a noncommutative target
//! well defined.

use rustc_hash::FxHashMap;

use rarus_rings::{EvalTarget, Ring};

use crate::error::PolyError;
use crate::monomial::Monomial;
use crate::mpoly::MPoly;

impl<R: Ring> MPoly<R> {
    /// Evaluates the polynomial at one value per variable.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidArgument`] if `values` does not have
    /// one entry per ring variable.
    pub fn evaluate(&self, values: &[R]) -> Result<R, PolyError> {
        self.evaluate_map(values, Clone::clone)
    }

    /// Evaluates with a coefficient-transforming map applied before
    /// multiplication, enabling simultaneous base change and evaluation.
    ///
    /// The target only needs addition, multiplication and one, so it may
    /// be noncommutative. Each term is computed as
    /// `map(coeff) * values[0]^e0 * values[1]^e1 * ...` in ascending
    /// variable order. `map` must send zero to the target's additive
    /// identity; it is only ever applied to stored (nonzero)
    /// coefficients except when the polynomial itself is zero.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidArgument`] if `values` does not have
    /// one entry per ring variable.
    pub fn evaluate_map<S: EvalTarget>(
        &self,
        values: &[S],
        mut map: impl FnMut(&R) -> S,
    ) -> Result<S, PolyError> {
        let n = self.nvars();
        if values.len() != n {
            return Err(PolyError::invalid(format!(
                "expected {n} values, got {}",
                values.len()
            )));
        }

        let mut acc: Option<S> = None;
        for (m, c) in self.terms() {
            let mut term = map(c);
            for (i, value) in values.iter().enumerate() {
                let e = m.exponent(i);
                if e > 0 {
                    term = term * EvalTarget::pow(value, e);
                }
            }
            acc = Some(match acc {
                None => term,
                Some(sum) => sum + term,
            });
        }

        Ok(acc.unwrap_or_else(|| map(&R::zero())))
    }

    /// Substitutes values for a subset of the variables.
    ///
    /// The result is always a polynomial under the same parent, even when
    /// every variable ends up substituted; a fully-evaluated result is
    /// the constant polynomial, keeping the return type uniform across
    /// partial calls.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidArgument`] if the index and value
    /// lists have different lengths, an index is out of range, or an
    /// index is repeated.
    pub fn evaluate_partial(&self, vars: &[usize], values: &[R]) -> Result<Self, PolyError> {
        let n = self.nvars();
        if vars.len() != values.len() {
            return Err(PolyError::invalid(format!(
                "{} variable indices but {} values",
                vars.len(),
                values.len()
            )));
        }
        let mut seen = vec![false; n];
        for &v in vars {
            if v >= n {
                return Err(PolyError::invalid(format!(
                    "variable index {v} out of range for {n} variables"
                )));
            }
            if seen[v] {
                return Err(PolyError::invalid(format!("variable index {v} repeated")));
            }
            seen[v] = true;
        }

        // Substituting can make previously distinct monomials collide, so
        // terms are regrouped before re-normalizing.
        let mut grouped: FxHashMap<Monomial, R> = FxHashMap::default();
        for (m, c) in self.terms() {
            let mut coeff = c.clone();
            let mut exps = m.exponents().to_vec();
            for (&v, value) in vars.iter().zip(values) {
                let e = exps[v];
                if e > 0 {
                    coeff = coeff * EvalTarget::pow(value, e);
                }
                exps[v] = 0;
            }
            if coeff.is_zero() {
                continue;
            }
            let mono = Monomial::from_exponents(&exps)?;
            let slot = grouped.entry(mono).or_insert_with(R::zero);
            *slot = slot.clone() + coeff;
        }

        Ok(Self::from_raw_terms(
            self.ring().clone(),
            grouped.into_iter().collect(),
        ))
    }
}
