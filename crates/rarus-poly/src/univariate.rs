//! Conversion between sparse multivariate and dense univariate form.

use std::sync::Arc;

use rarus_rings::Ring;

use crate::error::PolyError;
use crate::monomial::Monomial;
use crate::mpoly::MPoly;
use crate::ring::MPolyRing;

/// Converts a polynomial involving only variable `var` into dense
/// coefficients in ascending degree order.
///
/// The zero polynomial converts to an empty vector.
///
/// # Errors
///
/// Returns [`PolyError::InvalidArgument`] if `var` is out of range or any
/// other variable occurs in the polynomial, and [`PolyError::Overflow`]
/// if the degree does not fit in memory-indexable range.
pub fn to_univariate<R: Ring>(f: &MPoly<R>, var: usize) -> Result<Vec<R>, PolyError> {
    let n = f.nvars();
    if var >= n {
        return Err(PolyError::invalid(format!(
            "variable index {var} out of range for {n} variables"
        )));
    }
    for (m, _) in f.terms() {
        for i in 0..n {
            if i != var && m.exponent(i) > 0 {
                return Err(PolyError::invalid(format!(
                    "polynomial involves variable {i}, not univariate in {var}"
                )));
            }
        }
    }

    if f.is_zero() {
        return Ok(Vec::new());
    }

    let deg: usize = f
        .degree(var)?
        .try_into()
        .map_err(|_| PolyError::Overflow)?;
    let mut coeffs = vec![R::zero(); deg + 1];
    for (m, c) in f.terms() {
        #[allow(clippy::cast_possible_truncation)]
        let e = m.exponent(var) as usize;
        coeffs[e] = c.clone();
    }
    Ok(coeffs)
}

/// Builds a sparse polynomial from dense univariate coefficients in
/// ascending degree order.
///
/// # Errors
///
/// Returns [`PolyError::InvalidArgument`] if `var` is out of range.
pub fn from_univariate<R: Ring>(
    ring: &Arc<MPolyRing<R>>,
    var: usize,
    coeffs: &[R],
) -> Result<MPoly<R>, PolyError> {
    let n = ring.nvars();
    if var >= n {
        return Err(PolyError::invalid(format!(
            "variable index {var} out of range for {n} variables"
        )));
    }

    let mut terms = Vec::new();
    for (i, c) in coeffs.iter().enumerate() {
        if c.is_zero() {
            continue;
        }
        let mut exps = vec![0u64; n];
        exps[var] = i as u64;
        terms.push((Monomial::from_exponents(&exps)?, c.clone()));
    }
    Ok(MPoly::from_raw_terms(Arc::clone(ring), terms))
}
