//! Variable deflation and inflation.
//!
//! Deflation shrinks a polynomial by removing, per variable, a common
//! exponent shift (the minimum exponent) and a common stretch factor (the
//! gcd of the exponent differences). Inflation is the exact inverse map.
//!
//! For the pair computed by [`deflation`], the round trip
//! `inflate(deflate(f, s, d), s, d) == f` always holds.

use rarus_rings::Ring;

use crate::error::PolyError;
use crate::monomial::{Monomial, MAX_EXPONENT};
use crate::mpoly::MPoly;

fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Computes the deflation parameters of a polynomial.
///
/// Returns `(shift, defl)` where `shift[i]` is the minimum exponent of
/// variable `i` over all terms and `defl[i]` is the gcd of the exponent
/// differences `e[i] - shift[i]` (1 when every exponent of that variable
/// is equal, since the gcd of an all-zero set would be 0).
///
/// The zero polynomial deflates trivially: all shifts 0, all factors 1.
#[must_use]
pub fn deflation<R: Ring>(f: &MPoly<R>) -> (Vec<u64>, Vec<u64>) {
    let n = f.nvars();
    if f.is_zero() {
        return (vec![0; n], vec![1; n]);
    }

    let mut shift = vec![u64::MAX; n];
    for (m, _) in f.terms() {
        for i in 0..n {
            shift[i] = shift[i].min(m.exponent(i));
        }
    }

    let mut defl = vec![0u64; n];
    for (m, _) in f.terms() {
        for i in 0..n {
            defl[i] = gcd_u64(defl[i], m.exponent(i) - shift[i]);
        }
    }
    for d in &mut defl {
        if *d == 0 {
            *d = 1;
        }
    }

    (shift, defl)
}

/// Applies the exponent map `e[i] -> (e[i] - shift[i]) / defl[i]`.
///
/// # Errors
///
/// - [`PolyError::InvalidArgument`] if the parameter slices do not have
///   one entry per variable, a deflation factor is zero, or a shift
///   exceeds an actual exponent, all of which mean the parameters do not
///   come from this polynomial's [`deflation`].
/// - [`PolyError::InexactDivision`] if a shifted exponent is not an exact
///   multiple of its deflation factor.
pub fn deflate<R: Ring>(f: &MPoly<R>, shift: &[u64], defl: &[u64]) -> Result<MPoly<R>, PolyError> {
    let n = f.nvars();
    check_params(n, shift, defl)?;

    let mut terms = Vec::with_capacity(f.len());
    for (m, c) in f.terms() {
        let mut exps = Vec::with_capacity(n);
        for i in 0..n {
            let e = m.exponent(i);
            if e < shift[i] {
                return Err(PolyError::invalid(format!(
                    "shift {} exceeds exponent {e} of variable {i}",
                    shift[i]
                )));
            }
            let diff = e - shift[i];
            if diff % defl[i] != 0 {
                return Err(PolyError::InexactDivision);
            }
            exps.push(diff / defl[i]);
        }
        terms.push((Monomial::from_exponents(&exps)?, c.clone()));
    }

    // The exponent map does not preserve the monomial order in general,
    // so the result is re-normalized.
    Ok(MPoly::from_raw_terms(f.ring().clone(), terms))
}

/// Applies the inverse exponent map `e[i] -> e[i] * defl[i] + shift[i]`.
///
/// # Errors
///
/// - [`PolyError::InvalidArgument`] if the parameter slices do not have
///   one entry per variable or a deflation factor is zero.
/// - [`PolyError::Overflow`] if a stretched exponent leaves the
///   guard-bit-protected range.
pub fn inflate<R: Ring>(f: &MPoly<R>, shift: &[u64], defl: &[u64]) -> Result<MPoly<R>, PolyError> {
    let n = f.nvars();
    check_params(n, shift, defl)?;

    let mut terms = Vec::with_capacity(f.len());
    for (m, c) in f.terms() {
        let mut exps = Vec::with_capacity(n);
        for i in 0..n {
            let wide = u128::from(m.exponent(i)) * u128::from(defl[i]) + u128::from(shift[i]);
            if wide > u128::from(MAX_EXPONENT) {
                return Err(PolyError::Overflow);
            }
            #[allow(clippy::cast_possible_truncation)]
            exps.push(wide as u64);
        }
        terms.push((Monomial::from_exponents(&exps)?, c.clone()));
    }

    Ok(MPoly::from_raw_terms(f.ring().clone(), terms))
}

fn check_params(nvars: usize, shift: &[u64], defl: &[u64]) -> Result<(), PolyError> {
    if shift.len() != nvars || defl.len() != nvars {
        return Err(PolyError::invalid(format!(
            "expected {nvars} shift/deflation entries, got {}/{}",
            shift.len(),
            defl.len()
        )));
    }
    if defl.contains(&0) {
        return Err(PolyError::invalid("deflation factor must be nonzero"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::MonomialOrder;
    use crate::ring::MPolyRing;
    use rarus_rings::Integer;
    use std::sync::Arc;

    fn zz(n: i64) -> Integer {
        Integer::new(n)
    }

    fn ring_xy() -> Arc<MPolyRing<Integer>> {
        MPolyRing::new(["x", "y"], MonomialOrder::DegLex)
    }

    #[test]
    fn test_deflation_parameters() {
        // f = x^7*y^8 + 3*x^4*y^8 - x^4*y^2 + 5*x*y^4 - x*y^2
        // x exponents {7,4,4,1,1}: shift 1, difference gcd 3
        // y exponents {8,8,2,4,2}: shift 2, difference gcd 2
        let ring = ring_xy();
        let f = MPoly::from_terms(
            &ring,
            vec![
                (zz(1), vec![7, 8]),
                (zz(3), vec![4, 8]),
                (zz(-1), vec![4, 2]),
                (zz(5), vec![1, 4]),
                (zz(-1), vec![1, 2]),
            ],
        )
        .unwrap();

        let (shift, defl) = deflation(&f);
        assert_eq!(shift, vec![1, 2]);
        assert_eq!(defl, vec![3, 2]);

        let deflated = deflate(&f, &shift, &defl).unwrap();
        assert_eq!(deflated.total_degree().unwrap(), 5);
        assert_eq!(inflate(&deflated, &shift, &defl).unwrap(), f);
    }

    #[test]
    fn test_deflation_all_equal_exponents() {
        // Single term: every difference set is all-zero, factors become 1.
        let ring = ring_xy();
        let f = MPoly::from_terms(&ring, vec![(zz(4), vec![3, 5])]).unwrap();

        let (shift, defl) = deflation(&f);
        assert_eq!(shift, vec![3, 5]);
        assert_eq!(defl, vec![1, 1]);

        let d = deflate(&f, &shift, &defl).unwrap();
        assert!(d.is_constant());
        assert_eq!(inflate(&d, &shift, &defl).unwrap(), f);
    }

    #[test]
    fn test_deflation_zero_poly() {
        let ring = ring_xy();
        let zero = MPoly::<Integer>::zero(&ring);

        let (shift, defl) = deflation(&zero);
        assert_eq!(shift, vec![0, 0]);
        assert_eq!(defl, vec![1, 1]);
        assert!(deflate(&zero, &shift, &defl).unwrap().is_zero());
    }

    #[test]
    fn test_deflate_bad_parameters() {
        let ring = ring_xy();
        let f = MPoly::from_terms(&ring, vec![(zz(1), vec![2, 3])]).unwrap();

        assert!(matches!(
            deflate(&f, &[0], &[1, 1]),
            Err(PolyError::InvalidArgument(_))
        ));
        assert!(matches!(
            deflate(&f, &[0, 0], &[0, 1]),
            Err(PolyError::InvalidArgument(_))
        ));
        assert!(matches!(
            deflate(&f, &[5, 0], &[1, 1]),
            Err(PolyError::InvalidArgument(_))
        ));
        assert_eq!(
            deflate(&f, &[0, 0], &[1, 2]),
            Err(PolyError::InexactDivision)
        );
    }

    #[test]
    fn test_inflate_overflow() {
        let ring = ring_xy();
        let f = MPoly::from_terms(&ring, vec![(zz(1), vec![2, 0])]).unwrap();

        assert_eq!(
            inflate(&f, &[0, 0], &[MAX_EXPONENT, 1]),
            Err(PolyError::Overflow)
        );
    }

    #[test]
    fn test_deflate_reorders_terms() {
        // Deflation can change the relative order of monomials; the result
        // must still be canonically sorted.
        let ring = ring_xy();
        // deglex: y^2 > x
        let f = MPoly::from_terms(&ring, vec![(zz(1), vec![0, 2]), (zz(1), vec![1, 0])]).unwrap();

        // defl (1, 2): x -> x, y^2 -> y; now x > y under deglex.
        let d = deflate(&f, &[0, 0], &[1, 2]).unwrap();
        assert_eq!(
            d,
            MPoly::from_terms(&ring, vec![(zz(1), vec![1, 0]), (zz(1), vec![0, 1])]).unwrap()
        );
    }
}
