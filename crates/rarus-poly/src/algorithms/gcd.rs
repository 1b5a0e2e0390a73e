//! Polynomial gcd, lcm and exact division over a gcd domain.
//!
//! The multivariate gcd is computed by the classical content/primitive
//! split: strip the scalar content, then run a primitive
//! pseudo-remainder sequence in the lowest-index variable that actually
//! occurs, recursing on the coefficient polynomials for the contents.
//! Results are normalized so the leading coefficient has its canonical
//! unit removed, which makes the gcd a canonical representative of its
//! associate class.

use std::sync::Arc;

use rarus_rings::{CommutativeRing, Ring};

use crate::error::PolyError;
use crate::monomial::Monomial;
use crate::mpoly::MPoly;

/// Scalar content of a polynomial: the coefficient gcd.
///
/// The content of the zero polynomial is zero.
#[must_use]
pub fn content<R: CommutativeRing>(f: &MPoly<R>) -> R {
    f.terms()
        .iter()
        .fold(R::zero(), |acc, (_, c)| acc.gcd(c))
}

/// Divides every coefficient by the scalar content.
///
/// The zero polynomial is its own primitive part.
///
/// # Errors
///
/// Returns [`PolyError::InexactDivision`] if some coefficient is not
/// divisible by the content, which cannot happen in a gcd domain.
pub fn primitive_part<R: CommutativeRing>(f: &MPoly<R>) -> Result<MPoly<R>, PolyError> {
    if f.is_zero() {
        return Ok(f.clone());
    }
    divide_coeffs(f, &content(f))
}

/// Divides out the canonical unit of the leading coefficient.
///
/// For `Integer` this flips the sign so the leading coefficient is
/// positive; for `Rational` it rescales to a monic polynomial. The
/// zero polynomial is returned unchanged.
#[must_use]
pub fn normalize<R: CommutativeRing>(f: &MPoly<R>) -> MPoly<R> {
    if f.is_zero() {
        return f.clone();
    }
    let u = f.leading_coeff().canonical_unit();
    if u.is_one() {
        return f.clone();
    }
    divide_coeffs(f, &u).expect("canonical unit divides every ring element")
}

/// Greatest common divisor of two polynomials.
///
/// The result is normalized via [`normalize`]. `gcd(0, 0)` is the zero
/// polynomial and `gcd(f, 0)` is the normalized `f`.
///
/// # Errors
///
/// Returns [`PolyError::Overflow`] if an intermediate product overflows
/// an exponent cell.
///
/// # Panics
///
/// Panics if the operands have different parent rings.
pub fn gcd<R: CommutativeRing>(a: &MPoly<R>, b: &MPoly<R>) -> Result<MPoly<R>, PolyError> {
    assert!(
        a.ring().matches(b.ring()),
        "operands must share a parent ring"
    );
    if a.is_zero() {
        return Ok(normalize(b));
    }
    if b.is_zero() {
        return Ok(normalize(a));
    }

    let ca = content(a);
    let cb = content(b);
    let pa = divide_coeffs(a, &ca)?;
    let pb = divide_coeffs(b, &cb)?;
    let g = primitive_gcd(&pa, &pb)?;
    Ok(normalize(&g.scale(&ca.gcd(&cb))))
}

/// Least common multiple, computed as `a * b / gcd(a, b)`.
///
/// The result is normalized; `lcm(f, 0)` is zero.
///
/// # Errors
///
/// Returns [`PolyError::Overflow`] if an exponent sum overflows.
///
/// # Panics
///
/// Panics if the operands have different parent rings.
pub fn lcm<R: CommutativeRing>(a: &MPoly<R>, b: &MPoly<R>) -> Result<MPoly<R>, PolyError> {
    if a.is_zero() || b.is_zero() {
        return Ok(MPoly::zero(a.ring()));
    }
    let g = gcd(a, b)?;
    let q = exact_div(&a.mul(b)?, &g)?;
    Ok(normalize(&q))
}

/// Exact polynomial division: returns `q` with `a == q * b`.
///
/// Runs leading-term division against the ring's monomial order; each
/// step strictly decreases the leading monomial of the remainder, so
/// the loop terminates by well-foundedness of monomial orders.
///
/// # Errors
///
/// Returns [`PolyError::InexactDivision`] if `b` does not divide `a`,
/// and [`PolyError::InvalidArgument`] if `b` is zero.
///
/// # Panics
///
/// Panics if the operands have different parent rings.
pub fn exact_div<R: CommutativeRing>(a: &MPoly<R>, b: &MPoly<R>) -> Result<MPoly<R>, PolyError> {
    assert!(
        a.ring().matches(b.ring()),
        "operands must share a parent ring"
    );
    if b.is_zero() {
        return Err(PolyError::invalid("division by the zero polynomial"));
    }
    if a.is_zero() {
        return Ok(MPoly::zero(a.ring()));
    }

    let (bm, bc) = &b.terms()[0];
    let mut rem = a.clone();
    let mut quot: Vec<(Monomial, R)> = Vec::new();
    while !rem.is_zero() {
        let (rm, rc) = &rem.terms()[0];
        let qm = rm.div(bm).ok_or(PolyError::InexactDivision)?;
        let qc = rc.exact_div(bc).ok_or(PolyError::InexactDivision)?;
        rem = rem.sub(&b.mul_term(&qc, &qm)?);
        quot.push((qm, qc));
    }
    // Quotient monomials arrive in strictly descending order because
    // the remainder's leading monomial strictly decreases.
    Ok(MPoly::from_canonical_terms(Arc::clone(a.ring()), quot))
}

/// Divides every coefficient by `d`.
fn divide_coeffs<R: CommutativeRing>(f: &MPoly<R>, d: &R) -> Result<MPoly<R>, PolyError> {
    if d.is_one() {
        return Ok(f.clone());
    }
    let mut terms = Vec::with_capacity(f.len());
    for (m, c) in f.terms() {
        let q = c.exact_div(d).ok_or(PolyError::InexactDivision)?;
        terms.push((m.clone(), q));
    }
    Ok(MPoly::from_canonical_terms(Arc::clone(f.ring()), terms))
}

/// Largest exponent of variable `v`; zero for the zero polynomial.
fn degree_in<R: Ring>(f: &MPoly<R>, v: usize) -> u64 {
    f.terms()
        .iter()
        .map(|(m, _)| m.exponent(v))
        .max()
        .unwrap_or(0)
}

/// The coefficient of `x_v^k` in `f`, viewed as a polynomial in `x_v`.
///
/// The result lives in the same parent ring with `x_v` zeroed out.
fn coeff_wrt<R: Ring>(f: &MPoly<R>, v: usize, k: u64) -> MPoly<R> {
    let terms = f
        .terms()
        .iter()
        .filter(|(m, _)| m.exponent(v) == k)
        .map(|(m, c)| (m.with_exponent(v, 0), c.clone()))
        .collect();
    // Zeroing one coordinate can reorder terms under a degree order.
    MPoly::from_raw_terms(Arc::clone(f.ring()), terms)
}

/// Content of `f` with respect to `x_v`: the gcd of its `x_v`
/// coefficient polynomials.
fn content_wrt<R: CommutativeRing>(f: &MPoly<R>, v: usize) -> Result<MPoly<R>, PolyError> {
    let mut degrees: Vec<u64> = f.terms().iter().map(|(m, _)| m.exponent(v)).collect();
    degrees.sort_unstable();
    degrees.dedup();

    let mut cont = MPoly::zero(f.ring());
    for k in degrees {
        cont = gcd(&cont, &coeff_wrt(f, v, k))?;
        if cont.is_one() {
            break;
        }
    }
    Ok(cont)
}

/// Pseudo-remainder of `f` by `g` with respect to `x_v`.
///
/// Instead of tracking an explicit power of the leading coefficient,
/// each step multiplies the running remainder by `lc_v(g)` and
/// subtracts the aligned multiple of `g`, which cancels the leading
/// `x_v` term. The result is `f` and `g`'s remainder up to a factor
/// absorbed later by the content strip.
fn pseudo_rem<R: CommutativeRing>(
    f: &MPoly<R>,
    g: &MPoly<R>,
    v: usize,
) -> Result<MPoly<R>, PolyError> {
    let dg = degree_in(g, v);
    let lg = coeff_wrt(g, v, dg);
    let one_m = Monomial::one(f.nvars());

    let mut rem = f.clone();
    while !rem.is_zero() {
        let dr = degree_in(&rem, v);
        if dr < dg {
            break;
        }
        let lr = coeff_wrt(&rem, v, dr);
        let shifted = g.mul_term(&R::one(), &one_m.with_exponent(v, dr - dg))?;
        rem = rem.mul(&lg)?.sub(&shifted.mul(&lr)?);
    }
    Ok(rem)
}

/// Gcd of two nonzero content-free polynomials.
fn primitive_gcd<R: CommutativeRing>(
    pa: &MPoly<R>,
    pb: &MPoly<R>,
) -> Result<MPoly<R>, PolyError> {
    if pa == pb {
        return Ok(pa.clone());
    }
    // A content-free constant is a unit, so the gcd is 1.
    if pa.is_constant() || pb.is_constant() {
        return Ok(MPoly::one(pa.ring()));
    }

    // Main variable: lowest index occurring in either operand.
    let v = (0..pa.nvars())
        .find(|&i| degree_in(pa, i) > 0 || degree_in(pb, i) > 0)
        .expect("nonconstant polynomial has an active variable");

    let cont_a = content_wrt(pa, v)?;
    let cont_b = content_wrt(pb, v)?;
    let cont_g = gcd(&cont_a, &cont_b)?;

    let mut f = exact_div(pa, &cont_a)?;
    let mut g = exact_div(pb, &cont_b)?;
    if degree_in(&f, v) < degree_in(&g, v) {
        std::mem::swap(&mut f, &mut g);
    }

    // Primitive pseudo-remainder sequence in x_v.
    while !g.is_zero() {
        let r = pseudo_rem(&f, &g, v)?;
        f = g;
        g = if r.is_zero() {
            r
        } else {
            exact_div(&r, &content_wrt(&r, v)?)?
        };
    }

    f.mul(&cont_g)
}
