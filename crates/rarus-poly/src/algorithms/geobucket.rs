//! Geobucket-based accumulation of sparse polynomial terms.
//!
//! Products generate up to m*k raw terms; a geobucket merges them with
//! geometrically increasing bucket sizes so each insertion costs O(log n)
//! amortized instead of re-sorting the whole accumulator.
//!
//! Reference: Yan, "Geobuckets for Polynomial Multiplication" (1998)

use std::cmp::Ordering;

use rarus_rings::Ring;

use crate::error::PolyError;
use crate::monomial::Monomial;
use crate::ordering::MonomialOrder;

/// Merges two term sequences sorted strictly descending under `order`,
/// combining equal monomials and dropping zero sums.
///
/// This is the addition kernel: the result satisfies the canonical-term
/// invariants whenever both inputs do.
pub(crate) fn merge_sorted<R: Ring>(
    order: MonomialOrder,
    a: &[(Monomial, R)],
    b: &[(Monomial, R)],
) -> Vec<(Monomial, R)> {
    let mut result = Vec::with_capacity(a.len() + b.len());
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        match order.compare(&a[i].0, &b[j].0) {
            Ordering::Greater => {
                result.push(a[i].clone());
                i += 1;
            }
            Ordering::Less => {
                result.push(b[j].clone());
                j += 1;
            }
            Ordering::Equal => {
                let sum = a[i].1.clone() + b[j].1.clone();
                if !sum.is_zero() {
                    result.push((a[i].0.clone(), sum));
                }
                i += 1;
                j += 1;
            }
        }
    }

    result.extend_from_slice(&a[i..]);
    result.extend_from_slice(&b[j..]);
    result
}

/// A geobucket accumulator. Bucket i holds at most 2^(i+1) terms.
pub(crate) struct Geobucket<R: Ring> {
    buckets: Vec<Vec<(Monomial, R)>>,
    order: MonomialOrder,
}

impl<R: Ring> Geobucket<R> {
    pub(crate) fn new(order: MonomialOrder) -> Self {
        Self {
            buckets: Vec::new(),
            order,
        }
    }

    #[inline]
    fn bucket_capacity(i: usize) -> usize {
        1 << (i + 1)
    }

    /// Adds a run of terms sorted strictly descending under the bucket's
    /// order, carry-propagating from the first bucket large enough to
    /// hold it.
    pub(crate) fn add_sorted(&mut self, chunk: Vec<(Monomial, R)>) {
        if chunk.is_empty() {
            return;
        }

        let mut terms = chunk;
        let mut i = 0;
        while Self::bucket_capacity(i) < terms.len() {
            i += 1;
        }
        loop {
            while self.buckets.len() <= i {
                self.buckets.push(Vec::new());
            }

            if self.buckets[i].is_empty() {
                self.buckets[i] = terms;
                break;
            }

            terms = merge_sorted(self.order, &self.buckets[i], &terms);
            self.buckets[i].clear();

            if terms.len() <= Self::bucket_capacity(i) {
                self.buckets[i] = terms;
                break;
            }

            i += 1;
        }
    }

    /// Merges all buckets into one canonical term sequence.
    pub(crate) fn extract(self) -> Vec<(Monomial, R)> {
        let mut result = Vec::new();
        for bucket in &self.buckets {
            if !bucket.is_empty() {
                result = merge_sorted(self.order, &result, bucket);
            }
        }
        result
    }
}

/// Multiplies two canonical term sequences.
///
/// Every pairwise product is a checked monomial multiplication; the
/// geobucket combines equal monomials and drops zero coefficients, so the
/// output is canonical.
///
/// # Errors
///
/// Returns [`PolyError::Overflow`] if any exponent sum overflows.
pub(crate) fn multiply<R: Ring>(
    a: &[(Monomial, R)],
    b: &[(Monomial, R)],
    order: MonomialOrder,
) -> Result<Vec<(Monomial, R)>, PolyError> {
    if a.is_empty() || b.is_empty() {
        return Ok(Vec::new());
    }

    // Iterate over the smaller operand: each partial product scales the
    // larger one by a fixed monomial, which preserves its descending
    // order, so it enters the bucket as one sorted chunk.
    let (smaller, larger) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut bucket = Geobucket::new(order);
    for (mono_a, coeff_a) in smaller {
        let mut chunk = Vec::with_capacity(larger.len());
        for (mono_b, coeff_b) in larger {
            let mono = mono_a.mul(mono_b)?;
            let coeff = coeff_a.clone() * coeff_b.clone();
            if !coeff.is_zero() {
                chunk.push((mono, coeff));
            }
        }
        bucket.add_sorted(chunk);
    }

    Ok(bucket.extract())
}
