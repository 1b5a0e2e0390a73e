//! Parent polynomial rings.
//!
//! An [`MPolyRing`] owns the variable display names and the monomial
//! ordering; every polynomial holds a shared reference to its parent.
//! Parents are immutable after construction, so sharing one across
//! threads is safe. Construction may go through a [`RingCache`] to reuse
//! an existing parent for identical parameters; that is the caller's
//! choice, not an invariant.

use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

use rustc_hash::FxHashMap;

use rarus_rings::Ring;

use crate::error::PolyError;
use crate::mpoly::MPoly;
use crate::ordering::MonomialOrder;

/// A multivariate polynomial ring R[x_1, ..., x_n] with a fixed monomial
/// ordering.
///
/// The coefficient ring is the type parameter; two parents over the same
/// coefficient type are the same ring iff their variable names and
/// ordering match.
#[derive(Debug)]
pub struct MPolyRing<R> {
    vars: Vec<String>,
    order: MonomialOrder,
    _coeffs: PhantomData<fn() -> R>,
}

impl<R: Ring> MPolyRing<R> {
    /// Creates a new parent ring.
    #[must_use]
    pub fn new<S: Into<String>>(vars: impl IntoIterator<Item = S>, order: MonomialOrder) -> Arc<Self> {
        Arc::new(Self {
            vars: vars.into_iter().map(Into::into).collect(),
            order,
            _coeffs: PhantomData,
        })
    }

    /// Creates a parent ring together with its generator polynomials.
    #[must_use]
    pub fn with_gens<S: Into<String>>(
        vars: impl IntoIterator<Item = S>,
        order: MonomialOrder,
    ) -> (Arc<Self>, Vec<MPoly<R>>) {
        let ring = Self::new(vars, order);
        let gens = ring.gens();
        (ring, gens)
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn nvars(&self) -> usize {
        self.vars.len()
    }

    /// Returns the variable display names.
    #[must_use]
    pub fn var_names(&self) -> &[String] {
        &self.vars
    }

    /// Returns the display name of variable `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[must_use]
    pub fn var_name(&self, i: usize) -> &str {
        &self.vars[i]
    }

    /// Returns the monomial ordering.
    #[must_use]
    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    /// Returns the generator polynomials x_1, ..., x_n.
    #[must_use]
    pub fn gens(self: &Arc<Self>) -> Vec<MPoly<R>> {
        (0..self.nvars())
            .map(|i| MPoly::gen_unchecked(self, i))
            .collect()
    }

    /// Returns the generator polynomial x_i.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidArgument`] if `i` is out of range.
    pub fn gen(self: &Arc<Self>, i: usize) -> Result<MPoly<R>, PolyError> {
        if i >= self.nvars() {
            return Err(PolyError::invalid(format!(
                "variable index {i} out of range for {} variables",
                self.nvars()
            )));
        }
        Ok(MPoly::gen_unchecked(self, i))
    }

    /// Returns true if `other` denotes the same parent ring.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.vars == other.vars && self.order == other.order
    }
}

impl<R> PartialEq for MPolyRing<R> {
    fn eq(&self, other: &Self) -> bool {
        self.vars == other.vars && self.order == other.order
    }
}

impl<R> Eq for MPolyRing<R> {}

impl<R> std::fmt::Display for MPolyRing<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "R[{}] ({})", self.vars.join(", "), self.order)
    }
}

/// A construction cache mapping ring parameters to shared parents.
///
/// Lookup and insertion take a mutex, so concurrent construction from
/// multiple threads is safe. Two `get_or_create` calls with identical
/// parameters return the same `Arc`.
pub struct RingCache<R> {
    inner: Mutex<FxHashMap<(Vec<String>, MonomialOrder), Arc<MPolyRing<R>>>>,
}

impl<R: Ring> RingCache<R> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(FxHashMap::default()),
        }
    }

    /// Returns the cached parent for these parameters, creating it on
    /// first use.
    ///
    /// # Panics
    ///
    /// Panics if the cache mutex was poisoned by a panicking thread.
    #[must_use]
    pub fn get_or_create(&self, vars: &[&str], order: MonomialOrder) -> Arc<MPolyRing<R>> {
        let key = (vars.iter().map(|s| (*s).to_string()).collect::<Vec<_>>(), order);
        let mut map = self.inner.lock().expect("ring cache poisoned");
        map.entry(key)
            .or_insert_with(|| MPolyRing::new(vars.iter().copied(), order))
            .clone()
    }
}

impl<R: Ring> Default for RingCache<R> {
    fn default() -> Self {
        Self::new()
    }
}
