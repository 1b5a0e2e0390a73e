//! Error types for polynomial operations.

use thiserror::Error;

/// An error produced by a polynomial operation.
///
/// All operations are deterministic pure functions, so none of these are
/// transient: retrying an operation yields the same error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// An exponent or total degree left the guard-bit-protected range.
    ///
    /// The operation is aborted; no silently-wrapped polynomial is ever
    /// produced.
    #[error("exponent overflow: value exceeds the guard-bit-protected range")]
    Overflow,

    /// A caller supplied malformed arguments, such as mismatched list
    /// lengths or an out-of-range variable index.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An exact division (lcm, deflation, polynomial quotient) did not
    /// divide evenly.
    #[error("inexact division")]
    InexactDivision,
}

impl PolyError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
