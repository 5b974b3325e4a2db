//! SliceError: unified error type for monomial-slice public APIs
//!
//! This error type is used throughout the crate to provide robust,
//! non-panicking error handling for all public APIs. The engine performs no
//! local retries; every error other than [`SliceError::Cancelled`] indicates
//! a condition the caller must fix.

use thiserror::Error;

/// Unified error type for monomial-slice operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SliceError {
    /// Two objects of differing arity met in one operation.
    #[error("arity mismatch: expected {expected} variables, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },
    /// A variable index outside the ambient ring was supplied.
    #[error("variable {var} out of range for a ring of {var_count} variables")]
    VariableOutOfRange { var: usize, var_count: usize },
    /// A strategy produced a pivot that would not shrink both children.
    #[error("split precondition violated: {0}")]
    PreconditionViolated(&'static str),
    /// The cooperative cancellation flag was observed between frontier pops.
    /// Output emitted before this point is valid.
    #[error("computation cancelled")]
    Cancelled,
    /// An exponent left the machine-word range. The engine assumes exponents
    /// fit in a word; large exponents belong behind a `TermTranslator`.
    #[error("exponent overflow on variable {var}")]
    ExponentOverflow { var: usize },
    /// A translator was asked about an exponent id it never assigned.
    #[error("unknown exponent id {id} on variable {var}")]
    UnknownExponentId { var: usize, id: u64 },
    /// The strategy factory saw an option name it does not recognize.
    #[error("unknown strategy option `{0}`")]
    UnknownOption(String),
    /// The strategy factory saw a bad value for a known option.
    #[error("invalid value `{value}` for strategy option `{name}`")]
    InvalidOptionValue { name: String, value: String },
    /// The Alexander dual point must dominate the lcm of the ideal.
    #[error("Alexander dual point is below the lcm at variable {var}")]
    DualPointBelowLcm { var: usize },
}
