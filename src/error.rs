//! Error types for relational transformations

use std::fmt;

/// Error cases for combiners and both-sides transforms
///
/// Every misuse maps to exactly one variant; no operation ever returns a
/// partial result alongside an error, and nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BothsidesError {
    /// A combiner was handed a relation that is not an equality
    TypeMismatch(String),

    /// The transform/operator combination has no defined rule
    UnsupportedTransform(String),

    /// A sign-dependent transform could not resolve the sign it needs,
    /// neither from symbol assumptions nor from a supplied interval
    AmbiguousSign(String),

    /// Division or reciprocal against a provably zero quantity
    Domain(String),
}

impl fmt::Display for BothsidesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BothsidesError::TypeMismatch(msg) => write!(f, "Type mismatch: {}", msg),
            BothsidesError::UnsupportedTransform(msg) => {
                write!(f, "Unsupported transform: {}", msg)
            }
            BothsidesError::AmbiguousSign(msg) => write!(f, "Ambiguous sign: {}", msg),
            BothsidesError::Domain(msg) => write!(f, "Domain error: {}", msg),
        }
    }
}

impl std::error::Error for BothsidesError {}
