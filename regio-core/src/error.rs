//! Error types for regio-core.
//!
//! The taxonomy is deliberately small: a failed lookup is `Option::None`, not
//! an error, and orphaned records are counted in
//! [`BuildStats`](crate::tree::BuildStats) rather than raised. Only a
//! data-quality rejection fails the build.

use thiserror::Error;

/// Result type alias using our BuildError.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors raised while constructing a [`DivisionTree`](crate::tree::DivisionTree).
#[derive(Debug, Error)]
pub enum BuildError {
    /// Two input records share a code. Codes must be unique for binary
    /// search over the code index to resolve parents deterministically, so
    /// the build rejects the dataset instead of picking a winner.
    #[error("duplicate division code: {code}")]
    DuplicateCode { code: String },
}
