//! Error type for the crate.
//!
//! Only argument validation is surfaced as an error. Numeric degeneracy
//! during tour construction is handled in place and internal invariant
//! violations panic.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AcoError>;

/// Errors raised before any search work begins.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    /// A parameter or input is outside its valid domain.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

impl AcoError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        AcoError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
