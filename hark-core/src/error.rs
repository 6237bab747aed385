//! Error types for hark.
//!
//! Registration and emission never fail: any event identifier and any
//! listener are accepted. The only validated input is the listener threshold.
//! Panics raised by listeners are not errors of this crate; they unwind out of
//! `emit` untouched.

use thiserror::Error;

/// Top-level error type for all hark operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HarkError {
    /// An argument was outside the accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl HarkError {
    /// Shorthand for building an [`HarkError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        HarkError::InvalidArgument(message.into())
    }
}

/// Result alias used across the hark crates.
pub type Result<T> = std::result::Result<T, HarkError>;
