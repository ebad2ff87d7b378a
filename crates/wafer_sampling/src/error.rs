//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! out-of-range arguments, requests that exceed the available population,
//! invalid run configuration, and statistics failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("cannot draw {requested} cells without replacement from {available} valid cells")]
    InsufficientPopulation { requested: usize, available: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("statistics error: {0}")]
    Statistics(String),
}

impl Error {
    /// Returns `true` for argument errors, including [`Error::InsufficientPopulation`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidArgument(_) | Error::InsufficientPopulation { .. }
        )
    }
}
