//! Error types for the lookup pipeline

use atlas_domain::ValidationError;
use thiserror::Error;

/// Errors that abort a lookup
///
/// Per-neighbor fetch failures are deliberately missing here: they are
/// absorbed into absent slots of the border result and only reported as
/// diagnostics, never to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Input was empty or whitespace-only (caught before any network call)
    #[error("Please enter a country name")]
    EmptyInput,

    /// Input was a number (caught before any network call)
    #[error("Please enter a valid country name, not a number")]
    NumericInput,

    /// The service had no record matching the query
    #[error("Country not found: {0}")]
    CountryNotFound(String),

    /// Network or response trouble below the lookup semantics
    #[error("Lookup failed: {0}")]
    Transport(String),
}

impl From<ValidationError> for LookupError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyInput => Self::EmptyInput,
            ValidationError::NumericInput => Self::NumericInput,
        }
    }
}

impl LookupError {
    /// Whether this failure happened before any network activity
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::NumericInput)
    }
}
