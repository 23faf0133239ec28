//! Outcome module - what a finished lookup hands to the rendering layer

use crate::error::LookupError;
use atlas_domain::{BorderResult, CountryRecord};

/// The result handed to the rendering collaborator
///
/// `Success` carries the resolved country and its ordered neighbor
/// results; `Failure` carries the error, whose `Display` is the
/// user-facing message.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// The lookup resolved a country; borders may contain absent slots
    Success {
        /// The canonical record for the queried country
        country: CountryRecord,
        /// Ordered neighbor results, absent slots for failed fetches
        borders: BorderResult,
    },

    /// The lookup aborted before producing a country
    Failure(LookupError),
}

impl LookupOutcome {
    /// Whether the lookup produced a country
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The error, if the lookup failed
    pub fn error(&self) -> Option<&LookupError> {
        match self {
            Self::Failure(err) => Some(err),
            Self::Success { .. } => None,
        }
    }
}

impl From<LookupError> for LookupOutcome {
    fn from(err: LookupError) -> Self {
        Self::Failure(err)
    }
}
