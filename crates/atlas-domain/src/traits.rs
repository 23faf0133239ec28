//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Infrastructure implementations live in other crates.

use crate::country::{BorderCode, CountryRecord};

/// Trait for the remote country-lookup service
///
/// Implemented by the infrastructure layer (atlas-client). Both operations
/// return the full record sequence the service produced: an empty sequence
/// means the service had no match for the key, which is distinct from the
/// transport-level failures carried in `Self::Error`.
#[allow(async_fn_in_trait)]
pub trait CountrySource {
    /// Error type for transport-level failures (network, malformed body)
    type Error: std::fmt::Display;

    /// Look up countries by free-text name
    ///
    /// With `exact_match` the service only returns full-text equality
    /// matches, so at most one record comes back for unambiguous names.
    async fn lookup_by_name(
        &self,
        name: &str,
        exact_match: bool,
    ) -> Result<Vec<CountryRecord>, Self::Error>;

    /// Look up a country by its border code
    async fn lookup_by_code(
        &self,
        code: &BorderCode,
    ) -> Result<Vec<CountryRecord>, Self::Error>;
}
