//! Resolver module - from a validated query to one canonical record

use crate::error::LookupError;
use atlas_domain::{CountryQuery, CountryRecord, CountrySource};

/// Resolve a validated query to exactly one country record
///
/// Issues exactly one request through the source. With `exact_match` the
/// service returns at most one record for unambiguous names; should it
/// still return several, the first record in the response sequence is the
/// canonical pick.
///
/// # Errors
///
/// - [`LookupError::CountryNotFound`] when the service has no match
/// - [`LookupError::Transport`] for network or response trouble
pub async fn resolve<S: CountrySource>(
    source: &S,
    query: &CountryQuery,
    exact_match: bool,
) -> Result<CountryRecord, LookupError> {
    let records = source
        .lookup_by_name(query.as_str(), exact_match)
        .await
        .map_err(|e| LookupError::Transport(e.to_string()))?;

    tracing::debug!("Resolved {} record(s) for '{}'", records.len(), query);

    records
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::CountryNotFound(query.as_str().to_string()))
}
