//! Atlas Country Source Layer
//!
//! Infrastructure implementations of the `CountrySource` trait from
//! `atlas-domain`.
//!
//! # Sources
//!
//! - `MockSource`: Deterministic mock for testing
//! - `RestCountriesClient`: REST Countries v3.1 API integration
//!
//! # Examples
//!
//! ```
//! use atlas_client::MockSource;
//! use atlas_domain::CountrySource;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let source = MockSource::new();
//! let matches = source.lookup_by_name("Atlantis", true).await.unwrap();
//! assert!(matches.is_empty());
//! assert_eq!(source.call_count(), 1);
//! # });
//! ```

#![warn(missing_docs)]

pub mod rest_countries;

use atlas_domain::{BorderCode, CountryRecord, CountrySource};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use rest_countries::RestCountriesClient;

/// Errors that can occur while talking to a country source
#[derive(Error, Debug)]
pub enum ClientError {
    /// The service answered with a non-success HTTP status
    #[error("Service returned HTTP {0}")]
    Status(u16),

    /// Network-level communication error
    #[error("Request failed: {0}")]
    Transport(String),

    /// The response body could not be parsed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Mock country source for deterministic testing
///
/// Returns pre-configured records without making any network calls, and
/// counts how many lookups were issued so tests can assert on network
/// activity (or the absence of it).
///
/// # Examples
///
/// ```
/// use atlas_client::MockSource;
/// use atlas_domain::{BorderCode, CountrySource};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let mut source = MockSource::new();
/// source.add_error("BEL");
///
/// let result = source.lookup_by_code(&BorderCode::new("BEL")).await;
/// assert!(result.is_err());
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    records: Arc<Mutex<HashMap<String, Vec<CountryRecord>>>>,
    failing_keys: Arc<Mutex<HashSet<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockSource {
    /// Create an empty mock source
    ///
    /// Every lookup returns an empty match list until records are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the records returned for a given name or code key
    pub fn add_records(&mut self, key: impl Into<String>, records: Vec<CountryRecord>) {
        self.records.lock().unwrap().insert(key.into(), records);
    }

    /// Register a single record returned for a given name or code key
    pub fn add_record(&mut self, key: impl Into<String>, record: CountryRecord) {
        self.add_records(key, vec![record]);
    }

    /// Configure lookups for a given key to fail with a transport error
    pub fn add_error(&mut self, key: impl Into<String>) {
        self.failing_keys.lock().unwrap().insert(key.into());
    }

    /// Get the number of lookups issued so far
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the lookup counter
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }

    fn lookup(&self, key: &str) -> Result<Vec<CountryRecord>, ClientError> {
        *self.call_count.lock().unwrap() += 1;

        if self.failing_keys.lock().unwrap().contains(key) {
            return Err(ClientError::Transport(format!(
                "mock failure for key '{}'",
                key
            )));
        }

        Ok(self
            .records
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .unwrap_or_default())
    }
}

impl CountrySource for MockSource {
    type Error = ClientError;

    async fn lookup_by_name(
        &self,
        name: &str,
        _exact_match: bool,
    ) -> Result<Vec<CountryRecord>, Self::Error> {
        self.lookup(name)
    }

    async fn lookup_by_code(
        &self,
        code: &BorderCode,
    ) -> Result<Vec<CountryRecord>, Self::Error> {
        self.lookup(code.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> CountryRecord {
        CountryRecord {
            name: name.to_string(),
            capital: vec!["Capital".to_string()],
            population: 1,
            region: "Test".to_string(),
            flag_url: String::new(),
            borders: vec![],
        }
    }

    #[tokio::test]
    async fn test_mock_returns_registered_records() {
        let mut source = MockSource::new();
        source.add_record("Chile", record("Chile"));

        let matches = source.lookup_by_name("Chile", true).await.unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Chile");
    }

    #[tokio::test]
    async fn test_mock_unknown_key_is_empty_match() {
        let source = MockSource::new();
        let matches = source.lookup_by_name("Atlantis", true).await.unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn test_mock_counts_calls() {
        let source = MockSource::new();
        assert_eq!(source.call_count(), 0);

        source.lookup_by_name("A", true).await.unwrap();
        source.lookup_by_code(&BorderCode::new("BBB")).await.unwrap();
        assert_eq!(source.call_count(), 2);

        source.reset_call_count();
        assert_eq!(source.call_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_error_keys_fail() {
        let mut source = MockSource::new();
        source.add_error("DEU");

        let result = source.lookup_by_code(&BorderCode::new("DEU")).await;
        assert!(matches!(result, Err(ClientError::Transport(_))));
    }
}
