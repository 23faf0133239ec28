//! REST Countries Client Implementation
//!
//! Provides integration with the REST Countries v3.1 public API.
//!
//! # Features
//!
//! - Async HTTP communication with the REST Countries API
//! - Configurable endpoint
//! - Retry logic with exponential backoff for name resolution
//! - Timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use atlas_client::RestCountriesClient;
//!
//! // Create a client against the public service
//! let client = RestCountriesClient::public();
//!
//! // Lookups are async; use them in an async context
//! ```

use crate::ClientError;
use atlas_domain::{BorderCode, CountryRecord, CountrySource};
use serde::Deserialize;
use std::time::Duration;

/// REST Countries v3.1 public endpoint
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1";

/// Default timeout for lookup requests (10 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default number of retry attempts for name resolution
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// HTTP client for the REST Countries lookup service
///
/// Name resolution retries transient failures with exponential backoff;
/// code lookups are single-attempt so that one slow neighbor cannot stall
/// an entire border fan-out.
pub struct RestCountriesClient {
    endpoint: String,
    client: reqwest::Client,
    max_retries: u32,
}

/// Wire shape of one country in a REST Countries response
///
/// `capital` and `borders` are omitted by the service for countries
/// without a capital or without land neighbors; both map to empty lists.
#[derive(Debug, Deserialize)]
pub struct CountryDto {
    name: NameDto,
    #[serde(default)]
    capital: Vec<String>,
    population: u64,
    region: String,
    flags: FlagsDto,
    #[serde(default)]
    borders: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct NameDto {
    common: String,
}

#[derive(Debug, Deserialize)]
struct FlagsDto {
    svg: String,
}

impl CountryDto {
    /// Convert the wire shape into the domain record
    pub fn into_record(self) -> CountryRecord {
        CountryRecord {
            name: self.name.common,
            capital: self.capital,
            population: self.population,
            region: self.region,
            flag_url: self.flags.svg,
            borders: self.borders.into_iter().map(BorderCode::new).collect(),
        }
    }
}

impl RestCountriesClient {
    /// Create a new client against a specific endpoint
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Base URL of the service, without a trailing slash
    ///   (e.g. "https://restcountries.com/v3.1")
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ClientError::Transport(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Create a client against the public REST Countries service
    pub fn public() -> Self {
        Self::new(DEFAULT_ENDPOINT).expect("default client configuration is valid")
    }

    /// Set the maximum number of retry attempts for name resolution
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Issue one GET and interpret the status per service conventions
    ///
    /// The service answers 404 when a name or code matches nothing; that
    /// is a legitimate empty match, not a failure, so it maps to an empty
    /// record list. Any other non-success status is an error.
    async fn fetch(&self, url: &str) -> Result<Vec<CountryRecord>, ClientError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("Request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status().as_u16()));
        }

        let dtos = response
            .json::<Vec<CountryDto>>()
            .await
            .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Ok(dtos.into_iter().map(CountryDto::into_record).collect())
    }

    /// Fetch with retry and exponential backoff
    ///
    /// Retries transport and status failures; a malformed body is returned
    /// immediately since retrying will not fix it.
    async fn fetch_with_retry(&self, url: &str) -> Result<Vec<CountryRecord>, ClientError> {
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.fetch(url).await {
                Ok(records) => return Ok(records),
                Err(e @ ClientError::InvalidResponse(_)) => return Err(e),
                Err(e) => {
                    tracing::debug!("Lookup attempt {} failed: {}", attempts + 1, e);
                    last_error = Some(e);
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| ClientError::Transport("Max retries exceeded".to_string())))
    }

    fn name_url(&self, name: &str, exact_match: bool) -> String {
        if exact_match {
            format!("{}/name/{}?fullText=true", self.endpoint, name)
        } else {
            format!("{}/name/{}", self.endpoint, name)
        }
    }

    fn code_url(&self, code: &BorderCode) -> String {
        format!("{}/alpha/{}", self.endpoint, code)
    }
}

impl CountrySource for RestCountriesClient {
    type Error = ClientError;

    async fn lookup_by_name(
        &self,
        name: &str,
        exact_match: bool,
    ) -> Result<Vec<CountryRecord>, Self::Error> {
        self.fetch_with_retry(&self.name_url(name, exact_match)).await
    }

    async fn lookup_by_code(
        &self,
        code: &BorderCode,
    ) -> Result<Vec<CountryRecord>, Self::Error> {
        // Single attempt: neighbor fetches are individually expendable
        self.fetch(&self.code_url(code)).await
    }
}
