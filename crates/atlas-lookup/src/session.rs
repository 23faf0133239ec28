//! Session module - one entry point per user submission
//!
//! A [`LookupSession`] runs the whole pipeline for a raw text submission
//! and guards against stale results: each submission bumps a generation
//! counter, and an outcome is only committed if its lookup is still the
//! newest one when the pipeline settles.

use crate::aggregate::aggregate;
use crate::error::LookupError;
use crate::outcome::LookupOutcome;
use crate::resolver::resolve;
use atlas_domain::{CountryQuery, CountrySource};
use std::sync::atomic::{AtomicU64, Ordering};

/// Runs lookups against a source with stale-result suppression
///
/// A new submission supersedes any lookup still in flight: the older
/// lookup completes, but its outcome is discarded instead of being handed
/// to the renderer. Exact-match resolution is the default; see
/// [`LookupSession::with_exact_match`].
pub struct LookupSession<S> {
    source: S,
    exact_match: bool,
    generation: AtomicU64,
}

impl<S: CountrySource> LookupSession<S> {
    /// Create a session over a country source
    pub fn new(source: S) -> Self {
        Self {
            source,
            exact_match: true,
            generation: AtomicU64::new(0),
        }
    }

    /// Toggle exact-match name resolution
    ///
    /// Exact match is the default: it guarantees at most one record per
    /// query and avoids the silent mismatches substring search permits.
    pub fn with_exact_match(mut self, exact_match: bool) -> Self {
        self.exact_match = exact_match;
        self
    }

    /// The generation of the most recent submission
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Perform one lookup for raw user text
    ///
    /// Returns `None` when a newer submission superseded this one while it
    /// was in flight; the caller must then render nothing for it. Any
    /// other result, including failures, comes back as `Some` outcome for
    /// the renderer.
    pub async fn lookup(&self, raw: &str) -> Option<LookupOutcome> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!("Lookup generation {} started", generation);

        let outcome = self.run(raw).await;

        // Commit only if no newer submission arrived meanwhile
        if self.generation.load(Ordering::SeqCst) == generation {
            Some(outcome)
        } else {
            tracing::debug!("Lookup generation {} superseded, discarding", generation);
            None
        }
    }

    async fn run(&self, raw: &str) -> LookupOutcome {
        let query = match CountryQuery::parse(raw) {
            Ok(query) => query,
            Err(e) => return LookupOutcome::Failure(LookupError::from(e)),
        };

        let country = match resolve(&self.source, &query, self.exact_match).await {
            Ok(country) => country,
            Err(e) => return LookupOutcome::Failure(e),
        };

        tracing::info!(
            "Resolved '{}' with {} border(s)",
            country.name,
            country.borders.len()
        );

        let borders = aggregate(&self.source, &country.borders).await;

        LookupOutcome::Success { country, borders }
    }
}
