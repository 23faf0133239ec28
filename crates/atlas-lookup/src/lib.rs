//! Atlas Lookup Pipeline
//!
//! The data-retrieval and aggregation pipeline behind a country lookup:
//! validate the raw input, resolve the name to one canonical record,
//! fan out to the bordering countries, and hand back an ordered result.
//!
//! # Pipeline
//!
//! ```text
//! raw text -> CountryQuery -> resolve -> aggregate -> LookupOutcome
//! ```
//!
//! Validation and resolution failures abort the lookup; individual border
//! fetch failures degrade to absent slots and never abort. A
//! [`LookupSession`] additionally discards outcomes of lookups that were
//! superseded by a newer submission.

#![warn(missing_docs)]

pub mod aggregate;
pub mod error;
pub mod outcome;
pub mod resolver;
pub mod session;

pub use aggregate::aggregate;
pub use error::LookupError;
pub use outcome::LookupOutcome;
pub use resolver::resolve;
pub use session::LookupSession;
