//! Atlas Domain Layer
//!
//! This crate contains the core domain model for Atlas, a country profile
//! lookup tool. It has zero external dependencies and defines the
//! fundamental value objects and trait interfaces that all other layers
//! depend upon.
//!
//! ## Key Concepts
//!
//! - **CountryQuery**: validated user input - trimmed, non-empty, non-numeric
//! - **CountryRecord**: the canonical profile of a country
//! - **BorderCode**: opaque identifier referencing a neighboring country
//! - **BorderResult**: ordered neighbor profiles with absent slots for failures
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - No external crate dependencies
//! - Pure business logic only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod border;
pub mod country;
pub mod query;
pub mod traits;

// Re-exports for convenience
pub use border::BorderResult;
pub use country::{BorderCode, CountryRecord};
pub use query::{CountryQuery, ValidationError};
pub use traits::CountrySource;
