//! Command implementations.

pub mod lookup;

pub use self::lookup::execute_lookup;
