//! Atlas CLI library.
//!
//! This library provides the core functionality for the Atlas command-line
//! interface, including configuration management, command execution, and
//! output formatting. The formatter is the rendering collaborator of the
//! lookup pipeline: it consumes a `LookupOutcome` and paints it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
