//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Atlas CLI - Look up country profiles and their bordering countries.
#[derive(Debug, Parser)]
#[command(name = "atlas")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Country service endpoint (overrides the config file)
    #[arg(short, long, global = true, env = "ATLAS_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Allow fuzzy (substring) name matching instead of exact match
    #[arg(long, global = true)]
    pub fuzzy: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (names only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up one country and its bordering countries
    Lookup(LookupArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the lookup command.
#[derive(Debug, Parser)]
pub struct LookupArgs {
    /// Country name to look up (e.g. "France")
    pub name: String,
}
