//! Atlas CLI - Command-line country lookup tool.

use atlas_cli::commands;
use atlas_cli::repl;
use atlas_cli::{Cli, Command, Config, Formatter};
use atlas_client::RestCountriesClient;
use atlas_lookup::LookupSession;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Log to stderr so diagnostics never mix with rendered output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> atlas_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load or create config
    let config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Build the pipeline: client, then session over it
    let endpoint = cli.endpoint.unwrap_or_else(|| config.endpoint.clone());
    let client = RestCountriesClient::new(endpoint)?.with_max_retries(config.max_retries);
    let exact_match = config.exact_match && !cli.fuzzy;
    let session = LookupSession::new(client).with_exact_match(exact_match);

    // Handle commands
    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&session, &formatter).await?;
        }
        Some(Command::Lookup(args)) => {
            commands::execute_lookup(args, &session, &formatter).await?;
        }
    }

    Ok(())
}
