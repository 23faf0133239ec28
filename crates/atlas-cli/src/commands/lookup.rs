//! Lookup command implementation.

use crate::cli::LookupArgs;
use crate::error::Result;
use crate::output::Formatter;
use atlas_domain::CountrySource;
use atlas_lookup::LookupSession;

/// Execute the lookup command.
pub async fn execute_lookup<S: CountrySource>(
    args: LookupArgs,
    session: &LookupSession<S>,
    formatter: &Formatter,
) -> Result<()> {
    // None means a newer submission superseded this one; paint nothing
    if let Some(outcome) = session.lookup(&args.name).await {
        println!("{}", formatter.format_outcome(&outcome)?);
    }

    Ok(())
}
