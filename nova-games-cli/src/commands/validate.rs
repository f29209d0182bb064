use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use nova_games_catalog::{derive_categories, validate};
use nova_games_lib::CatalogSource;

use crate::error::CliError;

/// Load a catalog without rejecting it and report every integrity problem.
pub(crate) fn run_validate(source: &CatalogSource) -> Result<(), CliError> {
    let records = source.load_records()?;
    let issues = validate(&records);

    log::info!(
        "{}",
        source.describe().if_supports_color(Stdout, |t| t.bold())
    );
    log::info!(
        "  {} games, {} categories",
        records.len(),
        derive_categories(&records).len() - 1
    );

    if issues.is_empty() {
        log::info!("  {}", "OK".if_supports_color(Stdout, |t| t.green()));
        return Ok(());
    }

    for issue in &issues {
        log::warn!("{}", issue);
    }
    Err(CliError::InvalidCatalog(issues.len()))
}
