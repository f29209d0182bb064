use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use nova_games_catalog::load_catalog;
use nova_games_lib::settings::{Settings, save_settings, settings_path};
use nova_games_lib::CatalogSource;

use crate::error::CliError;

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}

/// Show the settings file, its contents, and the catalog they resolve to.
pub(crate) fn run_config_show(settings: &Settings, source: &CatalogSource) {
    let path = settings_path();
    let status = if path.exists() {
        "(exists)".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "(not found, using defaults)"
            .if_supports_color(Stdout, |t| t.dimmed())
            .to_string()
    };
    log::info!(
        "Settings file: {} {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        status
    );
    log::info!("Catalog:       {}", source.describe());
    log::info!("");

    match toml::to_string_pretty(settings) {
        Ok(text) => {
            for line in text.lines() {
                log::info!("  {}", line);
            }
        }
        Err(e) => log::warn!("Could not render settings: {}", e),
    }
}

/// Make `path` the default catalog after checking that it loads cleanly.
pub(crate) fn run_config_set_catalog(mut settings: Settings, path: &Path) -> Result<(), CliError> {
    let path = std::fs::canonicalize(path)
        .map_err(|e| CliError::config(format!("{}: {}", path.display(), e)))?;
    let catalog = load_catalog(&path)?;

    settings.catalog.path = Some(path.clone());
    save_settings(&settings)?;
    log::info!(
        "Default catalog set to {} ({} games)",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        catalog.len()
    );
    Ok(())
}

/// Forget the configured catalog file.
pub(crate) fn run_config_clear_catalog(mut settings: Settings) -> Result<(), CliError> {
    if settings.catalog.path.take().is_none() {
        log::info!("Already using the built-in catalog");
        return Ok(());
    }
    save_settings(&settings)?;
    log::info!("Using the built-in catalog");
    Ok(())
}
