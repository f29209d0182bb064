//! nova-games CLI
//!
//! Command-line tooling for game catalogs: list and search entries, and
//! catch malformed catalogs before they are shipped to the browser.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;
use nova_games_lib::{CatalogSource, load_settings, resolve_catalog_source};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = load_settings();
    let source = resolve_catalog_source(cli.catalog, &settings);

    match cli.command {
        Commands::List { search, category } => {
            let catalog = load(&source)?;
            commands::list::run_list(&catalog, &search, category.as_deref())
        }
        Commands::Categories => {
            let catalog = load(&source)?;
            commands::list::run_categories(&catalog);
            Ok(())
        }
        Commands::Show { id } => {
            let catalog = load(&source)?;
            commands::list::run_show(&catalog, &id)
        }
        Commands::Validate { path } => {
            let source = match path {
                Some(p) => CatalogSource::File(p),
                None => source,
            };
            commands::validate::run_validate(&source)
        }
        Commands::Config { action } => match action {
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::Show => {
                commands::config::run_config_show(&settings, &source);
                Ok(())
            }
            ConfigAction::SetCatalog { path } => {
                commands::config::run_config_set_catalog(settings, &path)
            }
            ConfigAction::ClearCatalog => commands::config::run_config_clear_catalog(settings),
        },
    }
}

fn load(source: &CatalogSource) -> Result<nova_games_catalog::Catalog, CliError> {
    log::debug!("Loading {}", source.describe());
    Ok(source.load()?)
}

/// Route `log` output to stdout.
///
/// Normal runs print bare messages (the CLI's output *is* its log);
/// `--verbose` switches to the timestamped default format.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        log::LevelFilter::Warn
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout);

    if !verbose {
        builder.format(|buf, record| match record.level() {
            log::Level::Error => writeln!(buf, "error: {}", record.args()),
            log::Level::Warn => writeln!(buf, "warning: {}", record.args()),
            _ => writeln!(buf, "{}", record.args()),
        });
    }

    builder.init();
}
