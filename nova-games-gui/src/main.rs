//! nova-games GUI
//!
//! Desktop browser for the game catalog. The catalog comes from the file
//! configured in `settings.toml`, or the built-in list when none is set.

use nova_games_gui::NovaGamesApp;
use nova_games_lib::{Browser, load_settings, resolve_catalog_source};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = load_settings();
    let source = resolve_catalog_source(None, &settings);
    let catalog = source.load().inspect_err(|e| {
        log::error!("Failed to load catalog from {}: {}", source.describe(), e);
    })?;
    log::info!("Loaded {} games from {}", catalog.len(), source.describe());

    let browser = Browser::new(catalog);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Nova Games")
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Nova Games",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(NovaGamesApp::new(cc, browser, &settings)))
        }),
    )?;
    Ok(())
}
