//! Shared application settings (catalog location, presentation toggles).
//!
//! Both CLI and GUI read `~/.config/nova-games/settings.toml` through these
//! functions so catalog resolution is the same in every frontend.

use std::io;
use std::path::{Path, PathBuf};

use nova_games_catalog::{
    Catalog, CatalogError, GameRecord, builtin_catalog, builtin_records, load_catalog, load_records,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub general: GeneralSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CatalogSettings {
    /// Catalog file to load instead of the built-in list.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Fade/slide between the browsing and player views.
    #[serde(default = "default_true")]
    pub animate_transitions: bool,
}

fn default_true() -> bool {
    true
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            animate_transitions: true,
        }
    }
}

/// Returns `~/.config/nova-games/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("nova-games").join("settings.toml")
}

/// Load settings from the default location, returning defaults if missing or corrupt.
pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// Load settings from `path`, returning defaults if missing or corrupt.
pub fn load_settings_from(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Failed to parse settings at {}: {}", path.display(), e);
            Settings::default()
        }),
        Err(_) => Settings::default(),
    }
}

/// Save settings to the default location.
pub fn save_settings(settings: &Settings) -> io::Result<()> {
    save_settings_to(settings, &settings_path())
}

/// Save settings atomically (write to temp, then rename).
pub fn save_settings_to(settings: &Settings, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(settings).map_err(io::Error::other)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The list compiled into the binary.
    Builtin,
    File(PathBuf),
}

impl CatalogSource {
    pub fn load(&self) -> Result<Catalog, CatalogError> {
        match self {
            CatalogSource::Builtin => builtin_catalog(),
            CatalogSource::File(path) => load_catalog(path),
        }
    }

    /// Read the records without validating them.
    pub fn load_records(&self) -> Result<Vec<GameRecord>, CatalogError> {
        match self {
            CatalogSource::Builtin => builtin_records(),
            CatalogSource::File(path) => load_records(path),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Builtin => "built-in catalog".to_string(),
            CatalogSource::File(path) => path.display().to_string(),
        }
    }
}

/// Resolve the catalog source using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `catalog.path` in `settings.toml`
/// 3. The built-in catalog
pub fn resolve_catalog_source(cli_override: Option<PathBuf>, settings: &Settings) -> CatalogSource {
    if let Some(p) = cli_override {
        return CatalogSource::File(p);
    }
    match &settings.catalog.path {
        Some(p) if !p.as_os_str().is_empty() => CatalogSource::File(p.clone()),
        _ => CatalogSource::Builtin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn resolve_prefers_cli_override() {
        let settings = Settings {
            catalog: CatalogSettings {
                path: Some(PathBuf::from("/saved/games.json")),
            },
            ..Default::default()
        };
        let source = resolve_catalog_source(Some(PathBuf::from("/cli/games.yaml")), &settings);
        assert_eq!(source, CatalogSource::File(PathBuf::from("/cli/games.yaml")));
    }

    #[test]
    fn resolve_uses_saved_path() {
        let settings = Settings {
            catalog: CatalogSettings {
                path: Some(PathBuf::from("/saved/games.json")),
            },
            ..Default::default()
        };
        assert_eq!(
            resolve_catalog_source(None, &settings),
            CatalogSource::File(PathBuf::from("/saved/games.json"))
        );
    }

    #[test]
    fn resolve_falls_back_to_builtin() {
        assert_eq!(
            resolve_catalog_source(None, &Settings::default()),
            CatalogSource::Builtin
        );
        let empty = Settings {
            catalog: CatalogSettings {
                path: Some(PathBuf::new()),
            },
            ..Default::default()
        };
        assert_eq!(resolve_catalog_source(None, &empty), CatalogSource::Builtin);
    }

    #[test]
    fn builtin_source_loads() {
        let catalog = CatalogSource::Builtin.load().unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn save_then_load_settings() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("settings.toml");
        let settings = Settings {
            catalog: CatalogSettings {
                path: Some(PathBuf::from("/games/catalog.yaml")),
            },
            general: GeneralSettings {
                animate_transitions: false,
            },
        };
        save_settings_to(&settings, &path).unwrap();
        assert!(!path.with_extension("toml.tmp").exists());
        assert_eq!(load_settings_from(&path), settings);
    }

    #[test]
    fn missing_or_corrupt_settings_use_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        assert_eq!(load_settings_from(&path), Settings::default());

        std::fs::write(&path, "this is = = not toml").unwrap();
        assert_eq!(load_settings_from(&path), Settings::default());
    }

    #[test]
    fn partial_settings_fill_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "[catalog]\npath = \"/x/games.json\"\n").unwrap();
        let settings = load_settings_from(&path);
        assert_eq!(settings.catalog.path, Some(PathBuf::from("/x/games.json")));
        assert!(settings.general.animate_transitions);
    }
}
