//! View state and settings shared by the nova-games frontends.
//!
//! [`Browser`] is the single owner of UI state: it holds the catalog and the
//! [`ViewState`], caches the derived category and result lists, and applies
//! [`Action`]s coming from the presentation layer.

pub mod browser;
pub mod settings;
pub mod view;

pub use browser::Browser;
pub use settings::{CatalogSource, Settings, load_settings, resolve_catalog_source, save_settings};
pub use view::{Action, Mode, ViewEffect, ViewState};

pub use nova_games_catalog as catalog;
