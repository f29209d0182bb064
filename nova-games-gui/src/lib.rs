//! nova-games GUI
//!
//! egui frontend over [`nova_games_lib::Browser`]. Views collect [`Action`]s
//! while drawing; the app applies them once the frame is laid out and turns
//! the resulting effects into window commands.
//!
//! [`Action`]: nova_games_lib::Action

pub mod app;
pub mod theme;
pub mod transition;
pub mod views;
pub mod widgets;

pub use app::NovaGamesApp;
