//! sheet_tui - Terminal client for the character sheet service

pub mod app;
pub mod ui;

pub use app::App;
