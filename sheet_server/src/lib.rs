//! sheet_server - HTTP API over the character sheet service

pub mod api;
pub mod config;

pub use api::{router, ApiError};
pub use config::ServerConfig;
