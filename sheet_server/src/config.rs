//! Server configuration
//!
//! Settings come from an optional TOML file (`SHEET_CONFIG`) and are then
//! overridden by environment variables.

use axum::http::{HeaderValue, Method};
use serde::{Deserialize, Serialize};
use sheet_core::config::{load_roster, load_toml};
use sheet_core::{
    default_roster, Character, CharacterRepository, ConfigError, InMemoryRepository,
    JsonFileRepository, StoreError,
};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// JSON file to persist characters in; in-memory when unset
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    /// Roster TOML to seed from; the bundled roster when unset
    #[serde(default)]
    pub roster_file: Option<PathBuf>,
    /// Seed the roster into an empty repository on startup
    #[serde(default = "default_seed")]
    pub seed: bool,
    /// Comma separated origins, or "*"
    #[serde(default)]
    pub cors_allowed_origins: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: default_host(),
            port: default_port(),
            data_file: None,
            roster_file: None,
            seed: default_seed(),
            cors_allowed_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    3000
}
fn default_seed() -> bool {
    true
}

impl ServerConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let file = std::env::var("SHEET_CONFIG").ok().map(PathBuf::from);
        let mut config = Self::load(file.as_deref())?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load a TOML settings file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => load_toml(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply `SHEET_*` overrides read through `lookup`
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = lookup("SHEET_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("SHEET_PORT").or_else(|| lookup("PORT")) {
            self.port = port.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!("invalid port: {port}"))
            })?;
        }
        if let Some(path) = lookup("SHEET_DATA_FILE").filter(|s| !s.trim().is_empty()) {
            self.data_file = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup("SHEET_ROSTER_FILE").filter(|s| !s.trim().is_empty()) {
            self.roster_file = Some(PathBuf::from(path));
        }
        if let Some(seed) = lookup("SHEET_SEED") {
            self.seed = parse_flag(&seed).ok_or_else(|| {
                ConfigError::ValidationError(format!("invalid SHEET_SEED value: {seed}"))
            })?;
        }
        if let Some(origins) = lookup("CORS_ALLOWED_ORIGINS") {
            self.cors_allowed_origins = Some(origins);
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| {
                ConfigError::ValidationError(format!(
                    "invalid listen address {}:{}",
                    self.host, self.port
                ))
            })
    }

    /// Repository selected by `data_file`
    pub fn build_repository(&self) -> Result<Arc<dyn CharacterRepository>, StoreError> {
        match &self.data_file {
            Some(path) => Ok(Arc::new(JsonFileRepository::open(path)?)),
            None => Ok(Arc::new(InMemoryRepository::new())),
        }
    }

    /// Roster to seed with
    pub fn roster(&self) -> Result<Vec<Character>, ConfigError> {
        match &self.roster_file {
            Some(path) => load_roster(path),
            None => default_roster(),
        }
    }

    /// CORS layer for the configured origins; `None` leaves CORS off
    pub fn cors_layer(&self) -> Option<CorsLayer> {
        let allowed_origins = self
            .cors_allowed_origins
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())?;

        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([axum::http::header::CONTENT_TYPE]);

        if allowed_origins == "*" {
            return Some(cors.allow_origin(Any));
        }

        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }
        Some(cors.allow_origin(origins))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
