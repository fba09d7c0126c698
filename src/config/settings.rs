//! Bot settings loaded from `config.toml`.
//!
//! Every key is optional; a missing file yields the defaults. Values are
//! validated once at startup so the rest of the bot can trust them.

use crate::{
    core::{browser, pagination},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::{path::Path, time::Duration};
use tracing::{debug, info};

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_VAR: &str = "FAKEBB_CONFIG";

/// Config file read when `FAKEBB_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Application settings
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Text command prefix
    pub prefix: String,
    /// Role required to edit teams
    pub access_role: String,
    /// Characters per page in the team listing
    pub page_size: usize,
    /// Seconds of inactivity before a team listing closes (60..=600)
    pub list_timeout_secs: u64,
    /// Whether creating a team also requires `access_role`
    pub require_access_for_create: bool,
    /// Database URL; `DATABASE_URL` takes precedence
    pub database_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prefix: "!".to_string(),
            access_role: "Bot Access".to_string(),
            page_size: pagination::DEFAULT_PAGE_SIZE,
            list_timeout_secs: browser::MIN_TIMEOUT.as_secs(),
            require_access_for_create: false,
            database_url: None,
        }
    }
}

impl Settings {
    /// Inactivity timeout for team listings.
    #[must_use]
    pub const fn list_timeout(&self) -> Duration {
        Duration::from_secs(self.list_timeout_secs)
    }

    /// Checks value ranges.
    pub fn validate(self) -> Result<Self> {
        if self.prefix.trim().is_empty() {
            return Err(Error::Config {
                message: "prefix cannot be empty".to_string(),
            });
        }
        if self.page_size == 0 {
            return Err(Error::Config {
                message: "page_size must be greater than zero".to_string(),
            });
        }
        let timeout = self.list_timeout();
        if timeout < browser::MIN_TIMEOUT || timeout > browser::MAX_TIMEOUT {
            return Err(Error::Config {
                message: format!(
                    "list_timeout_secs must be between {} and {}, got {}",
                    browser::MIN_TIMEOUT.as_secs(),
                    browser::MAX_TIMEOUT.as_secs(),
                    self.list_timeout_secs
                ),
            });
        }
        Ok(self)
    }
}

/// Parses and validates settings from TOML text.
pub fn parse_settings(contents: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;
    settings.validate()
}

/// Loads settings from `path`, falling back to defaults when the file is absent.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path);

    if !path.exists() {
        info!("No config file at {:?}, using defaults", path);
        return Settings::default().validate();
    }

    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path:?}: {e}"),
    })?;
    parse_settings(&contents)
}

/// Loads settings from `FAKEBB_CONFIG` or `./config.toml`.
pub fn load_default_settings() -> Result<Settings> {
    let path =
        std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_settings(path)
}
