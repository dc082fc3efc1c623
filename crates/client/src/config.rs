// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration
//!
//! Settings come from, highest precedence first: explicit overrides (CLI
//! flags), environment variables, a TOML config file, built-in defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Backend used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api/v1/";

/// Request timeout used when nothing else is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(100);

pub const ENV_API_URL: &str = "WAYBILL_API_URL";
pub const ENV_TOKEN: &str = "WAYBILL_TOKEN";
pub const ENV_TIMEOUT_MS: &str = "WAYBILL_TIMEOUT_MS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid {var}: '{value}' is not a number of milliseconds")]
    InvalidTimeout { var: &'static str, value: String },
}

/// Resolved settings for talking to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL, always ending in `/`
    pub api_base_url: Url,
    /// Bearer token issued by the auth provider
    pub token: Option<String>,
    pub timeout: Duration,
}

/// Contents of `config.toml`
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    /// Humantime string such as `"30s"`
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

impl ConfigFile {
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }
}

/// Values given explicitly on the command line
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub api_url: Option<String>,
    pub token: Option<String>,
    /// Config file to read instead of the default location
    pub config_path: Option<PathBuf>,
}

impl ClientConfig {
    /// Config for `api_url` with no token and the default timeout
    pub fn for_url(api_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: normalize_base_url(api_url)?,
            token: None,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Resolve from overrides, the process environment and the config file
    pub fn resolve(overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        Self::resolve_with(overrides, |var| std::env::var(var).ok())
    }

    /// Resolve with a custom environment lookup
    pub fn resolve_with(
        overrides: &ConfigOverrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let file = match &overrides.config_path {
            // An explicit path must exist
            Some(path) => ConfigFile::load(path)?,
            None => match default_config_path() {
                Some(path) if path.is_file() => ConfigFile::load(&path)?,
                _ => ConfigFile::default(),
            },
        };
        Self::merge(overrides, &env, file)
    }

    fn merge(
        overrides: &ConfigOverrides,
        env: &impl Fn(&str) -> Option<String>,
        file: ConfigFile,
    ) -> Result<Self, ConfigError> {
        let api_url = overrides
            .api_url
            .clone()
            .or_else(|| env(ENV_API_URL))
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let token = overrides
            .token
            .clone()
            .or_else(|| env(ENV_TOKEN))
            .or(file.token)
            .filter(|t| !t.trim().is_empty());

        let timeout = match env(ENV_TIMEOUT_MS) {
            Some(value) => parse_duration_ms(ENV_TIMEOUT_MS, &value)?,
            None => file.timeout.unwrap_or(DEFAULT_TIMEOUT),
        };

        Ok(Self {
            api_base_url: normalize_base_url(&api_url)?,
            token,
            timeout,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// `<config dir>/waybill/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("waybill").join("config.toml"))
}

/// Parse a base URL and make sure it ends in `/` so relative joins keep
/// the full path prefix.
pub fn normalize_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn parse_duration_ms(var: &'static str, value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidTimeout {
            var,
            value: value.to_string(),
        })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
