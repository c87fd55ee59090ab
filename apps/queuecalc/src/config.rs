//! # Configuration
//!
//! Layered application configuration.
//!
//! Resolution order (highest priority first):
//! 1. CLI flags (applied by the command layer)
//! 2. Environment variables (`QUEUECALC_*`)
//! 3. Config file (`--config <path>`, else `queuecalc.toml` in the working directory)
//! 4. Compiled defaults
//!
//! ## Environment Variables
//!
//! - `QUEUECALC_HOST`, `QUEUECALC_PORT`: HTTP bind address
//! - `QUEUECALC_RATE_LIMIT`: requests per second, 0 disables
//! - `QUEUECALC_CORS_ORIGINS`: comma-separated origins, or `*`
//! - `QUEUECALC_DIGITS`: decimal places in text output
//! - `QUEUECALC_UNITS`: `per_hour`, `per_min`, `per_sec` or `none`

use crate::error::AppError;
use crate::presenter::{DEFAULT_DIGITS, MAX_DIGITS, TimeUnit};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File picked up from the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "queuecalc.toml";

/// Default rate limit: 100 requests per second.
pub const DEFAULT_RATE_LIMIT: u32 = 100;

/// Largest config file we are willing to read (64 KB).
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

// =============================================================================
// CONFIG STRUCTURES
// =============================================================================

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Requests per second; 0 disables rate limiting.
    pub rate_limit: u32,
    /// Comma-separated allowed origins, `*` for any. `None` means localhost only.
    pub cors_origins: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            rate_limit: DEFAULT_RATE_LIMIT,
            cors_origins: None,
        }
    }
}

/// Text output settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub digits: usize,
    pub units: TimeUnit,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
            units: TimeUnit::Unitless,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub display: DisplayConfig,
}

// =============================================================================
// LOADING
// =============================================================================

impl AppConfig {
    /// Load configuration from file and process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => {
                let default_path = Path::new(CONFIG_FILE_NAME);
                if default_path.is_file() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, AppError> {
        toml::from_str(toml_str).map_err(|e| AppError::Config(format!("Invalid TOML: {}", e)))
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            AppError::Io(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(AppError::Config(format!(
                "Config file {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::Io(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Self::from_toml(&content)
    }

    /// Apply `QUEUECALC_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("QUEUECALC_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("QUEUECALC_PORT") {
            self.server.port = parse_env("QUEUECALC_PORT", &port)?;
        }
        if let Some(limit) = lookup("QUEUECALC_RATE_LIMIT") {
            self.server.rate_limit = parse_env("QUEUECALC_RATE_LIMIT", &limit)?;
        }
        if let Some(origins) = lookup("QUEUECALC_CORS_ORIGINS") {
            self.server.cors_origins = Some(origins);
        }
        if let Some(digits) = lookup("QUEUECALC_DIGITS") {
            self.display.digits = parse_env("QUEUECALC_DIGITS", &digits)?;
        }
        if let Some(units) = lookup("QUEUECALC_UNITS") {
            self.display.units = TimeUnit::from_name(&units).ok_or_else(|| {
                AppError::Config(format!("QUEUECALC_UNITS: unknown unit '{}'", units))
            })?;
        }
        Ok(())
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.server.port == 0 {
            return Err(AppError::Config(
                "server.port must be greater than 0".to_string(),
            ));
        }
        if self.server.host.trim().is_empty() {
            return Err(AppError::Config("server.host must not be empty".to_string()));
        }
        if self.display.digits > MAX_DIGITS {
            return Err(AppError::Config(format!(
                "display.digits must be between 0 and {}, got {}",
                MAX_DIGITS, self.display.digits
            )));
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, AppError> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::Config(format!("{}: invalid value '{}'", key, value)))
}

// =============================================================================
// TESTS
// =============================================================================
