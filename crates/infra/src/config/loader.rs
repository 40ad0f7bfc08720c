//! Configuration loader
//!
//! Loads gateway and logging configuration from environment variables or
//! files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the base URL is not set, falls back to loading from file
//! 3. Searches multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `SALESTRAIL_API_BASE_URL`: Backend base URL (required for env loading)
//! - `SALESTRAIL_API_TIMEOUT_SECS`: Request timeout in seconds (default 30)
//! - `SALESTRAIL_API_TOKEN`: Bearer token; also overrides a file-loaded token
//! - `SALESTRAIL_LOG_LEVEL`: Default log filter (default `info`)
//! - `SALESTRAIL_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader searches `config.{json,toml}` and `salestrail.{json,toml}` in the
//! current directory and its two parents, then next to the executable.

use std::path::{Path, PathBuf};

use salestrail_domain::{Config, GatewayConfig, LoggingConfig, Result, SalesTrailError};

use crate::gateway::validate_base_url;

const ENV_BASE_URL: &str = "SALESTRAIL_API_BASE_URL";
const ENV_TIMEOUT: &str = "SALESTRAIL_API_TIMEOUT_SECS";
const ENV_TOKEN: &str = "SALESTRAIL_API_TOKEN";
const ENV_LOG_LEVEL: &str = "SALESTRAIL_LOG_LEVEL";
const ENV_LOG_JSON: &str = "SALESTRAIL_LOG_JSON";

const FILE_NAMES: [&str; 4] = ["config.json", "config.toml", "salestrail.json", "salestrail.toml"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `SalesTrailError::Config` if neither source yields a valid
/// configuration.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `SalesTrailError::Config` if the base URL is missing or any value
/// is invalid.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var(ENV_BASE_URL)?;
    let timeout_secs = match std::env::var(ENV_TIMEOUT) {
        Ok(raw) => raw.trim().parse::<u64>().map_err(|e| {
            SalesTrailError::Config(format!("Invalid {ENV_TIMEOUT} value {raw:?}: {e}"))
        })?,
        Err(_) => GatewayConfig::default().timeout_secs,
    };

    let defaults = LoggingConfig::default();
    let config = Config {
        gateway: GatewayConfig { base_url, timeout_secs, auth_token: env_token() },
        logging: LoggingConfig {
            level: std::env::var(ENV_LOG_LEVEL).unwrap_or(defaults.level),
            json: env_bool(ENV_LOG_JSON, defaults.json),
        },
    };

    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, searches the standard locations. A token set in
/// `SALESTRAIL_API_TOKEN` takes precedence over one in the file.
///
/// # Errors
/// Returns `SalesTrailError::Config` if no file is found, it cannot be
/// parsed, or its values are invalid.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SalesTrailError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => find_config_path().ok_or_else(|| {
            SalesTrailError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SalesTrailError::Config(format!("Failed to read config file: {}", e)))?;

    let mut config = parse_config(&contents, &config_path)?;
    if let Some(token) = env_token() {
        config.gateway.auth_token = Some(token);
    }

    validate(&config)?;
    Ok(config)
}

/// Parse configuration from string content, detecting the format by
/// extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| SalesTrailError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| SalesTrailError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(SalesTrailError::Config(format!("Unsupported config format: {}", extension))),
    }
}

fn validate(config: &Config) -> Result<()> {
    validate_base_url(&config.gateway.base_url)?;
    if config.gateway.timeout_secs == 0 {
        return Err(SalesTrailError::Config("timeout_secs must be greater than zero".into()));
    }
    Ok(())
}

/// Search the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn find_config_path() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| {
            SalesTrailError::Config(format!("Missing required environment variable: {}", key))
        })
}

fn env_token() -> Option<String> {
    std::env::var(ENV_TOKEN).ok().filter(|token| !token.trim().is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
