//! Configuration loader
//!
//! Builds the client configuration in three layers:
//! 1. Built-in defaults
//! 2. The first config file found (or an explicit path)
//! 3. Environment overrides
//!
//! ## Environment Variables
//! - `MAILTRIAGE_API_URL`: Classification service base URL
//! - `MAILTRIAGE_HTTP_TIMEOUT_SECS`: Transport timeout in seconds (`0` or
//!   empty disables it)
//! - `MAILTRIAGE_DATA_DIR`: Directory holding the history record
//! - `MAILTRIAGE_EPHEMERAL_HISTORY`: Keep history in memory only (true/false)
//! - `MAILTRIAGE_LOG_LEVEL`: Default log filter when `RUST_LOG` is unset
//! - `MAILTRIAGE_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./mailtriage.{json,toml}` then `./config.{json,toml}`
//! 2. The same names in the parent and grandparent directories
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use mailtriage_domain::{Config, Result, TriageError};
use url::Url;

const FILE_STEMS: [&str; 2] = ["mailtriage", "config"];
const FILE_EXTENSIONS: [&str; 2] = ["json", "toml"];

pub const ENV_API_URL: &str = "MAILTRIAGE_API_URL";
pub const ENV_HTTP_TIMEOUT: &str = "MAILTRIAGE_HTTP_TIMEOUT_SECS";
pub const ENV_DATA_DIR: &str = "MAILTRIAGE_DATA_DIR";
pub const ENV_EPHEMERAL: &str = "MAILTRIAGE_EPHEMERAL_HISTORY";
pub const ENV_LOG_LEVEL: &str = "MAILTRIAGE_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "MAILTRIAGE_LOG_JSON";

/// Load configuration: defaults, then a config file, then the environment.
///
/// With `explicit` set, that file must exist. Otherwise a missing config
/// file is not an error and the defaults are used.
///
/// The result is not validated: callers layer their own overrides on top
/// and then call [`validate`].
///
/// # Errors
/// Returns `TriageError::Config` if a file cannot be read or parsed, or an
/// environment value is malformed.
pub fn load(explicit: Option<PathBuf>) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => load_from_file(Some(path))?,
        None => match probe_config_paths() {
            Some(path) => load_from_file(Some(path))?,
            None => {
                tracing::debug!("No config file found, using defaults");
                Config::default()
            }
        },
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. JSON and TOML are
/// supported, detected by file extension. Sections and fields missing from
/// the file keep their defaults.
///
/// # Errors
/// Returns `TriageError::Config` if the file is missing, unreadable, or not
/// valid for its format.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(TriageError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            TriageError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| TriageError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Apply `MAILTRIAGE_*` environment variables on top of `config`.
///
/// Unset or empty variables leave the current value in place.
pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Some(url) = env_value(ENV_API_URL) {
        config.api.base_url = url;
    }

    if let Some(raw) = env_value(ENV_HTTP_TIMEOUT) {
        let secs = raw.parse::<u64>().map_err(|e| {
            TriageError::Config(format!("Invalid {ENV_HTTP_TIMEOUT} '{raw}': {e}"))
        })?;
        config.api.timeout_secs = (secs > 0).then_some(secs);
    }

    if let Some(dir) = env_value(ENV_DATA_DIR) {
        config.storage.data_dir = Some(PathBuf::from(dir));
    }
    config.storage.ephemeral = env_bool(ENV_EPHEMERAL, config.storage.ephemeral);

    if let Some(level) = env_value(ENV_LOG_LEVEL) {
        config.logging.level = level;
    }
    config.logging.json = env_bool(ENV_LOG_JSON, config.logging.json);

    Ok(())
}

/// Reject configurations the client cannot run with.
pub fn validate(config: &Config) -> Result<()> {
    let url = Url::parse(config.api.base_url.trim()).map_err(|e| {
        TriageError::Config(format!("Invalid API base URL '{}': {}", config.api.base_url, e))
    })?;

    if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
        return Err(TriageError::Config(format!(
            "API base URL must be http(s) with a host: {}",
            config.api.base_url
        )));
    }

    if config.api.timeout_secs == Some(0) {
        return Err(TriageError::Config("HTTP timeout must be positive when set".into()));
    }

    Ok(())
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| TriageError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| TriageError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(TriageError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the standard locations for a config file
///
/// Returns the first file that exists, or `None`.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend(cwd.ancestors().take(3).map(Path::to_path_buf));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots.iter().flat_map(|root| candidate_files(root)).find(|path| path.is_file())
}

fn candidate_files(root: &Path) -> Vec<PathBuf> {
    FILE_STEMS
        .iter()
        .flat_map(|stem| FILE_EXTENSIONS.iter().map(move |ext| root.join(format!("{stem}.{ext}"))))
        .collect()
}

/// Trimmed, non-empty value of an environment variable
fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive).
/// Returns `default` when the variable is unset or empty.
fn env_bool(key: &str, default: bool) -> bool {
    env_value(key)
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
