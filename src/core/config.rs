//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.hacker-stories/config.toml`. If missing on first run,
//! a commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HackerStoriesConfig {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SearchConfig {
    pub endpoint: Option<String>,
    pub default_query: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    pub path: Option<String>,
    pub enabled: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search?query=";
pub const DEFAULT_QUERY: &str = "React";
/// Environment variable overriding the search endpoint.
pub const ENDPOINT_ENV: &str = "HACKER_STORIES_ENDPOINT";
const CONFIG_DIR: &str = ".hacker-stories";
const STORAGE_FILE: &str = "storage.json";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub default_query: String,
    /// Where the persisted search term lives. `None` keeps it in memory only.
    pub storage_path: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.hacker-stories/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_DIR))
}

/// Returns the path to `~/.hacker-stories/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.hacker-stories/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `HackerStoriesConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<HackerStoriesConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(HackerStoriesConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(HackerStoriesConfig::default());
    }

    load_config_from(&path)
}

/// Parse the config file at `path`.
pub fn load_config_from(path: &Path) -> Result<HackerStoriesConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: HackerStoriesConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Hacker Stories Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [search]
# endpoint = "https://hn.algolia.com/api/v1/search?query="   # Or set HACKER_STORIES_ENDPOINT
# default_query = "React"            # Used when no search term has been saved yet

# [storage]
# path = "storage.json"              # Path relative to ~/.hacker-stories/
# enabled = true                     # false keeps the search term in memory only
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_endpoint` and `cli_query` are from CLI flags (None = not specified).
pub fn resolve(
    config: &HackerStoriesConfig,
    cli_endpoint: Option<&str>,
    cli_query: Option<&str>,
) -> ResolvedConfig {
    let env_endpoint = std::env::var(ENDPOINT_ENV).ok();
    resolve_layers(config, env_endpoint.as_deref(), cli_endpoint, cli_query)
}

/// `resolve` with the environment already read.
fn resolve_layers(
    config: &HackerStoriesConfig,
    env_endpoint: Option<&str>,
    cli_endpoint: Option<&str>,
    cli_query: Option<&str>,
) -> ResolvedConfig {
    // Endpoint: CLI → env → config → default
    let endpoint = cli_endpoint
        .or(env_endpoint)
        .map(|s| s.to_string())
        .or_else(|| config.search.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    // Default query: CLI → config → default
    let default_query = cli_query
        .map(|s| s.to_string())
        .or_else(|| config.search.default_query.clone())
        .unwrap_or_else(|| DEFAULT_QUERY.to_string());

    ResolvedConfig {
        endpoint,
        default_query,
        storage_path: resolve_storage_path(config),
    }
}

/// Relative storage paths are taken from `~/.hacker-stories/`.
fn resolve_storage_path(config: &HackerStoriesConfig) -> Option<PathBuf> {
    if config.storage.enabled == Some(false) {
        return None;
    }
    let file = config.storage.path.as_deref().unwrap_or(STORAGE_FILE);
    let file = Path::new(file);
    if file.is_absolute() {
        return Some(file.to_path_buf());
    }
    match config_dir() {
        Some(dir) => Some(dir.join(file)),
        None => {
            warn!("Could not determine home directory, search term will not be saved");
            None
        }
    }
}
