//! Config file store and path/credential resolution.

use super::theme::ThemeName;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;
use thiserror::Error;
use tracing::{debug, warn};

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "CURAQ_TUI_CONFIG";
/// Environment variable holding an API token; beats the stored one.
pub const TOKEN_ENV: &str = "CURAQ_MCP_TOKEN";
/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "CURAQ_API_URL";
/// Environment variable overriding the log file location.
pub const LOG_PATH_ENV: &str = "CURAQ_TUI_LOG";
/// Production API.
pub const DEFAULT_API_URL: &str = "https://curaq.app";

/// Errors that can occur while reading or writing the config file.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither `--config`, the environment, nor a home directory gave a path.
    #[error("Cannot determine config path: no home directory")]
    NoConfigDir,

    /// The file exists but could not be read.
    #[error("Failed to read config file at {path}: {reason}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// The file is not a JSON object of the expected shape.
    #[error("Invalid JSON in {path}: {reason}")]
    Parse {
        /// Path with invalid JSON.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// The file or its directory could not be written.
    #[error("Failed to write config file at {path}: {reason}")]
    Write {
        /// Path that failed to write.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },
}

/// Which list the app is configured to open on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartScreen {
    /// Unread queue.
    #[default]
    Unread,
    /// Already-read articles.
    Read,
}

impl StartScreen {
    /// Name as written in the config file.
    pub fn as_str(self) -> &'static str {
        match self {
            StartScreen::Unread => "unread",
            StartScreen::Read => "read",
        }
    }
}

impl fmt::Display for StartScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StartScreen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unread" => Ok(StartScreen::Unread),
            "read" => Ok(StartScreen::Read),
            other => Err(other.to_string()),
        }
    }
}

/// Contents of `config.json`.
///
/// Keys this program does not know about are kept in `extra` and written
/// back unchanged. Unrecognised `theme` or `startScreen` values read as
/// unset rather than failing the whole file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Stored API token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Preferred start screen.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient"
    )]
    pub start_screen: Option<StartScreen>,
    /// Selected theme.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient"
    )]
    pub theme: Option<ThemeName>,
    /// Unknown keys, preserved on save.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(_) => {
            warn!(?value, "Ignoring unrecognised config value");
            Ok(None)
        }
    }
}

impl Config {
    /// Theme to use, `default` when unset.
    pub fn theme_name(&self) -> ThemeName {
        self.theme.unwrap_or_default()
    }

    /// Start screen to use, `unread` when unset.
    pub fn start_screen(&self) -> StartScreen {
        self.start_screen.unwrap_or_default()
    }
}

/// Persistent config storage.
///
/// Every write is a read-modify-write of the whole file; there is no locking.
pub trait ConfigStore: Send {
    /// Read the current config. A missing file reads as the default config.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<Config, ConfigError>;

    /// Replace the stored config.
    ///
    /// # Errors
    ///
    /// Returns error if the file or its directory cannot be written.
    fn save(&self, config: &Config) -> Result<(), ConfigError>;

    /// Load, apply `change`, save, and return the saved config.
    ///
    /// # Errors
    ///
    /// Propagates load and save failures.
    fn update<F>(&self, change: F) -> Result<Config, ConfigError>
    where
        F: FnOnce(&mut Config),
        Self: Sized,
    {
        let mut config = self.load()?;
        change(&mut config);
        self.save(&config)?;
        Ok(config)
    }
}

/// JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    /// Store backed by `path`. Nothing is touched until the first call.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<Config, ConfigError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::Read {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let write_error = |e: std::io::Error| ConfigError::Write {
            path: self.path.clone(),
            reason: e.to_string(),
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }

        let json = serde_json::to_string_pretty(config).map_err(|e| ConfigError::Write {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        std::fs::write(&self.path, json).map_err(write_error)?;
        debug!(path = %self.path.display(), "Config saved");
        Ok(())
    }
}

/// In-memory store, for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    config: Mutex<Config>,
}

impl MemoryConfigStore {
    /// Store seeded with `config`.
    pub fn new(config: Config) -> Self {
        Self {
            config: Mutex::new(config),
        }
    }

    /// Snapshot of the stored config.
    pub fn snapshot(&self) -> Config {
        self.config
            .lock()
            .map(|c| c.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Result<Config, ConfigError> {
        Ok(self.snapshot())
    }

    fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let mut guard = self
            .config
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = config.clone();
        Ok(())
    }
}

/// `~/.config/curaq-tui/config.json`, or `None` without a home directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("curaq-tui").join("config.json"))
}

/// Resolve the config file path.
///
/// Precedence (highest to lowest):
/// 1. Explicit `cli_path` (`--config`)
/// 2. `CURAQ_TUI_CONFIG` environment variable
/// 3. Default path `~/.config/curaq-tui/config.json`
///
/// # Errors
///
/// Returns [`ConfigError::NoConfigDir`] when nothing yields a path.
pub fn resolve_config_path(cli_path: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = cli_path {
        return Ok(path);
    }
    if let Some(path) = non_empty_env(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }
    default_config_path().ok_or(ConfigError::NoConfigDir)
}

/// Resolve the log file path.
///
/// `CURAQ_TUI_LOG` wins; otherwise `<state dir>/curaq-tui/curaq-tui.log`,
/// falling back to `curaq-tui.log` in the working directory.
pub fn default_log_path() -> PathBuf {
    if let Some(path) = non_empty_env(LOG_PATH_ENV) {
        return PathBuf::from(path);
    }
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("curaq-tui").join("curaq-tui.log"),
        None => PathBuf::from("curaq-tui.log"),
    }
}

/// API base URL, `CURAQ_API_URL` or the production host.
pub fn api_base_url() -> String {
    non_empty_env(API_URL_ENV).unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Where the active token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// `CURAQ_MCP_TOKEN`.
    Environment,
    /// The config file.
    ConfigFile,
}

/// The token to authenticate with, and its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedToken {
    /// Bearer token.
    pub token: String,
    /// Origin.
    pub source: TokenSource,
}

/// Pick the token: a non-empty environment value beats the stored one.
pub fn resolve_token_from(env_token: Option<String>, config: &Config) -> Option<ResolvedToken> {
    if let Some(token) = env_token.filter(|t| !t.is_empty()) {
        return Some(ResolvedToken {
            token,
            source: TokenSource::Environment,
        });
    }
    config
        .token
        .clone()
        .filter(|t| !t.is_empty())
        .map(|token| ResolvedToken {
            token,
            source: TokenSource::ConfigFile,
        })
}

/// [`resolve_token_from`] with `CURAQ_MCP_TOKEN` read from the environment.
pub fn resolve_token(config: &Config) -> Option<ResolvedToken> {
    resolve_token_from(std::env::var(TOKEN_ENV).ok(), config)
}

/// First 8 and last 4 characters of a token, joined by `...`.
///
/// ```
/// use curaq_tui::config::mask_token;
///
/// assert_eq!(mask_token("abcdefghijklmnopqrstuvwxyz"), "abcdefgh...wxyz");
/// ```
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let head: String = chars.iter().take(8).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{head}...{tail}")
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
