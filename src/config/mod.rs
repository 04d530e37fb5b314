//! Configuration module.
//!
//! Config file storage, key bindings and colour themes.

pub mod keybindings;
pub mod loader;
pub mod theme;

pub use keybindings::KeyBindings;
pub use loader::{
    api_base_url, default_config_path, default_log_path, mask_token, resolve_config_path,
    resolve_token, resolve_token_from, Config, ConfigError, ConfigStore, FileConfigStore,
    MemoryConfigStore, ResolvedToken, StartScreen, TokenSource, API_URL_ENV, CONFIG_PATH_ENV,
    DEFAULT_API_URL, LOG_PATH_ENV, TOKEN_ENV,
};
pub use theme::{ThemeColors, ThemeName, UnknownTheme};
