use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for setlist.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (SETLIST_* prefix)
/// 3. Config file (~/.config/setlist/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding `artists.json`, `dates.json`, `locations.json` and
    /// `relations.json`.
    ///
    /// Can be set via:
    /// - CLI: --data-dir /path/to/catalog
    /// - ENV: SETLIST_DATA_DIR
    /// - Config: data_dir = "/path/to/catalog"
    /// - Default: ~/.local/share/setlist
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Maximum number of suggestions shown by `setlist suggest`.
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logger settings handed to twyg at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: String,
    pub coloured: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("warn"),
            coloured: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            suggestion_limit: default_suggestion_limit(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/setlist/config.toml
    /// Reads environment variables with SETLIST_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("setlist");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Apply CLI overrides on top of the loaded configuration.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }
}

/// Returns: ~/.local/share/setlist (or platform equivalent)
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("setlist")
}

const fn default_suggestion_limit() -> usize {
    10
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/setlist/config.toml
/// - macOS: ~/Library/Application Support/setlist/config.toml
/// - Windows: %APPDATA%\setlist\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("setlist")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Setlist Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (SETLIST_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Directory with the decoded catalog collections:
# artists.json, dates.json, locations.json, relations.json
#
# Can also be set via:
# - CLI: setlist --data-dir /path/to/catalog search queen
# - Environment: SETLIST_DATA_DIR=/path/to/catalog
#
# Default: Platform-specific data directory
#data_dir = "/path/to/catalog"

# Number of suggestions printed by `setlist suggest`
suggestion_limit = 10

[logging]
# trace, debug, info, warn or error (`-v` forces debug)
level = "warn"
coloured = true
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.data_dir.as_os_str().is_empty());
        assert_eq!(config.suggestion_limit, 10);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_config_load() {
        // Should not fail even if config file doesn't exist
        let result = Config::load();
        assert!(result.is_ok());
    }

    #[test]
    fn test_cli_data_dir_overrides() {
        let custom = PathBuf::from("/tmp/catalog");
        let config = Config::default().with_data_dir(Some(custom.clone()));
        assert_eq!(config.data_dir, custom);

        let config = Config::default().with_data_dir(None);
        assert_eq!(config.data_dir, default_data_dir());
    }

    #[test]
    fn test_example_config_parses() {
        let config: Config = toml::from_str(example_config()).unwrap();
        assert_eq!(config.suggestion_limit, 10);
        assert!(config.logging.coloured);
    }
}
