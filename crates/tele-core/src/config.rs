//! Configuration management for tele.
//!
//! Loads configuration from ${TELE_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for tele configuration and data directories.
    //!
    //! TELE_HOME resolution order:
    //! 1. TELE_HOME environment variable (if set)
    //! 2. ~/.config/tele (default)
    //! 3. ./.tele when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the tele home directory.
    pub fn tele_home() -> PathBuf {
        if let Ok(home) = std::env::var("TELE_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".tele"),
            |h| h.join(".config").join("tele"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        tele_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        tele_home().join("logs")
    }
}

/// Colors for the prompter screen.
///
/// Values are kept as strings and parsed by the TUI, which falls back to the
/// default for anything it cannot parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub header: String,
    pub center_fg: String,
    pub center_bg: String,
    pub near: String,
    pub mid: String,
    pub far: String,
    pub error: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            header: "12".to_string(),
            center_fg: "#FFFF00".to_string(),
            center_bg: "#333333".to_string(),
            near: "#FFFFFF".to_string(),
            mid: "#888888".to_string(),
            far: "#444444".to_string(),
            error: "red".to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extensions (without the dot) the file browser accepts.
    pub allowed_extensions: Vec<String>,

    /// Starting directory for the file browser. Home directory when unset.
    pub start_dir: Option<PathBuf>,

    /// Show dotfiles in the file browser.
    pub show_hidden: bool,

    /// Default log filter when TELE_LOG is not set.
    pub log_level: String,

    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Config {
    const DEFAULT_EXTENSIONS: &[&str] = &["txt", "md", "markdown", "rst", "rs", "toml"];
    const DEFAULT_LOG_LEVEL: &str = "info";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the commented default config to `path`.
    ///
    /// Refuses to overwrite an existing file.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Directory the file browser should open in.
    ///
    /// Falls back to the home directory, then the current directory.
    pub fn browser_start_dir(&self) -> PathBuf {
        self.start_dir
            .clone()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allowed_extensions: Self::DEFAULT_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
            start_dir: None,
            show_hidden: false,
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
            theme: ThemeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.log_level, "info");
        assert!(config.allowed_extensions.contains(&"md".to_string()));
        assert_eq!(config.start_dir, None);
    }

    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            "allowed_extensions = [\"txt\"]\n[theme]\nnear = \"white\"\n",
        )
        .unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.allowed_extensions, vec!["txt".to_string()]);
        assert_eq!(config.theme.near, "white");
        assert_eq!(config.theme.center_fg, "#FFFF00");
        assert!(!config.show_hidden);
    }

    #[test]
    fn test_load_invalid_toml_is_an_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "allowed_extensions = 3\n").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn test_init_creates_config_with_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        assert!(config_path.exists());
        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# start_dir ="));

        // The template must round-trip into the same defaults.
        let loaded = Config::load_from(&config_path).unwrap();
        let defaults = Config::default();
        assert_eq!(loaded.allowed_extensions, defaults.allowed_extensions);
        assert_eq!(loaded.theme, defaults.theme);
    }

    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "").unwrap();

        let result = Config::init(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_browser_start_dir_prefers_configured_dir() {
        let config = Config {
            start_dir: Some(PathBuf::from("/srv/scripts")),
            ..Config::default()
        };
        assert_eq!(config.browser_start_dir(), PathBuf::from("/srv/scripts"));
    }
}
