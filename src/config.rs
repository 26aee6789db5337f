use std::path::{Path, PathBuf};

use color_eyre::{
    Result,
    eyre::{Context, OptionExt},
};
use serde::{Deserialize, Serialize};

fn default_database() -> String {
    "~/.local/share/fyyur/fyyur.db".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the SQLite database file
    #[serde(default = "default_database")]
    database: String,
    /// Full connection URL, takes precedence over `database`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    database_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            database_url: None,
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&contents)
            .wrap_err_with(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|path| path.join("fyyur").join("config.toml"))
    }

    /// Load the default config file, falling back to defaults when it does not exist
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Write the default config to the default path unless a file is already there
    pub fn create_default() -> Result<PathBuf> {
        let path = Self::config_path().ok_or_eyre("Could not determine config directory")?;
        if path.exists() {
            log::info!("Config already exists at: {}", path.display());
            return Ok(path);
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).wrap_err_with(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents =
            toml::to_string_pretty(&Self::default()).wrap_err("Failed to serialize config")?;
        std::fs::write(&path, contents)
            .wrap_err_with(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(path)
    }

    /// Expand ~ to home directory
    fn expand_path(&self, path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Get expanded database path
    pub fn database_path(&self) -> PathBuf {
        self.expand_path(&self.database)
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.database, default_database());
        assert!(config.database_url().is_none());
    }

    #[test]
    fn test_database_url_override() {
        let config = Config::from_toml(
            r#"
            database = "/var/lib/fyyur/app.db"
            database_url = "sqlite::memory:"
            "#,
        )
        .unwrap();

        assert_eq!(config.database_path(), PathBuf::from("/var/lib/fyyur/app.db"));
        assert_eq!(config.database_url(), Some("sqlite::memory:"));
    }

    #[test]
    fn test_expand_home_path() {
        let config = Config::default();
        let path = config.database_path();
        if let Some(home) = dirs::home_dir() {
            assert!(path.starts_with(home));
        }
        assert!(path.ends_with("fyyur/fyyur.db"));
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(Config::from_toml("database = [").is_err());
    }
}
