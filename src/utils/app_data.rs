use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_NAME: &str = "pagesearch";
const CONFIG_FILE: &str = "config.json";

/// Application configuration stored in the app data directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Number of extracted pages kept in memory per session
    #[serde(default = "default_page_cache_size")]
    pub page_cache_size: usize,

    /// Print the page with matches highlighted after a comparison
    #[serde(default = "default_true")]
    pub highlight: bool,

    /// Use colored output when the terminal supports it
    #[serde(default = "default_true")]
    pub color: bool,

    /// Compare pages in parallel during a scan
    #[serde(default = "default_true")]
    pub parallel_scan: bool,
}

fn default_page_cache_size() -> usize {
    64
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_cache_size: default_page_cache_size(),
            highlight: true,
            color: true,
            parallel_scan: true,
        }
    }
}

impl AppConfig {
    /// Load config from the app data directory, or return default if not found
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "loading config");
            let content = fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            let config: AppConfig = serde_json::from_str(&content)
                .context("Failed to parse config file")?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the app data directory
    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(&config_path, content)
            .context("Failed to write config file")?;
        Ok(())
    }

    /// Page cache capacity, never zero
    pub fn effective_page_cache_size(&self) -> usize {
        self.page_cache_size.max(1)
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let app_dir = get_app_data_dir()?;
    Ok(app_dir.join(CONFIG_FILE))
}

/// Get the application data directory
pub fn get_app_data_dir() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir()
            .map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: use XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    };

    let base = base.context("Could not determine app data directory")?;
    let app_dir = base.join(APP_NAME);

    fs::create_dir_all(&app_dir)?;
    Ok(app_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.page_cache_size, 64);
        assert!(config.highlight);
        assert!(config.color);
        assert!(config.parallel_scan);
    }

    #[test]
    fn test_effective_page_cache_size() {
        let mut config = AppConfig::default();
        config.page_cache_size = 0;
        assert_eq!(config.effective_page_cache_size(), 1);

        config.page_cache_size = 8;
        assert_eq!(config.effective_page_cache_size(), 8);
    }

    #[test]
    fn test_app_config_serialization() {
        let config = AppConfig {
            page_cache_size: 3,
            highlight: false,
            color: false,
            parallel_scan: false,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_app_config_partial_json() {
        // Should use defaults for missing fields
        let json = r#"{"highlight": false}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();

        assert!(!config.highlight);
        assert_eq!(config.page_cache_size, 64);
        assert!(config.parallel_scan);
    }

    #[test]
    fn test_app_config_empty_json() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
