//! Runtime configuration of the dashboard.
//!
//! The bundle carries a default TOML config. A different one can be baked in
//! at build time through the `ADMIN_DASHBOARD_CONFIG` environment variable
//! (the TOML text itself, not a path, since the browser has no filesystem).

use contracts::shared::pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ApiConfig {
    /// Empty means "same host as the page, port 3000"
    #[serde(default)]
    pub base_url: String,
    /// Host serving uploaded images; empty means `base_url`
    #[serde(default)]
    pub assets_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            page_size_options: default_page_size_options(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_page_size_options() -> Vec<usize> {
    PAGE_SIZE_OPTIONS.to_vec()
}

fn default_log_level() -> String {
    "debug".to_string()
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
assets_url = ""

[list]
default_page_size = 10
page_size_options = [5, 10, 30, 50, 100]

[log]
level = "debug"
"#;

/// Parse and sanity-check a TOML config
pub fn parse_config(text: &str) -> anyhow::Result<AppConfig> {
    let mut config: AppConfig = toml::from_str(text)?;
    config.list.page_size_options.retain(|&size| size > 0);
    if config.list.page_size_options.is_empty() {
        config.list.page_size_options = default_page_size_options();
    }
    if config.list.default_page_size == 0 {
        anyhow::bail!("list.default_page_size must be positive");
    }
    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
    config.api.assets_url = config.api.assets_url.trim_end_matches('/').to_string();
    Ok(config)
}

/// Load configuration
///
/// Search order:
/// 1. `ADMIN_DASHBOARD_CONFIG` captured at build time
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<AppConfig> {
    if let Some(text) = option_env!("ADMIN_DASHBOARD_CONFIG") {
        match parse_config(text) {
            Ok(config) => return Ok(config),
            Err(e) => log::warn!("ADMIN_DASHBOARD_CONFIG is invalid, using defaults: {}", e),
        }
    }
    parse_config(DEFAULT_CONFIG)
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::error!("Failed to load configuration: {}", e);
        AppConfig {
            api: ApiConfig::default(),
            list: ListConfig::default(),
            log: LogConfig::default(),
        }
    }
});

/// Configuration in effect for this page load
pub fn config() -> &'static AppConfig {
    &CONFIG
}

impl LogConfig {
    pub fn level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.list.default_page_size, 10);
        assert_eq!(config.list.page_size_options, vec![5, 10, 30, 50, 100]);
        assert_eq!(config.log.level(), log::Level::Debug);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config(
            r#"
[api]
base_url = "https://api.shop.example/"
"#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://api.shop.example");
        assert_eq!(config.list, ListConfig::default());
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_invalid_values() {
        assert!(parse_config("[list]\ndefault_page_size = 0\n").is_err());
        let config = parse_config("[list]\npage_size_options = [0]\n").unwrap();
        assert_eq!(config.list.page_size_options, vec![5, 10, 30, 50, 100]);
        let config = parse_config("[log]\nlevel = \"loud\"\n").unwrap();
        assert_eq!(config.log.level(), log::Level::Debug);
    }
}
