use crate::core::elapsed::DayCount;
use crate::core::messages::Language;
use crate::core::rates::AssetCategory;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

fn default_currency() -> String {
    "VND".to_string()
}

fn default_asset() -> AssetCategory {
    AssetCategory::Motorbike
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Suffix printed after every amount
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub day_count: DayCount,
    /// Collateral used when `quote` is run without `--asset`
    #[serde(default = "default_asset")]
    pub default_asset: AssetCategory,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            currency: default_currency(),
            language: Language::default(),
            day_count: DayCount::default(),
            default_asset: default_asset(),
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, falling back to defaults
    /// when no file has been set up yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("vn", "pawnrate", "pawnrate")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
currency: "đ"
language: en
day_count: elapsed
default_asset: vehicle-title
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.currency, "đ");
        assert_eq!(config.language, Language::En);
        assert_eq!(config.day_count, DayCount::Elapsed);
        assert_eq!(config.default_asset, AssetCategory::VehicleTitle);
    }

    #[test]
    fn test_config_defaults() {
        let config: AppConfig = serde_yaml::from_str("currency: VND").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.language, Language::Vi);
        assert_eq!(config.day_count, DayCount::Inclusive);
        assert_eq!(config.default_asset, AssetCategory::Motorbike);
    }

    #[test]
    fn test_unknown_day_count_is_rejected() {
        let result: Result<AppConfig, _> = serde_yaml::from_str("day_count: calendar");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let result = AppConfig::load_from_path(temp_dir.path().join("missing.yaml"));
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }
}
