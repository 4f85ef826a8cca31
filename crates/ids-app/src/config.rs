//! Workbench configuration.
//!
//! One configuration file replaces the near-duplicate frontend variants the
//! workbench grew out of: the parameters control and the chart update
//! strategy are flags rather than forks.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Which runs feed the comparison chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComparisonMode {
    /// Chart the runs currently checked in the history list.
    #[default]
    MultiSelect,
    /// Ignore the selection and always chart the most recent run.
    LatestOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Whether the model-parameters selector exists at all.
    pub parameters_control: bool,
    pub comparison: ComparisonMode,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            parameters_control: true,
            comparison: ComparisonMode::MultiSelect,
        }
    }
}

pub fn load_yaml(path: &Path) -> AppResult<LabConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config = serde_yaml::from_str(&content)?;
    Ok(config)
}

pub fn save_yaml(path: &Path, config: &LabConfig) -> AppResult<()> {
    let content = serde_yaml::to_string(config)?;
    std::fs::write(path, content).map_err(|source| AppError::ConfigWrite {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Load the config at `path`, falling back to defaults when the file does
/// not exist. A file that exists but fails to parse is still an error.
pub fn load_or_default(path: &Path) -> AppResult<LabConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(LabConfig::default());
    }
    load_yaml(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_parameters_and_multi_select() {
        let config = LabConfig::default();
        assert!(config.parameters_control);
        assert_eq!(config.comparison, ComparisonMode::MultiSelect);
    }

    #[test]
    fn config_round_trips_through_yaml() {
        let dir = std::env::temp_dir().join("ids_app_config_test");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("idsbench.yaml");

        let config = LabConfig {
            parameters_control: false,
            comparison: ComparisonMode::LatestOnly,
        };
        save_yaml(&path, &config).unwrap();
        let loaded = load_yaml(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("ids_app_config_test_missing.yaml");
        let _ = std::fs::remove_file(&path);
        let config = load_or_default(&path).unwrap();
        assert_eq!(config, LabConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = std::env::temp_dir().join("ids_app_config_test_bad");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("idsbench.yaml");
        std::fs::write(&path, "comparison: [not, a, mode]").unwrap();

        assert!(load_or_default(&path).is_err());
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let config: LabConfig = serde_yaml::from_str("parameters_control: false").unwrap();
        assert!(!config.parameters_control);
        assert_eq!(config.comparison, ComparisonMode::MultiSelect);
    }
}
