/// Engine configuration, loaded from RON.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::core::composer::DEFAULT_TAGS;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Settings for building a `NaeilumEngine`. Every field is optional in
/// the RON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Directory holding `syllables.json`, `surnames.json` and `fortunes.json`.
    pub data_dir: String,
    /// Tags for name requests that carry none.
    pub default_tags: Vec<String>,
    /// Tags for fortune requests that carry none.
    pub fortune_tags: Vec<String>,
    /// Fixed seed for reproducible output; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            default_tags: DEFAULT_TAGS.iter().map(|t| t.to_string()).collect(),
            fortune_tags: vec!["밝음".to_string()],
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn load(path: &Path) -> Result<EngineConfig, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    pub fn parse_ron(input: &str) -> Result<EngineConfig, ConfigError> {
        Ok(ron::from_str(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_struct_gives_defaults() {
        let config = EngineConfig::parse_ron("()").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.data_dir, "data");
        assert_eq!(config.default_tags, vec!["밝음", "지혜"]);
        assert!(config.seed.is_none());
    }

    #[test]
    fn partial_override() {
        let config = EngineConfig::parse_ron(
            r#"(
                data_dir: "fixtures",
                seed: Some(7),
            )"#,
        )
        .unwrap();
        assert_eq!(config.data_dir, "fixtures");
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.fortune_tags, vec!["밝음"]);
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(EngineConfig::parse_ron("(colour: \"red\")").is_err());
    }

    #[test]
    fn shipped_config_loads() {
        let config = EngineConfig::load(Path::new("data/naeilum.ron")).unwrap();
        assert_eq!(config.data_dir, "data");
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            EngineConfig::load(Path::new("no/such/config.ron")),
            Err(ConfigError::Io(_))
        ));
    }
}
