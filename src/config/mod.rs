use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::application::submission::DEFAULT_SUBMISSION_DELAY_MS;
use crate::errors::AdoptionError;
use crate::storage::paths;

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Delay applied by the simulated submission gateway.
    pub submission_delay_ms: u64,
    /// Write a JSON snapshot of each submitted application.
    pub archive_applications: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            submission_delay_ms: DEFAULT_SUBMISSION_DELAY_MS,
            archive_applications: true,
            catalog_path: None,
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, AdoptionError> {
        Self::from_base(paths::app_data_dir())
    }

    #[cfg(test)]
    pub fn with_base_dir(base: PathBuf) -> Result<Self, AdoptionError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, AdoptionError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> Result<Config, AdoptionError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Saves atomically by staging to a temporary file.
    pub fn save(&self, config: &Config) -> Result<(), AdoptionError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension(TMP_SUFFIX);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_defaults_when_no_file_exists() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.submission_delay_ms, DEFAULT_SUBMISSION_DELAY_MS);
        assert!(config.archive_applications);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn save_and_reload_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();

        let mut config = Config::default();
        config.submission_delay_ms = 0;
        config.catalog_path = Some(PathBuf::from("/tmp/catalog.json"));
        manager.save(&config).unwrap();

        let reloaded = manager.load().unwrap();
        assert_eq!(reloaded, config);
    }
}
