//! JSON file configuration adapter.
//!
//! Implements [`ConfigPort`] on top of a single JSON document.  A missing
//! file is not an error: the defaults apply, the same way a fresh install
//! behaves.  Loaded values go through [`WateringConfig::validate`] so a
//! hand-edited file cannot smuggle in a zero flow rate.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::WateringConfig;

pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigPort for FileConfigStore {
    fn load(&self) -> Result<WateringConfig, ConfigError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("FileConfigStore: {} not found, using defaults", self.path.display());
                return Ok(WateringConfig::default());
            }
            Err(e) => {
                warn!("FileConfigStore: read {} failed: {e}", self.path.display());
                return Err(ConfigError::IoError);
            }
        };

        let cfg: WateringConfig = serde_json::from_str(&text).map_err(|e| {
            warn!("FileConfigStore: {} is not valid config: {e}", self.path.display());
            ConfigError::Corrupted
        })?;
        cfg.validate()?;
        info!("FileConfigStore: loaded config from {}", self.path.display());
        Ok(cfg)
    }

    fn save(&self, config: &WateringConfig) -> Result<(), ConfigError> {
        config.validate()?;

        let json = serde_json::to_string_pretty(config).map_err(|_| ConfigError::IoError)?;
        fs::write(&self.path, json).map_err(|e| {
            warn!("FileConfigStore: write {} failed: {e}", self.path.display());
            ConfigError::IoError
        })?;
        info!("FileConfigStore: config saved to {}", self.path.display());
        Ok(())
    }
}
