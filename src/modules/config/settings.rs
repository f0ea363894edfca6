use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::modules::directory::HashScheme;
use crate::{LOG_FILE, MIN_PASSWORD_LENGTH};

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Minimum password length must be at least 1")]
    InvalidMinPasswordLength,
}

/// Runtime settings for the directory and its CLI
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DirectoryConfig {
    pub min_password_length: usize,
    pub hash_scheme: HashScheme,
    pub log_file: PathBuf,
    pub verbose: bool,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            min_password_length: MIN_PASSWORD_LENGTH,
            hash_scheme: HashScheme::default(),
            log_file: PathBuf::from(LOG_FILE),
            verbose: false,
        }
    }
}

impl DirectoryConfig {
    /// Load configuration from a JSON file; missing keys fall back to defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the directory cannot honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_password_length == 0 {
            return Err(ConfigError::InvalidMinPasswordLength);
        }
        Ok(())
    }
}
