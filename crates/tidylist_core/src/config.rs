//! Application configuration.
//!
//! # Responsibility
//! - Describe where lists are stored and how logging is set up.
//! - Load that description from TOML, filling gaps with defaults.
//!
//! # Invariants
//! - Every field has a default; an empty document is a valid config.
//! - Storage keys are never blank.

use crate::controller::{DEFAULT_EXPENSES_KEY, DEFAULT_TASKS_KEY};
use crate::logging::default_log_level;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATABASE_FILE: &str = "tidylist.db";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub log_level: String,
    /// Logging is disabled when unset.
    pub log_dir: Option<PathBuf>,
    pub tasks_key: String,
    pub expenses_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_FILE),
            log_level: default_log_level().to_string(),
            log_dir: None,
            tasks_key: DEFAULT_TASKS_KEY.to_string(),
            expenses_key: DEFAULT_EXPENSES_KEY.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tasks_key.trim().is_empty() {
            return Err(ConfigError::EmptyKey("tasks_key"));
        }
        if self.expenses_key.trim().is_empty() {
            return Err(ConfigError::EmptyKey("expenses_key"));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(toml::de::Error),
    EmptyKey(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
            Self::EmptyKey(field) => write!(f, "config field `{field}` must not be empty"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::EmptyKey(_) => None,
        }
    }
}
