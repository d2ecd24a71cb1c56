use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Settings file looked up in the working directory.
pub const CONFIG_FILE: &str = ".eventscout.json";

const DEFAULT_STORE: &str = "events.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoutConfig {
    /// Path of the JSON event store. Relative paths resolve against the
    /// directory holding the settings file.
    #[serde(default = "default_store")]
    pub store: PathBuf,
    /// Cap on the number of results front ends show.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

fn default_store() -> PathBuf {
    PathBuf::from(DEFAULT_STORE)
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            store: default_store(),
            limit: None,
        }
    }
}

impl ScoutConfig {
    /// Read settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let data = fs::read_to_string(path)?;
        let mut config: ScoutConfig = serde_json::from_str(&data)
            .map_err(|e| CoreError::Config(format!("{}: {e}", path.display())))?;
        if config.store.is_relative() {
            if let Some(parent) = path.parent() {
                config.store = parent.join(&config.store);
            }
        }
        if config.limit == Some(0) {
            return Err(CoreError::Config(format!(
                "{}: limit must be at least 1",
                path.display()
            )));
        }
        Ok(config)
    }

    /// Load `.eventscout.json` from `dir` if it exists, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self, CoreError> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            tracing::debug!("Loading settings from {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}
