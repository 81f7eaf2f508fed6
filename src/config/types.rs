//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CalorieThreshold, InvalidInputPolicy};
use crate::error::RecipeResult;

use super::loader::{self, ConfigWarning};

/// Calorie notification settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CaloriesConfig {
    #[serde(default)]
    pub threshold: CalorieThreshold,
}

/// Command words recognized by the browse loops
///
/// Matched exactly against the entered line (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandsConfig {
    #[serde(default = "default_exit")]
    pub exit: String,

    #[serde(default = "default_back")]
    pub back: String,

    #[serde(default = "default_clear")]
    pub clear: String,

    #[serde(default = "default_reset")]
    pub reset: String,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            exit: default_exit(),
            back: default_back(),
            clear: default_clear(),
            reset: default_reset(),
        }
    }
}

fn default_exit() -> String {
    "exit".to_string()
}

fn default_back() -> String {
    "back".to_string()
}

fn default_clear() -> String {
    "clear".to_string()
}

fn default_reset() -> String {
    "reset".to_string()
}

/// Input handling settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InputConfig {
    #[serde(default)]
    pub on_invalid: InvalidInputPolicy,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub calories: CaloriesConfig,

    #[serde(default)]
    pub commands: CommandsConfig,

    #[serde(default)]
    pub input: InputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> RecipeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> RecipeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (RECIPEBOOK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
