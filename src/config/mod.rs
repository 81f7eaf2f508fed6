//! Configuration module for recipebook
//!
//! Resolution order:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (RECIPEBOOK_*)
//! 3. Config file (`--config` or `<config_dir>/recipebook/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{resolve, user_config_path, ConfigWarning, LoadedConfig};
pub use types::{CaloriesConfig, CommandsConfig, Config, InputConfig};
