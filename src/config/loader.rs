//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{CalorieThreshold, InvalidInputPolicy};
use crate::error::{RecipeError, RecipeResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// A resolved configuration and where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from, `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> RecipeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RecipeError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .iter()
        .map(|dotted| {
            let (section, key) = match dotted.rsplit_once('.') {
                Some((section, key)) => (Some(section), key),
                None => (None, dotted.as_str()),
            };
            ConfigWarning {
                key: key.to_string(),
                file: path.to_path_buf(),
                line: key_line(&content, key),
                suggestion: suggest_key(section, key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the effective configuration.
///
/// An explicit path must exist and parse. Otherwise the user config file is
/// used when present; if it is unreadable the defaults are used instead.
/// Environment overrides are applied last in every case.
pub fn resolve(explicit: Option<&Path>) -> RecipeResult<LoadedConfig> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok(LoadedConfig {
            config: with_env_overrides(config),
            source: Some(path.to_path_buf()),
            warnings,
        });
    }

    if let Some(path) = user_config_path().filter(|p| p.exists()) {
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                return Ok(LoadedConfig {
                    config: with_env_overrides(config),
                    source: Some(path),
                    warnings,
                });
            }
            Err(err) => {
                tracing::warn!(file = %path.display(), error = %err, "ignoring unreadable user config");
            }
        }
    }

    Ok(LoadedConfig {
        config: with_env_overrides(Config::default()),
        source: None,
        warnings: Vec::new(),
    })
}

/// `<config_dir>/recipebook/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("recipebook").join("config.toml"))
}

/// Apply environment variable overrides (RECIPEBOOK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // RECIPEBOOK_CALORIE_THRESHOLD
    if let Some(value) = get_env("RECIPEBOOK_CALORIE_THRESHOLD") {
        match value.trim().parse::<i64>() {
            Ok(limit) => config.calories.threshold = CalorieThreshold::new(limit),
            Err(_) => tracing::warn!(%value, "ignoring RECIPEBOOK_CALORIE_THRESHOLD"),
        }
    }

    // RECIPEBOOK_ON_INVALID
    if let Some(value) = get_env("RECIPEBOOK_ON_INVALID") {
        match InvalidInputPolicy::from_name(&value) {
            Some(policy) => config.input.on_invalid = policy,
            None => tracing::warn!(%value, "ignoring RECIPEBOOK_ON_INVALID"),
        }
    }

    config
}

/// Keys each table accepts; `None` is the top level
fn known_keys(section: Option<&str>) -> &'static [&'static str] {
    match section {
        None => &["calories", "commands", "input"],
        Some("calories") => &["threshold"],
        Some("commands") => &["exit", "back", "clear", "reset"],
        Some("input") => &["on_invalid"],
        Some(_) => &[],
    }
}

/// 1-based line where `key` is assigned or opened as a table
fn key_line(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let line = line.trim();
            let assigned = line
                .split_once('=')
                .is_some_and(|(lhs, _)| lhs.trim() == key);
            let table = line
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
                .is_some_and(|name| name.trim().rsplit('.').next() == Some(key));
            assigned || table
        })
        .map(|index| index + 1)
}

/// Closest known key in the same table, if it is at most two edits away
fn suggest_key(section: Option<&str>, unknown: &str) -> Option<String> {
    known_keys(section)
        .iter()
        .map(|known| (edit_distance(unknown, known), *known))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, known)| known.to_string())
}

/// Levenshtein distance over chars, keeping a single DP row
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitute = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}

#[cfg(test)]
pub(super) fn suggest_key_for_test(section: Option<&str>, unknown: &str) -> Option<String> {
    suggest_key(section, unknown)
}
