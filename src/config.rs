//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (the classic demonstration scenario)
//! 2. Global config: `$XDG_CONFIG_HOME/avltree/avltree.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `AVLTREE_*` prefix
//!
//! Every layer replaces whole fields; arrays are never merged.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};

/// Settings for the demonstration driver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Values inserted, in order
    pub values: Vec<i64>,
    /// Values deleted after the first round of traversals
    pub delete: Vec<i64>,
    /// Values looked up at the end
    pub probe: Vec<i64>,
    /// Print the tree diagram alongside the traversals
    pub render: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            values: vec![9, 5, 10, 0, 6, 11, -1, 1, 2],
            delete: vec![10],
            probe: vec![4],
            render: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub values: Option<Vec<i64>>,
    pub delete: Option<Vec<i64>>,
    pub probe: Option<Vec<i64>>,
    pub render: Option<bool>,
}

/// Get the XDG config directory for avltree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "avltree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("avltree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

fn env_err(key: &str, e: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::Config {
        message: format!("AVLTREE_{}: {}", key.to_uppercase(), e),
    }
}

/// Reads a comma separated integer list; `None` when the variable is unset.
fn env_list(config: &Config, key: &str) -> ApplicationResult<Option<Vec<i64>>> {
    let raw = match config.get_string(key) {
        Ok(raw) => raw,
        Err(ConfigError::NotFound(_)) => return Ok(None),
        Err(e) => return Err(env_err(key, e)),
    };
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<i64>()
                .map_err(|e| env_err(key, format!("invalid value {:?}: {}", item, e)))
        })
        .collect::<ApplicationResult<Vec<_>>>()
        .map(Some)
}

impl Settings {
    /// Overlay wins wherever it specifies a field.
    fn overlay(&self, raw: &RawSettings) -> Self {
        Self {
            values: raw.values.clone().unwrap_or_else(|| self.values.clone()),
            delete: raw.delete.clone().unwrap_or_else(|| self.delete.clone()),
            probe: raw.probe.clone().unwrap_or_else(|| self.probe.clone()),
            render: raw.render.unwrap_or(self.render),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; unlike the global
    ///   file it must exist
    #[instrument(level = "debug")]
    pub fn load(config_file: Option<&Path>) -> ApplicationResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!(path = %global_path.display(), "applying global config");
                current = current.overlay(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = config_file {
            debug!(path = %path.display(), "applying explicit config");
            current = current.overlay(&load_raw_settings(path)?);
        }

        Self::apply_env_overrides(current)
    }

    /// Apply AVLTREE_* environment variables as explicit overrides.
    ///
    /// Lists are comma separated: `AVLTREE_VALUES=3,1,2`; a single value
    /// (`AVLTREE_DELETE=5`) is a one-element list and an empty one clears
    /// the list. A variable that is set but does not parse is an error.
    fn apply_env_overrides(mut settings: Self) -> ApplicationResult<Self> {
        // Without try_parsing every variable arrives as a string, so `7` and
        // `3,1,2` take the same path.
        let config = Config::builder()
            .add_source(Environment::with_prefix("AVLTREE"))
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_list(&config, "values")? {
            settings.values = val;
        }
        if let Some(val) = env_list(&config, "delete")? {
            settings.delete = val;
        }
        if let Some(val) = env_list(&config, "probe")? {
            settings.probe = val;
        }
        match config.get_bool("render") {
            Ok(val) => settings.render = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(env_err("render", e)),
        }

        Ok(settings)
    }

    /// Serialize the effective settings as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
