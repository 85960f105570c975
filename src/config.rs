//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/deptree/deptree.toml`
//! 3. Local config: `<dir>/.deptree.toml` (usually the working directory)
//! 4. Environment variables: `DEPTREE_*` prefix
//!
//! Command-line flags are applied on top by the CLI layer.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, DuplicatePolicy, IoResultExt};

/// Unified configuration for deptree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Treatment of dependency groups dropped by consume-once expansion
    pub on_duplicate: DuplicatePolicy,
    /// Require every record to have as many fields as the first one
    pub strict_fields: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            on_duplicate: DuplicatePolicy::Ignore,
            strict_fields: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub on_duplicate: Option<DuplicatePolicy>,
    pub strict_fields: Option<bool>,
}

/// Get the XDG config directory for deptree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "deptree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("deptree.toml"))
}

/// Get the path to the local config file in `dir`.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".deptree.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).with_path_context("read config", path)?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            on_duplicate: overlay.on_duplicate.unwrap_or(self.on_duplicate),
            strict_fields: overlay.strict_fields.unwrap_or(self.strict_fields),
        }
    }

    /// Load settings with layered precedence from the real environment.
    pub fn load(local_dir: Option<&Path>) -> ApplicationResult<Self> {
        Self::load_from(global_config_path().as_deref(), local_dir, None)
    }

    /// Load settings from explicit sources.
    ///
    /// `env` replaces the process environment when given, so tests can feed
    /// `DEPTREE_*` variables without touching global state.
    pub fn load_from(
        global_path: Option<&Path>,
        local_dir: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> ApplicationResult<Self> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_path {
            if global_path.exists() {
                debug!("loading global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        // 3. Local config
        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("loading local config: {}", local_path.display());
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        // 4. Environment variables (explicit override)
        Self::apply_env_overrides(current, env)
    }

    /// Apply `DEPTREE_*` environment variables as explicit overrides.
    fn apply_env_overrides(
        mut settings: Self,
        env: Option<config::Map<String, String>>,
    ) -> ApplicationResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("DEPTREE")
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            )
            .build()
            .map_err(config_err)?;

        match config.get_string("on_duplicate") {
            Ok(val) => {
                settings.on_duplicate = val
                    .parse()
                    .map_err(|message| ApplicationError::Config { message })?
            }
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }
        match config.get_bool("strict_fields") {
            Ok(val) => settings.strict_fields = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }

        Ok(settings)
    }

    /// Render as TOML for `config show`.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }
}
