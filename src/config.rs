//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/cinepath/cinepath.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `CINEPATH_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, Map};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Default number of sessions kept in the history.
pub const DEFAULT_MAX_SESSIONS: usize = 10;

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub base_dir: Option<PathBuf>,
    pub history_file: Option<PathBuf>,
    pub max_sessions: Option<usize>,
    pub record_history: Option<bool>,
}

/// Unified configuration for cinepath.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Base directory for cinepath data (default: ~/.cinepath)
    pub base_dir: PathBuf,
    /// History file; defaults to `base_dir/history.toml`
    pub history_file: Option<PathBuf>,
    /// Number of sessions kept before the oldest is evicted
    pub max_sessions: usize,
    /// Whether finished walks are recorded
    pub record_history: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_dir: dirs_default_base_dir(),
            history_file: None,
            max_sessions: DEFAULT_MAX_SESSIONS,
            record_history: true,
        }
    }
}

/// Get the default base directory (~/.cinepath).
fn dirs_default_base_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".cinepath"))
        .unwrap_or_else(|| PathBuf::from("~/.cinepath"))
}

/// Get the XDG config directory for cinepath.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "cinepath").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("cinepath.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}` in a path-like string.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Effective history file location.
    pub fn history_file(&self) -> PathBuf {
        self.history_file
            .clone()
            .unwrap_or_else(|| self.base_dir.join("history.toml"))
    }

    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.base_dir.to_string_lossy().as_ref());
        self.base_dir = PathBuf::from(expanded);

        if let Some(history) = &self.history_file {
            self.history_file = Some(PathBuf::from(expand_env_vars(
                history.to_string_lossy().as_ref(),
            )));
        }
    }

    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            base_dir: overlay
                .base_dir
                .clone()
                .unwrap_or_else(|| self.base_dir.clone()),
            history_file: overlay
                .history_file
                .clone()
                .or_else(|| self.history_file.clone()),
            max_sessions: overlay.max_sessions.unwrap_or(self.max_sessions),
            record_history: overlay.record_history.unwrap_or(self.record_history),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file, applied after the global one
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_with_env(config_file, None)
    }

    /// Like [`Settings::load`], reading `CINEPATH_*` variables from `env`
    /// instead of the process environment when given.
    pub fn load_with_env(
        config_file: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        current = Self::apply_env_overrides(current, env)?;
        current.expand_paths();
        current.validate()?;

        Ok(current)
    }

    /// Apply CINEPATH_* environment variables as explicit overrides.
    ///
    /// `CINEPATH_MAX_SESSIONS` maps to `max_sessions`; `__` separates nested keys.
    fn apply_env_overrides(
        mut settings: Self,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let source = Environment::with_prefix("CINEPATH")
            .prefix_separator("_")
            .separator("__")
            .source(env);
        let config = Config::builder()
            .add_source(source)
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("base_dir") {
            settings.base_dir = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("history_file") {
            settings.history_file = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_int("max_sessions") {
            settings.max_sessions = usize::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("CINEPATH_MAX_SESSIONS must be positive, got {val}"),
            })?;
        }
        if let Ok(val) = config.get_bool("record_history") {
            settings.record_history = val;
        }

        Ok(settings)
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if self.max_sessions == 0 {
            return Err(ApplicationError::Config {
                message: "max_sessions must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# cinepath configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/cinepath/cinepath.toml
#   Explicit: file given with --config
#   Env:      CINEPATH_* environment variables

# Base directory for cinepath data
# base_dir = "~/.cinepath"

# History file (default: <base_dir>/history.toml)
# history_file = "~/.cinepath/history.toml"

# Sessions kept before the oldest is evicted
# max_sessions = 10

# Record finished walks in the history
# record_history = true
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load_with_env(None, Some(Map::new())).expect("load defaults");
        assert!(settings.base_dir.to_string_lossy().contains(".cinepath"));
        assert!(settings.max_sessions >= 1);
    }

    #[test]
    fn given_no_history_file_when_resolving_then_under_base_dir() {
        let settings = Settings {
            base_dir: PathBuf::from("/data/cinepath"),
            history_file: None,
            max_sessions: 10,
            record_history: true,
        };
        assert_eq!(
            settings.history_file(),
            PathBuf::from("/data/cinepath/history.toml")
        );
    }

    #[test]
    fn given_tilde_in_paths_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            base_dir: PathBuf::from("~/.cinepath"),
            history_file: Some(PathBuf::from("$HOME/h.toml")),
            max_sessions: 10,
            record_history: true,
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        assert!(settings.base_dir.to_string_lossy().starts_with(&home));
        assert!(!settings.base_dir.to_string_lossy().contains('~'));
        assert!(settings
            .history_file
            .unwrap()
            .to_string_lossy()
            .starts_with(&home));
    }

    #[test]
    fn given_partial_overlay_when_merging_then_unspecified_fields_kept() {
        let base = Settings::default();
        let overlay = RawSettings {
            max_sessions: Some(3),
            ..RawSettings::default()
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.max_sessions, 3);
        assert_eq!(merged.base_dir, base.base_dir);
        assert!(merged.record_history);
    }

    #[test]
    fn given_template_when_parsing_then_is_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).expect("template parses");
        assert!(raw.max_sessions.is_none());
    }
}
