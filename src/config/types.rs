//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::LinkBuilder;
use crate::error::MenuResult;

use super::loader::{self, ConfigWarning, SkippedConfig};

/// Menu store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("menus.toml")
}

/// Link derivation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksConfig {
    /// Path prefix of the menu application (`/{app_name}/...`)
    #[serde(default = "default_app_name")]
    pub app_name: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
        }
    }
}

fn default_app_name() -> String {
    "menu".to_string()
}

/// Render configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RenderConfig {
    /// Fail the render on an unparsable or unknown selection instead of
    /// falling back to the collapsed menu
    #[serde(default)]
    pub strict_selection: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Verbosity selected by a `-v` count; 0 keeps `self`
    pub fn raised_by(self, count: u8) -> Self {
        let from_flag = match count {
            0 => return self,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        };
        self.max(from_flag)
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub links: LinksConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MenuResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MenuResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, returning the
    /// files that were skipped because they failed to load
    pub fn load_or_default(project_root: Option<&Path>) -> (Self, Vec<SkippedConfig>) {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (TREEMENU_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Link builder for the configured application prefix
    pub fn links(&self) -> LinkBuilder {
        LinkBuilder::new(self.links.app_name.clone())
    }
}
