//! Configuration module for treemenu
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TREEMENU_*)
//! 3. Project config (.treemenu/config.toml)
//! 4. User config (~/.config/treemenu/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, SkippedConfig, PROJECT_CONFIG};
pub use types::{Config, LinksConfig, OutputConfig, RenderConfig, StoreConfig, Verbosity};
