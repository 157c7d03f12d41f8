//! Command handlers for the `treemenu` binary
//!
//! Each handler builds its use case through the presentation factory,
//! runs it, and prints text or JSON.

pub mod admin;
pub mod check;
pub mod menus;
pub mod render;
pub mod resolve;

use std::path::Path;

use anyhow::{Context, Result};

use treemenu::config::{Config, ConfigWarning, SkippedConfig};
use treemenu::presentation::{Cli, OutputFormat};

/// Resolved settings shared by all commands
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}

impl CommandContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => {
                let (config, warnings) = Config::load_with_warnings(path)
                    .with_context(|| format!("failed to load config {}", path.display()))?;
                print_config_warnings(&warnings);
                config.with_env_overrides()
            }
            None => {
                let cwd = std::env::current_dir()?;
                let (config, skipped) = Config::load_or_default(Some(&cwd));
                print_skipped_configs(&skipped);
                config
            }
        };

        if let Some(store) = &cli.store {
            config.store.path = store.clone();
        }
        if let Some(app_name) = &cli.app_name {
            config.links.app_name = app_name.trim_matches('/').to_string();
        }
        config.output.verbosity = config.output.verbosity.raised_by(cli.verbose);

        Ok(Self {
            config,
            format: OutputFormat::from_json_flag(cli.json),
        })
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn unicode(&self) -> bool {
        self.config.output.unicode
    }

    pub fn store_path(&self) -> &Path {
        &self.config.store.path
    }
}

fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        match w.line {
            Some(line) => eprintln!(
                "⚠ Unknown config key '{}' in {}:{}",
                w.key,
                w.file.display(),
                line
            ),
            None => eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display()),
        }
        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

fn print_skipped_configs(skipped: &[SkippedConfig]) {
    for s in skipped {
        eprintln!("⚠ Ignoring config {}: {}", s.file.display(), s.error);
    }
}

pub fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
