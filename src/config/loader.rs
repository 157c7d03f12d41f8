//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MenuError, MenuResult};

use super::types::{Config, Verbosity};

/// Project-level config location, relative to the project root
pub const PROJECT_CONFIG: &str = ".treemenu/config.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MenuResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MenuError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// A config file that exists but could not be used
#[derive(Debug)]
pub struct SkippedConfig {
    pub file: PathBuf,
    pub error: MenuError,
}

/// Load from project config, user config, or defaults
///
/// Files that fail to load are skipped and returned alongside the config,
/// so the caller can report them before logging is set up.
pub fn load_or_default(project_root: Option<&Path>) -> (Config, Vec<SkippedConfig>) {
    let mut skipped = Vec::new();

    let project_config = project_root.map(|root| root.join(PROJECT_CONFIG));
    for file in project_config.into_iter().chain(user_config_path()) {
        if !file.exists() {
            continue;
        }
        match Config::load(&file) {
            Ok(config) => return (with_env_overrides(config), skipped),
            Err(error) => skipped.push(SkippedConfig { file, error }),
        }
    }

    (with_env_overrides(Config::default()), skipped)
}

/// Apply environment variable overrides (TREEMENU_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Ok(store) = std::env::var("TREEMENU_STORE") {
        if !store.trim().is_empty() {
            config.store.path = PathBuf::from(store);
        }
    }

    if let Ok(app_name) = std::env::var("TREEMENU_APP_NAME") {
        let app_name = app_name.trim().trim_matches('/');
        if !app_name.is_empty() {
            config.links.app_name = app_name.to_string();
        }
    }

    if let Ok(verbosity) = std::env::var("TREEMENU_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    if let Ok(val) = std::env::var("TREEMENU_STRICT_SELECTION") {
        config.render.strict_selection = val.to_lowercase() != "false" && val != "0";
    }

    config
}

/// `<config dir>/treemenu/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs_config_dir().map(|dir| dir.join("treemenu/config.toml"))
}

// XDG_CONFIG_HOME wins so tests can isolate the user layer
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "store",
        "path",
        "links",
        "app_name",
        "render",
        "strict_selection",
        "output",
        "verbosity",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
