//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BannerError, BannerResult};

use super::types::Config;

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "emergency-banner.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
}

/// Configuration together with where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// `None` when no file was found and defaults are in use
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BannerResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| BannerError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BannerError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    config.validate(path)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit path, the working directory, the user config dir,
/// or fall back to defaults
///
/// An explicit path must exist. A discovered file that fails to parse is an
/// error rather than being silently replaced by defaults.
pub fn load_for_cli(explicit: Option<&Path>, cwd: &Path) -> BannerResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => discover(cwd),
    };

    let Some(path) = candidate else {
        return Ok(LoadedConfig {
            config: with_env_overrides(Config::default()),
            ..LoadedConfig::default()
        });
    };

    let (config, warnings) = load_with_warnings(&path)?;
    Ok(LoadedConfig {
        config: with_env_overrides(config),
        source: Some(path),
        warnings,
    })
}

fn discover(cwd: &Path) -> Option<PathBuf> {
    let local = cwd.join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    let user = dirs::config_dir()?.join("emergency-banner/config.toml");
    user.exists().then_some(user)
}

/// Apply environment variable overrides (BANNER_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from `lookup`, keyed by environment variable name
pub fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    // BANNER_SSH_USER
    if let Some(user) = lookup("BANNER_SSH_USER").filter(|u| !u.is_empty()) {
        config.remote.user = Some(user);
    }

    // BANNER_OWNER
    if let Some(owner) = lookup("BANNER_OWNER").filter(|o| !o.is_empty()) {
        config.remote.owner = owner;
    }

    // BANNER_RESTART_COMMAND
    if let Some(command) = lookup("BANNER_RESTART_COMMAND").filter(|c| !c.is_empty()) {
        config.remote.restart_command = command;
    }

    config
}

fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let trimmed = line.trim_start();
            trimmed
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|idx| idx + 1)
}
