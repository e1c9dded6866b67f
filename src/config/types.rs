//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BannerError, BannerResult};

use super::loader::{self, ConfigWarning};

/// How the tool reaches and modifies remote hosts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// SSH login; unset defers to ~/.ssh/config
    #[serde(default)]
    pub user: Option<String>,

    /// `user:group` owning banner files after upload
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Octal mode of uploaded banner files
    #[serde(default = "default_file_mode")]
    pub file_mode: String,

    /// Restart command run as root, `{app}` is replaced by the application name
    #[serde(default = "default_restart_command")]
    pub restart_command: String,

    #[serde(default = "default_ssh_program")]
    pub ssh_program: String,

    #[serde(default = "default_scp_program")]
    pub scp_program: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            user: None,
            owner: default_owner(),
            file_mode: default_file_mode(),
            restart_command: default_restart_command(),
            ssh_program: default_ssh_program(),
            scp_program: default_scp_program(),
        }
    }
}

impl RemoteConfig {
    /// `file_mode` as permission bits
    pub fn file_mode_bits(&self) -> Option<u32> {
        u32::from_str_radix(self.file_mode.trim_start_matches("0o"), 8)
            .ok()
            .filter(|mode| *mode <= 0o7777)
    }
}

fn default_owner() -> String {
    "deploy:deploy".to_string()
}

fn default_file_mode() -> String {
    "644".to_string()
}

fn default_restart_command() -> String {
    crate::infrastructure::remote::DEFAULT_RESTART_COMMAND.to_string()
}

fn default_ssh_program() -> String {
    "ssh".to_string()
}

fn default_scp_program() -> String {
    "scp".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,

    /// Role name to hosts, visited in list order
    #[serde(default)]
    pub roles: BTreeMap<String, Vec<String>>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BannerResult<Self> {
        Ok(loader::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> BannerResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Reject values that would only fail later on a remote host
    pub fn validate(&self, source: &Path) -> BannerResult<()> {
        if self.remote.file_mode_bits().is_none() {
            return Err(BannerError::Config {
                file: source.to_path_buf(),
                message: format!(
                    "remote.file_mode '{}' is not an octal permission mode",
                    self.remote.file_mode
                ),
            });
        }
        if self.remote.owner.trim().is_empty() {
            return Err(BannerError::Config {
                file: source.to_path_buf(),
                message: "remote.owner must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
