//! Configuration management
//!
//! Loads `emergency-banner.toml`: remote access settings and the role
//! table. Environment variables with the `BANNER_` prefix override the file.

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{
    apply_overrides, load_for_cli, load_with_warnings, with_env_overrides, ConfigWarning,
    LoadedConfig, LOCAL_CONFIG_FILE,
};
pub use types::{Config, RemoteConfig};
