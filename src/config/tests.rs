use super::*;
use crate::error::BannerError;
use std::collections::HashMap;
use std::path::Path;
use tempfile::tempdir;

fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join(LOCAL_CONFIG_FILE);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.remote.owner, "deploy:deploy");
    assert_eq!(config.remote.file_mode_bits(), Some(0o644));
    assert_eq!(config.remote.restart_command, "service {app} restart");
    assert!(config.remote.user.is_none());
    assert!(config.roles.is_empty());
}

#[test]
fn test_config_parse_full() {
    let dir = tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[remote]
user = "deploy"
owner = "www-data:www-data"
file_mode = "640"
restart_command = "systemctl restart {app}"

[roles]
class-frontend = ["frontend-1.example", "frontend-2.example"]
"#,
    );

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();
    assert!(warnings.is_empty());
    assert_eq!(config.remote.user.as_deref(), Some("deploy"));
    assert_eq!(config.remote.owner, "www-data:www-data");
    assert_eq!(config.remote.file_mode_bits(), Some(0o640));
    assert_eq!(config.remote.restart_command, "systemctl restart {app}");
    assert_eq!(
        config.roles["class-frontend"],
        vec!["frontend-1.example", "frontend-2.example"]
    );
}

#[test]
fn test_config_partial_keeps_defaults() {
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), "[remote]\nuser = \"ops\"\n");

    let config = Config::load(&path).unwrap();
    assert_eq!(config.remote.user.as_deref(), Some("ops"));
    assert_eq!(config.remote.owner, "deploy:deploy");
    assert_eq!(config.remote.ssh_program, "ssh");
}

#[test]
fn test_unknown_keys_are_warnings_with_line() {
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), "[remote]\nowner = \"deploy:deploy\"\nrestart = \"x\"\n");

    let (_, warnings) = Config::load_with_warnings(&path).unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "restart");
    assert_eq!(warnings[0].line, Some(3));
}

#[test]
fn test_invalid_toml_is_config_error() {
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), "[remote\nuser = ");

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, BannerError::Config { .. }));
}

#[test]
fn test_invalid_file_mode_is_rejected() {
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), "[remote]\nfile_mode = \"rw-r--r--\"\n");

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("not an octal permission mode"), "{}", err);
}

#[test]
fn test_file_mode_accepts_rust_style_prefix() {
    let remote = RemoteConfig {
        file_mode: "0o600".to_string(),
        ..RemoteConfig::default()
    };
    assert_eq!(remote.file_mode_bits(), Some(0o600));
}

#[test]
fn test_load_for_cli_discovers_local_file() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "[roles]\nclass-frontend = [\"web-1\"]\n");

    let loaded = load_for_cli(None, dir.path()).unwrap();
    assert_eq!(loaded.source, Some(dir.path().join(LOCAL_CONFIG_FILE)));
    assert_eq!(loaded.config.roles["class-frontend"], vec!["web-1"]);
}

#[test]
fn test_load_for_cli_missing_explicit_file_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = load_for_cli(Some(&missing), dir.path()).unwrap_err();
    assert!(matches!(err, BannerError::Config { ref file, .. } if file == &missing));
}

#[test]
fn test_env_overrides() {
    let env = HashMap::from([
        ("BANNER_SSH_USER", "ops"),
        ("BANNER_OWNER", "app:app"),
        ("BANNER_RESTART_COMMAND", "initctl restart {app}"),
    ]);
    let config = apply_overrides(Config::default(), |k| env.get(k).map(|v| v.to_string()));

    assert_eq!(config.remote.user.as_deref(), Some("ops"));
    assert_eq!(config.remote.owner, "app:app");
    assert_eq!(config.remote.restart_command, "initctl restart {app}");
}

#[test]
fn test_empty_env_values_are_ignored() {
    let config = apply_overrides(Config::default(), |k| {
        (k == "BANNER_OWNER").then(String::new)
    });
    assert_eq!(config.remote.owner, "deploy:deploy");
}
