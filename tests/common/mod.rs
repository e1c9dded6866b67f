//! Common test utilities for emergency-banner CLI tests.
//!
//! `TestEnv` runs the binary in a temp working directory with an isolated
//! HOME, so no operator config or BANNER_* variable leaks into a test.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Lines the dry-run channel printed, without the prefix
    pub fn dry_run_lines(&self) -> Vec<&str> {
        self.stderr
            .lines()
            .filter_map(|l| l.strip_prefix("[dry-run] "))
            .collect()
    }

    /// stdout parsed as NDJSON
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad NDJSON {l:?}: {e}")))
            .collect()
    }
}

pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().unwrap(),
            home_dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Write `emergency-banner.toml` into the working directory
    pub fn with_config(self, content: &str) -> Self {
        fs::write(self.project_root.path().join("emergency-banner.toml"), content).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.project_root.path()
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_emergency-banner"));
        cmd.current_dir(self.project_root.path())
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("RUST_LOG");
        for key in ["BANNER_HOSTS", "BANNER_SSH_USER", "BANNER_OWNER", "BANNER_RESTART_COMMAND"] {
            cmd.env_remove(key);
        }
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        TestResult::from_output(self.command().args(args).output().unwrap())
    }
}
