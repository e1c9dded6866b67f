//! SSH Remote Channel
//!
//! Implements RemoteChannel with the system `ssh` and `scp` binaries, so the
//! operator's own SSH config, agent and jump hosts apply unchanged.
//!
//! Uploads are staged to a local temp file carrying the requested mode,
//! copied with `scp -p` to a temp path on the host, then moved into place
//! (with sudo when asked) and chmod'ed to the staged mode.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tracing::debug;

use crate::config::RemoteConfig;
use crate::domain::ports::{shell_quote, RemoteChannel, RemoteError, UploadOptions};

/// `ssh` exits 255 when the connection itself fails
const SSH_CONNECTION_FAILURE: i32 = 255;

/// Remote channel over OpenSSH
pub struct SshChannel {
    ssh_program: String,
    scp_program: String,
    /// Login user; `None` defers to the operator's SSH config
    user: Option<String>,
}

impl SshChannel {
    pub fn from_config(config: &RemoteConfig) -> Self {
        Self {
            ssh_program: config.ssh_program.clone(),
            scp_program: config.scp_program.clone(),
            user: config.user.clone(),
        }
    }

    /// SSH destination for `host` (`user@host` or `host`)
    fn destination(&self, host: &str) -> String {
        match &self.user {
            Some(user) if !host.contains('@') => format!("{}@{}", user, host),
            _ => host.to_string(),
        }
    }

    fn sudo_command(command: &str) -> String {
        format!("sudo sh -c {}", shell_quote(command))
    }

    fn run(&self, host: &str, remote_command: &str) -> Result<(), RemoteError> {
        debug!(host, command = remote_command, "ssh");
        let output = Command::new(&self.ssh_program)
            .arg("--")
            .arg(self.destination(host))
            .arg(remote_command)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| RemoteError::Connection(format!("failed to spawn {}: {}", self.ssh_program, e)))?;

        check_output(remote_command, &output)
    }

    fn copy(&self, local: &std::path::Path, host: &str, remote_path: &str) -> Result<(), RemoteError> {
        let dest = format!("{}:{}", self.destination(host), remote_path);
        debug!(host, local = %local.display(), remote = remote_path, "scp");
        let output = Command::new(&self.scp_program)
            .arg("-p") // preserve mode and times of the staged file
            .arg("-q")
            .arg("--")
            .arg(local)
            .arg(&dest)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| RemoteError::Connection(format!("failed to spawn {}: {}", self.scp_program, e)))?;

        check_output(&format!("scp {}", dest), &output)
    }
}

fn check_output(command: &str, output: &Output) -> Result<(), RemoteError> {
    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if output.status.code() == Some(SSH_CONNECTION_FAILURE) {
        return Err(RemoteError::Connection(stderr));
    }
    Err(RemoteError::CommandFailed {
        command: command.to_string(),
        code: output.status.code(),
        stderr,
    })
}

/// Stage `content` to a local temp file with `mode`
fn stage(content: &str, mode: Option<u32>) -> Result<tempfile::NamedTempFile, RemoteError> {
    let mut staged = tempfile::Builder::new()
        .prefix("emergency-banner-")
        .tempfile()?;
    staged.write_all(content.as_bytes())?;
    staged.flush()?;

    if let Some(mode) = mode {
        set_mode(staged.path(), mode)?;
    }
    Ok(staged)
}

#[cfg(unix)]
fn set_mode(path: &std::path::Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &std::path::Path, _mode: u32) -> std::io::Result<()> {
    Ok(())
}

/// Shell command that moves the uploaded temp file over `remote_path`
///
/// When the move or chmod fails the temp copy is deleted and the command
/// still exits non-zero.
fn install_command(temp_path: &str, remote_path: &str, mode: Option<u32>) -> String {
    let temp = shell_quote(temp_path);
    let mut command = format!("mv {} {}", temp, shell_quote(remote_path));
    if let Some(mode) = mode {
        command.push_str(&format!(" && chmod {:o} {}", mode, shell_quote(remote_path)));
    }
    command.push_str(&format!(" || {{ rm -f {}; exit 1; }}", temp));
    command
}

impl RemoteChannel for SshChannel {
    fn run_as_sudo(&self, host: &str, command: &str) -> Result<(), RemoteError> {
        self.run(host, &Self::sudo_command(command))
    }

    fn upload(
        &self,
        host: &str,
        content: &str,
        remote_path: &str,
        options: &UploadOptions,
    ) -> Result<(), RemoteError> {
        let staged = stage(content, options.mode)?;
        let file_name = staged
            .path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| RemoteError::Io("staged file has no name".to_string()))?;
        let temp_path = format!("/tmp/{}", file_name);

        self.copy(staged.path(), host, &temp_path)?;

        let install = install_command(&temp_path, remote_path, options.mode);
        if options.use_sudo {
            self.run_as_sudo(host, &install)
        } else {
            self.run(host, &install)
        }
    }
}
