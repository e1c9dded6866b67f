//! Remote Channel Port
//!
//! Abstracts command execution and file transfer on a target host, so the
//! publish/retract pipelines never know whether they talk to SSH, a dry-run
//! recorder or a test double.

use thiserror::Error;

/// Error from a single remote operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// The host could not be reached
    #[error("connection error: {0}")]
    Connection(String),
    /// The remote command ran and exited non-zero
    #[error("command `{command}` exited with {}: {stderr}", exit_code_label(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
    /// Local I/O while staging or spawning
    #[error("I/O error: {0}")]
    Io(String),
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

impl From<std::io::Error> for RemoteError {
    fn from(err: std::io::Error) -> Self {
        RemoteError::Io(err.to_string())
    }
}

/// How an upload lands on the remote host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadOptions {
    /// Move the file into place with elevated privileges
    pub use_sudo: bool,
    /// Permission bits of the staged local source, mirrored onto the remote
    /// file. `None` leaves the remote mode to the host's defaults.
    pub mode: Option<u32>,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            use_sudo: true,
            mode: Some(0o644),
        }
    }
}

/// Trait for remote hosts reachable by the operator
pub trait RemoteChannel {
    /// Run a shell command on `host` as root
    fn run_as_sudo(&self, host: &str, command: &str) -> Result<(), RemoteError>;

    /// Replace the full content of `remote_path` on `host`
    fn upload(
        &self,
        host: &str,
        content: &str,
        remote_path: &str,
        options: &UploadOptions,
    ) -> Result<(), RemoteError>;
}

/// Single-quote a string for a POSIX shell
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}
