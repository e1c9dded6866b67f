//! Dry-run Remote Channel
//!
//! Records what would be sent to each host and prints it, without opening
//! a connection. The pipeline above it runs unchanged.

use std::cell::RefCell;

use crate::domain::ports::{RemoteChannel, RemoteError, UploadOptions};

#[derive(Default)]
pub struct DryRunChannel {
    log: RefCell<Vec<String>>,
    quiet: bool,
}

impl DryRunChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record without printing
    pub fn quiet() -> Self {
        Self {
            log: RefCell::new(Vec::new()),
            quiet: true,
        }
    }

    /// Every line recorded so far, in order
    pub fn recorded(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    fn record(&self, line: String) {
        if !self.quiet {
            eprintln!("[dry-run] {}", line);
        }
        self.log.borrow_mut().push(line);
    }
}

impl RemoteChannel for DryRunChannel {
    fn run_as_sudo(&self, host: &str, command: &str) -> Result<(), RemoteError> {
        self.record(format!("{}: sudo {}", host, command));
        Ok(())
    }

    fn upload(
        &self,
        host: &str,
        content: &str,
        remote_path: &str,
        options: &UploadOptions,
    ) -> Result<(), RemoteError> {
        let mode = options
            .mode
            .map(|m| format!(" mode {:o}", m))
            .unwrap_or_default();
        let sudo = if options.use_sudo { " (sudo)" } else { "" };
        self.record(format!(
            "{}: put {} bytes -> {}{}{}",
            host,
            content.len(),
            remote_path,
            mode,
            sudo
        ));
        Ok(())
    }
}
