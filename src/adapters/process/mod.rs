//! System process execution adapter
//!
//! Implements [`ProcessExecutor`] on `std::process::Command`. The rendered
//! argument string is split on whitespace into discrete argv elements; no
//! shell is ever involved, so nothing in the argument string can be
//! re-interpreted on the way to the kernel.

use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::Context;

use crate::core::ports::{ProcessExecutor, ProcessInfo, ProcessOutput};

/// Blocking executor backed by `std::process`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessExecutor;

impl SystemProcessExecutor {
    /// Create a new system executor
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ProcessExecutor for SystemProcessExecutor {
    fn execute(&self, info: &ProcessInfo) -> anyhow::Result<ProcessOutput> {
        log::debug!("executing: {} {}", info.executable, info.arguments);

        let mut command = Command::new(&info.executable);
        command
            .args(info.arguments.split_whitespace())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(if info.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            });
        if let Some(dir) = &info.working_dir {
            command.current_dir(dir);
        }

        let mut child = command
            .spawn()
            .with_context(|| format!("cannot spawn {}", info.executable))?;
        if let Some(content) = &info.stdin {
            child
                .stdin
                .take()
                .context("child stdin is not piped")?
                .write_all(content.as_bytes())
                .context("cannot write to child stdin")?;
            // stdin handle dropped here, closing the pipe so the child sees EOF
        }

        let output = child
            .wait_with_output()
            .with_context(|| format!("cannot collect output of {}", info.executable))?;
        Ok(ProcessOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code().unwrap_or(-1),
        })
    }
}
