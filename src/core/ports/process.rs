//! Process execution port
//!
//! Defines the interface to the facility that spawns the Perforce binary.
//! The core never spawns a child directly; every invocation is described by
//! a [`ProcessInfo`] and handed to a [`ProcessExecutor`].

use std::path::PathBuf;

use thiserror::Error;

/// Description of a single child-process invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    /// Executable path or name
    pub executable: String,

    /// Rendered argument string
    pub arguments: String,

    /// Directory to run in, when set
    pub working_dir: Option<PathBuf>,

    /// Content fed to the child's standard input, when set
    pub stdin: Option<String>,
}

impl ProcessInfo {
    /// Create a process description with no working directory or stdin
    #[must_use]
    pub const fn new(executable: String, arguments: String) -> Self {
        Self {
            executable,
            arguments,
            working_dir: None,
            stdin: None,
        }
    }

    /// Attach standard-input content
    #[must_use]
    pub fn with_stdin(mut self, content: String) -> Self {
        self.stdin = Some(content);
        self
    }

    /// Attach a working directory
    #[must_use]
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }
}

/// Captured result of a finished child process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Captured standard output
    pub stdout: String,

    /// Captured standard error
    pub stderr: String,

    /// Process exit code
    pub exit_code: i32,
}

impl ProcessOutput {
    /// Whether the process exited with status zero
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Raised when the external tool exits with a non-zero status
///
/// Carries the captured standard error for diagnostics. Never retried at
/// this layer; retry policy belongs to the caller.
#[derive(Debug, Clone, Error)]
#[error("p4 exited with status {exit_code}: {stderr}")]
pub struct ToolError {
    /// Exit code reported by the tool
    pub exit_code: i32,

    /// Captured standard error
    pub stderr: String,
}

/// Child-process execution abstraction
///
/// Implementations run the described process to completion, blocking the
/// caller. Timeouts and cancellation, if any, live behind this boundary.
pub trait ProcessExecutor: Send + Sync {
    /// Run the process to completion and capture its output
    ///
    /// A non-zero exit is not an `Err` here; callers decide how to treat
    /// the exit code. `Err` means the process could not be run at all.
    fn execute(&self, info: &ProcessInfo) -> anyhow::Result<ProcessOutput>;
}
