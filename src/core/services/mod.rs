//! Orchestration services
//!
//! Each service combines the command builders with the injected ports and
//! owns one lifecycle concern of the adapter:
//!
//! - [`ChangeDetector`] - two-phase change discovery over a time window
//! - [`Labeler`] - validated label creation and sync after a build
//! - [`WorkspaceManager`] - workspace bootstrap and pre-build sync
//!
//! Everything is synchronous and blocking; each sub-command is one awaited
//! child process, and no retries happen at this layer.

mod detector;
mod labeler;
mod workspace;

pub use detector::ChangeDetector;
pub use labeler::{LabelError, Labeler, validate_label};
pub use workspace::WorkspaceManager;

use crate::core::ports::{ProcessExecutor, ProcessInfo, ProcessOutput, ToolError};

/// Execute a command, mapping a non-zero exit onto [`ToolError`]
pub(crate) fn execute_checked(
    executor: &dyn ProcessExecutor,
    info: &ProcessInfo,
) -> anyhow::Result<ProcessOutput> {
    let output = executor.execute(info)?;
    if output.success() {
        Ok(output)
    } else {
        Err(ToolError {
            exit_code: output.exit_code,
            stderr: output.stderr,
        }
        .into())
    }
}
