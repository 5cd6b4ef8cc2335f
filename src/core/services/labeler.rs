//! Label management service
//!
//! Stamps a named label onto the current state of the view: `label -i`
//! with a rendered spec body on stdin, then `labelsync -l <label>`. The
//! whole operation is gated on `apply_label` and the label name is
//! validated before any process is spawned.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::config::P4Config;
use crate::core::ports::ProcessExecutor;
use crate::core::services::execute_checked;
use crate::p4;

/// Errors raised by label validation
#[derive(Debug, Error)]
pub enum LabelError {
    /// The tool silently treats an all-digit label as a change list
    /// number, so numeric-only labels are rejected outright
    #[error("numeric-only label rejected: {0:?}")]
    NumericOnly(String),

    /// Labels reach a command line, so they are held to a conservative
    /// character set
    #[error("label contains characters outside [A-Za-z0-9._-]: {0:?}")]
    InvalidCharacters(String),
}

/// Validate a candidate label name
///
/// A label must contain at least one non-digit character and nothing
/// outside `[A-Za-z0-9._-]`.
pub fn validate_label(label: &str) -> Result<(), LabelError> {
    if !label.chars().any(|c| !c.is_ascii_digit()) {
        return Err(LabelError::NumericOnly(label.to_string()));
    }
    if !label
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        return Err(LabelError::InvalidCharacters(label.to_string()));
    }
    Ok(())
}

/// Applies labels to the current state of the view
pub struct Labeler {
    config: Arc<P4Config>,
    executor: Arc<dyn ProcessExecutor>,
}

impl fmt::Debug for Labeler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Labeler")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Labeler {
    /// Create a labeler over the given configuration and executor
    #[must_use]
    pub fn new(config: Arc<P4Config>, executor: Arc<dyn ProcessExecutor>) -> Self {
        Self { config, executor }
    }

    /// Create the label and sync it to the head revisions of the view
    ///
    /// A no-op when `apply_label` is false; that gate is checked before
    /// anything else, including validation. Both tool invocations must
    /// succeed: if `labelsync` fails after the spec was created, the label
    /// exists but is unsynced, and that surfaces as an error rather than
    /// being absorbed.
    pub fn apply(&self, label: &str) -> anyhow::Result<()> {
        if !self.config.apply_label {
            return Ok(());
        }
        validate_label(label)?;

        let body = p4::label_spec_body(&self.config, label);
        let spec_info = p4::label_spec_command(&self.config).with_stdin(body);
        execute_checked(self.executor.as_ref(), &spec_info)?;

        let sync_info = p4::label_sync_command(&self.config, label);
        execute_checked(self.executor.as_ref(), &sync_info)?;

        log::info!("applied label {label} to {}", self.config.view);
        Ok(())
    }
}
