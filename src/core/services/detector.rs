//! Change detection service
//!
//! Discovery is two-phased: the `changes` listing yields the change list
//! numbers submitted in the window, then a single `describe` expands them
//! into per-file modifications. The numbers are joined into one
//! space-separated token string and re-validated by the command builder
//! before they reach a command line.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::config::P4Config;
use crate::core::models::Modification;
use crate::core::ports::ProcessExecutor;
use crate::core::services::execute_checked;
use crate::p4;
use crate::parser::{ChangesParser, DescribeParser};

/// Discovers what changed in a time window
pub struct ChangeDetector {
    config: Arc<P4Config>,
    executor: Arc<dyn ProcessExecutor>,
    changes: ChangesParser,
    describe: DescribeParser,
}

impl fmt::Debug for ChangeDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeDetector")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ChangeDetector {
    /// Create a detector over the given configuration and executor
    #[must_use]
    pub fn new(config: Arc<P4Config>, executor: Arc<dyn ProcessExecutor>) -> Self {
        Self {
            config,
            executor,
            changes: ChangesParser::new(),
            describe: DescribeParser::new(),
        }
    }

    /// List every file-level modification submitted in `[from, to]`
    ///
    /// Change lists are reported in the tool's own order (most recent
    /// first) and are not re-sorted. An empty window returns an empty vec
    /// without invoking `describe` at all.
    pub fn modifications_between(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> anyhow::Result<Vec<Modification>> {
        let listing = execute_checked(
            self.executor.as_ref(),
            &p4::changes_command(&self.config, from, to),
        )?;
        let entries = self.changes.parse(&listing.stdout);
        if entries.is_empty() {
            log::debug!("no submitted changes between {from} and {to}");
            return Ok(Vec::new());
        }

        let numbers = entries
            .iter()
            .map(|entry| entry.number.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let describe_info = p4::describe_command(&self.config, &numbers)?;
        let described = execute_checked(self.executor.as_ref(), &describe_info)?;

        let modifications = self.describe.parse(&described.stdout);
        log::debug!(
            "{} change list(s) expanded into {} modification(s)",
            entries.len(),
            modifications.len()
        );
        Ok(modifications)
    }
}
