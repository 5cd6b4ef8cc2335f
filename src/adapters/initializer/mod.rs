//! Client workspace bootstrap adapter
//!
//! Implements [`WorkspaceInitializer`] by creating the workspace root and
//! feeding a rendered client spec to `client -i`, the same spec-on-stdin
//! mechanism the labeler uses.

use std::fmt;
use std::fs;
use std::sync::Arc;

use anyhow::Context;
use thiserror::Error;

use crate::config::P4Config;
use crate::core::ports::{ProcessExecutor, WorkspaceInitializer};
use crate::core::services::execute_checked;
use crate::p4;

/// Errors raised while bootstrapping a client workspace
#[derive(Debug, Clone, Copy, Error)]
pub enum InitializerError {
    /// A client spec cannot be rendered without a client name
    #[error("cannot create a client workspace without a configured client")]
    MissingClient,
}

/// Creates the client workspace through `client -i`
pub struct ClientInitializer {
    executor: Arc<dyn ProcessExecutor>,
}

impl fmt::Debug for ClientInitializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientInitializer").finish_non_exhaustive()
    }
}

impl ClientInitializer {
    /// Create an initializer over the given executor
    #[must_use]
    pub fn new(executor: Arc<dyn ProcessExecutor>) -> Self {
        Self { executor }
    }
}

impl WorkspaceInitializer for ClientInitializer {
    fn initialize(
        &self,
        config: &P4Config,
        project: &str,
        working_dir: &str,
    ) -> anyhow::Result<()> {
        let client = config
            .client
            .as_deref()
            .filter(|c| !c.is_empty())
            .ok_or(InitializerError::MissingClient)?;

        fs::create_dir_all(working_dir)
            .with_context(|| format!("cannot create workspace root {working_dir}"))?;

        let body = p4::client_spec_body(config, client, project, working_dir);
        let info = p4::client_spec_command(config).with_stdin(body);
        execute_checked(self.executor.as_ref(), &info)?;

        log::info!("created client {client} for {project} in {working_dir}");
        Ok(())
    }
}
