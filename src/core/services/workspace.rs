//! Workspace management service
//!
//! Two small lifecycle operations the orchestrator calls around builds:
//! first-time directory initialization (delegated to the injected
//! initializer) and the optional pre-build `sync`.

use std::fmt;
use std::sync::Arc;

use crate::config::P4Config;
use crate::core::ports::{ProcessExecutor, WorkspaceInitializer};
use crate::core::services::execute_checked;
use crate::p4;

/// Bootstraps and syncs the client workspace
pub struct WorkspaceManager {
    config: Arc<P4Config>,
    executor: Arc<dyn ProcessExecutor>,
    initializer: Arc<dyn WorkspaceInitializer>,
}

impl fmt::Debug for WorkspaceManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkspaceManager")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl WorkspaceManager {
    /// Create a manager over the given configuration and collaborators
    #[must_use]
    pub fn new(
        config: Arc<P4Config>,
        executor: Arc<dyn ProcessExecutor>,
        initializer: Arc<dyn WorkspaceInitializer>,
    ) -> Self {
        Self {
            config,
            executor,
            initializer,
        }
    }

    /// Prepare a working directory for the given project
    ///
    /// The configured working directory wins when set and non-empty;
    /// otherwise the supplied fallback is used. The actual setup is
    /// delegated to the injected initializer.
    pub fn initialize_directory(&self, project: &str, fallback_dir: &str) -> anyhow::Result<()> {
        let dir = self.config.effective_working_directory(fallback_dir);
        log::debug!("initializing workspace for {project} in {dir}");
        self.initializer.initialize(&self.config, project, dir)
    }

    /// Bring the client workspace up to date before a build
    ///
    /// A no-op when `auto_get_source` is false. Output is discarded; a
    /// non-zero exit propagates as an error.
    pub fn get_source(&self) -> anyhow::Result<()> {
        if !self.config.auto_get_source {
            return Ok(());
        }
        execute_checked(self.executor.as_ref(), &p4::sync_command(&self.config))?;
        log::debug!("synced workspace for {}", self.config.view);
        Ok(())
    }
}
