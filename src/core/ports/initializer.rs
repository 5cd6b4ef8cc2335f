//! Workspace initializer port
//!
//! Defines the interface for first-time workspace setup. The adapter only
//! resolves which directory to use and delegates; what "initialize" means
//! (client spec creation, directory layout) is the implementation's concern.

use crate::config::P4Config;

/// Workspace bootstrap abstraction
pub trait WorkspaceInitializer: Send + Sync {
    /// Prepare a working directory for the given project
    fn initialize(
        &self,
        config: &P4Config,
        project: &str,
        working_dir: &str,
    ) -> anyhow::Result<()>;
}
