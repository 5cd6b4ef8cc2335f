//! Create the client workspace for a project

use std::path::Path;
use std::sync::Arc;

use crate::adapters::{ClientInitializer, SystemProcessExecutor};
use crate::config::P4Config;
use crate::core::ports::ProcessExecutor;
use crate::core::services::WorkspaceManager;
use crate::output::{OperationResult, OutputMode};

/// Initialize the working directory for `project`
pub fn init(
    config_path: &Path,
    project: &str,
    working_dir: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = Arc::new(P4Config::load(config_path)?);
    let executor: Arc<dyn ProcessExecutor> = Arc::new(SystemProcessExecutor::new());
    let initializer = Arc::new(ClientInitializer::new(Arc::clone(&executor)));
    let manager = WorkspaceManager::new(Arc::clone(&config), executor, initializer);
    manager.initialize_directory(project, working_dir)?;

    OperationResult {
        success: true,
        message: format!(
            "Workspace initialized for {project} in {}.",
            config.effective_working_directory(working_dir)
        ),
    }
    .render(mode);
    Ok(())
}
