//! Bring the client workspace up to date

use std::path::Path;
use std::sync::Arc;

use crate::adapters::{ClientInitializer, SystemProcessExecutor};
use crate::config::P4Config;
use crate::core::ports::ProcessExecutor;
use crate::core::services::WorkspaceManager;
use crate::output::{OperationResult, OutputMode};

/// Sync the workspace when `auto_get_source` is enabled
pub fn sync(config_path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let config = Arc::new(P4Config::load(config_path)?);
    let executor: Arc<dyn ProcessExecutor> = Arc::new(SystemProcessExecutor::new());
    let initializer = Arc::new(ClientInitializer::new(Arc::clone(&executor)));
    let manager = WorkspaceManager::new(Arc::clone(&config), executor, initializer);
    manager.get_source()?;

    let message = if config.auto_get_source {
        "Workspace synced to head.".to_string()
    } else {
        "Sync is disabled (auto_get_source = false); nothing done.".to_string()
    };
    OperationResult {
        success: true,
        message,
    }
    .render(mode);
    Ok(())
}
