//! Create and sync a build label

use std::path::Path;
use std::sync::Arc;

use crate::adapters::SystemProcessExecutor;
use crate::config::P4Config;
use crate::core::services::Labeler;
use crate::output::{OperationResult, OutputMode};

/// Apply a label to the current state of the view
pub fn label(config_path: &Path, name: &str, mode: OutputMode) -> anyhow::Result<()> {
    let config = Arc::new(P4Config::load(config_path)?);
    let labeler = Labeler::new(Arc::clone(&config), Arc::new(SystemProcessExecutor::new()));
    labeler.apply(name)?;

    let message = if config.apply_label {
        format!("Label {name} created and synced.")
    } else {
        "Labeling is disabled (apply_label = false); nothing done.".to_string()
    };
    OperationResult {
        success: true,
        message,
    }
    .render(mode);
    Ok(())
}
