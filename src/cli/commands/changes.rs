//! List modifications submitted in a time window

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::adapters::SystemProcessExecutor;
use crate::config::P4Config;
use crate::core::services::ChangeDetector;
use crate::output::{ChangesReport, OutputMode};

/// Detect changes in the window and render them
pub fn changes(config_path: &Path, from: &str, to: &str, mode: OutputMode) -> anyhow::Result<()> {
    let config = Arc::new(P4Config::load(config_path)?);
    let window_from = parse_instant(from)?;
    let window_to = parse_instant(to)?;

    let detector = ChangeDetector::new(config, Arc::new(SystemProcessExecutor::new()));
    let modifications = detector.modifications_between(window_from, window_to)?;

    ChangesReport {
        from: from.to_string(),
        to: to.to_string(),
        modifications,
    }
    .render(mode);
    Ok(())
}

/// Accept `YYYY-MM-DD HH:MM:SS` or a bare date (midnight)
fn parse_instant(input: &str) -> anyhow::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d").map(|date| date.and_time(NaiveTime::MIN))
        })
        .with_context(|| format!("cannot parse instant {input:?}; expected YYYY-MM-DD[ HH:MM:SS]"))
}
