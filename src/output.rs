//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. The JSON shape is what a
//! CI orchestrator would consume; human mode is for eyeballing a window.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::Modification;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a change-detection run
#[derive(Debug, Serialize)]
pub struct ChangesReport {
    /// Window start (inclusive), as given on the command line
    pub from: String,
    /// Window end (inclusive), as given on the command line
    pub to: String,
    /// One record per modified file
    pub modifications: Vec<Modification>,
}

impl ChangesReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.modifications.is_empty() {
            println!("No submitted changes between {} and {}.", self.from, self.to);
            return;
        }

        println!(
            "{} modification(s) between {} and {}:\n",
            self.modifications.len(),
            self.from,
            self.to
        );
        for m in &self.modifications {
            println!(
                "  {} {}/{} ({}) by {} on {}",
                m.change_number.bold(),
                m.folder_name,
                m.file_name,
                m.modification_type,
                m.author,
                m.date
            );
            if !m.comment.is_empty() {
                println!("      {}", m.comment.dimmed());
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.success {
                    println!("{}", self.message);
                } else {
                    println!("{}", self.message.red());
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
