//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use crate::output::OutputMode;

/// p4ci - change detection and labeling for Perforce-backed CI pipelines
#[derive(Parser, Debug)]
#[command(
    name = "p4ci",
    version,
    about = "Change detection and labeling for Perforce-backed CI pipelines",
    long_about = "Discover submitted change lists in a time window, stamp build\n\
                  labels, and bootstrap client workspaces by driving the p4\n\
                  command-line client as a child process."
)]
pub struct Cli {
    /// Path to the adapter configuration file
    #[arg(short, long, global = true, default_value = "p4ci.toml")]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Sub-command to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level sub-commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List modifications submitted in a time window
    Changes {
        /// Window start, inclusive (`YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`)
        #[arg(long)]
        from: String,

        /// Window end, inclusive (`YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`)
        #[arg(long)]
        to: String,
    },

    /// Create a label for the current state of the view and sync it
    Label {
        /// Label name (must contain at least one non-digit character)
        name: String,
    },

    /// Bring the client workspace up to date
    Sync,

    /// Create the client workspace for a project
    Init {
        /// Project name
        project: String,

        /// Directory to use when no working directory is configured
        #[arg(long)]
        working_dir: String,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Changes { from, to }) => {
            commands::changes(&cli.config, &from, &to, output_mode)
        },
        Some(Command::Label { name }) => commands::label(&cli.config, &name, output_mode),
        Some(Command::Sync) => commands::sync(&cli.config, output_mode),
        Some(Command::Init {
            project,
            working_dir,
        }) => commands::init(&cli.config, &project, &working_dir, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("p4ci v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("p4ci v{}", env!("CARGO_PKG_VERSION"));
                println!("Use --help for usage.");
            }
            Ok(())
        },
    }
}
