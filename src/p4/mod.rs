//! Perforce command builders
//!
//! Pure functions that render each supported sub-command into a
//! [`ProcessInfo`] (executable path plus argument string). Nothing here
//! spawns a process.
//!
//! The argument surface must match the tool exactly:
//!
//! - `changes`: `[-s -c <client> -p <port> -u <user>] -s changes -s submitted <view>@<from>,@<to>`
//! - `describe`: `[-s -c <client> -p <port> -u <user>] -s describe -s <changeNumbers>`
//! - `label -i` with a spec body on stdin, `labelsync -l <label>`, `sync`,
//!   and `client -i` for workspace bootstrap
//!
//! Change numbers embedded in a command line are re-validated against a
//! digits-and-spaces grammar even though they originate from our own
//! parsing; anything else is rejected before a process exists to exploit.

use std::fmt::Write as _;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::config::P4Config;
use crate::core::ports::ProcessInfo;

/// Errors raised while assembling a command line
#[derive(Debug, Error)]
pub enum CommandError {
    /// A describe invocation needs at least one change number
    #[error("no change numbers supplied for describe")]
    EmptyChangeNumbers,

    /// Change numbers are restricted to digits and spaces
    #[error("change numbers contain characters outside the digits-and-spaces grammar: {0:?}")]
    InvalidChangeNumbers(String),
}

/// Verify that a change-number string matches the injection-safety grammar
///
/// The grammar admits only ASCII digits separated by single spaces. This is
/// deliberately strict: the string ends up embedded in a command line, so
/// shell metacharacters, quotes, or anything else unexpected must never
/// pass, regardless of where the string came from.
pub fn validate_change_numbers(input: &str) -> Result<(), CommandError> {
    if input.trim().is_empty() {
        return Err(CommandError::EmptyChangeNumbers);
    }
    if !input.chars().all(|c| c.is_ascii_digit() || c == ' ') {
        return Err(CommandError::InvalidChangeNumbers(input.to_string()));
    }
    Ok(())
}

/// Render the connection prefix shared by server-talking sub-commands
///
/// Always starts with the global `-s` (tagged output) flag, then `-c`,
/// `-p`, `-u` in that fixed order for whichever settings are present.
/// Ends with a trailing space so the sub-command can be appended directly.
fn connection_prefix(config: &P4Config) -> String {
    let mut prefix = String::from("-s");
    if let Some(client) = set(&config.client) {
        let _ = write!(prefix, " -c {client}");
    }
    if let Some(port) = set(&config.port) {
        let _ = write!(prefix, " -p {port}");
    }
    if let Some(user) = set(&config.user) {
        let _ = write!(prefix, " -u {user}");
    }
    prefix.push(' ');
    prefix
}

/// Treat empty strings the same as absent settings
fn set(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Wrap an argument string into a [`ProcessInfo`] for the configured binary
fn command(config: &P4Config, arguments: String) -> ProcessInfo {
    let mut info = ProcessInfo::new(config.executable.clone(), arguments);
    if let Some(dir) = set(&config.working_directory) {
        info = info.with_working_dir(PathBuf::from(dir));
    }
    info
}

/// Timestamps are rendered `YYYY/MM/DD:HH:MM:SS`, zero-padded, 24-hour
///
/// The instant is used as supplied; no timezone conversion happens here.
fn format_instant(instant: NaiveDateTime) -> String {
    instant.format("%Y/%m/%d:%H:%M:%S").to_string()
}

/// Build the `changes` listing command for an inclusive time window
#[must_use]
pub fn changes_command(config: &P4Config, from: NaiveDateTime, to: NaiveDateTime) -> ProcessInfo {
    let arguments = format!(
        "{}changes -s submitted {}@{},@{}",
        connection_prefix(config),
        config.view,
        format_instant(from),
        format_instant(to),
    );
    command(config, arguments)
}

/// Build the `describe` command for a space-separated change-number string
///
/// The change numbers are validated against the injection-safety grammar
/// first; the command is never built from a string that fails it.
pub fn describe_command(config: &P4Config, change_numbers: &str) -> Result<ProcessInfo, CommandError> {
    validate_change_numbers(change_numbers)?;
    let arguments = format!("{}describe -s {change_numbers}", connection_prefix(config));
    Ok(command(config, arguments))
}

/// Build the `label -i` command; the caller attaches the spec body as stdin
#[must_use]
pub fn label_spec_command(config: &P4Config) -> ProcessInfo {
    command(config, "label -i".to_string())
}

/// Build the `labelsync` command tying a label to the head revisions
#[must_use]
pub fn label_sync_command(config: &P4Config, label: &str) -> ProcessInfo {
    command(config, format!("labelsync -l {label}"))
}

/// Build the `sync` command bringing the client workspace up to date
#[must_use]
pub fn sync_command(config: &P4Config) -> ProcessInfo {
    command(config, "sync".to_string())
}

/// Build the `client -i` command; the caller attaches the spec body as stdin
#[must_use]
pub fn client_spec_command(config: &P4Config) -> ProcessInfo {
    command(config, "client -i".to_string())
}

/// Render the label specification body fed to `label -i`
///
/// Field layout is the tool's own spec format: tab-indented values,
/// blank-line separated sections.
#[must_use]
pub fn label_spec_body(config: &P4Config, label: &str) -> String {
    format!(
        "Label:\t{label}\n\nDescription:\n\tCreated by p4ci\n\nOptions:\tunlocked\n\nView:\n\t{view}\n",
        view = config.view,
    )
}

/// Render the client specification body fed to `client -i`
///
/// Maps the configured view into the named client workspace rooted at
/// `root`.
#[must_use]
pub fn client_spec_body(config: &P4Config, client: &str, project: &str, root: &str) -> String {
    format!(
        "Client:\t{client}\n\nDescription:\n\tCreated by p4ci for {project}\n\nRoot:\t{root}\n\nView:\n\t{view} //{client}/...\n",
        view = config.view,
    )
}
