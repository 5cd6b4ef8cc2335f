//! Tests for the p4 command builders
//!
//! The argument strings here are the tool's compatibility surface; they
//! are asserted byte-for-byte.

use chrono::{NaiveDate, NaiveDateTime};
use p4ci::config::P4Config;
use p4ci::p4::{self, CommandError};

use crate::common::full_config;

fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

#[test]
fn test_changes_command_with_default_connection() {
    let config = P4Config::new("//depot/myproj/...");
    let info = p4::changes_command(&config, instant(2002, 10, 20, 2, 0, 0), instant(2002, 10, 31, 5, 5, 0));

    assert_eq!(info.executable, "p4");
    assert_eq!(
        info.arguments,
        "-s changes -s submitted //depot/myproj/...@2002/10/20:02:00:00,@2002/10/31:05:05:00"
    );
}

#[test]
fn test_changes_command_with_full_connection() {
    let config = full_config();
    let info = p4::changes_command(
        &config,
        instant(2003, 11, 20, 2, 10, 32),
        instant(2004, 10, 31, 5, 5, 1),
    );

    assert_eq!(info.executable, "c:\\bin\\p4.exe");
    assert_eq!(
        info.arguments,
        "-s -c myclient -p anotherserver:2666 -u me changes -s submitted //depot/myproject/...@2003/11/20:02:10:32,@2004/10/31:05:05:01"
    );
}

#[test]
fn test_empty_connection_settings_render_bare_prefix() {
    let mut config = P4Config::new("//depot/myproj/...");
    config.client = Some(String::new());
    config.user = Some(String::new());
    config.port = Some(String::new());

    let info = p4::changes_command(&config, instant(2002, 1, 1, 0, 0, 0), instant(2002, 1, 2, 0, 0, 0));
    assert!(info.arguments.starts_with("-s changes -s submitted"));
}

#[test]
fn test_describe_command_with_default_connection() {
    let config = P4Config::new("//depot/myproj/...");
    let info = p4::describe_command(&config, "3327 3328 332").unwrap();

    assert_eq!(info.executable, "p4");
    assert_eq!(info.arguments, "-s describe -s 3327 3328 332");
}

#[test]
fn test_describe_command_with_full_connection() {
    let info = p4::describe_command(&full_config(), "3327 3328 332").unwrap();
    assert_eq!(
        info.arguments,
        "-s -c myclient -p anotherserver:2666 -u me describe -s 3327 3328 332"
    );
}

#[test]
fn test_describe_command_rejects_shell_metacharacters() {
    let config = P4Config::new("//depot/myproj/...");
    let err = p4::describe_command(&config, "3327 3328 332; echo 'rm -rf /'").unwrap_err();
    assert!(matches!(err, CommandError::InvalidChangeNumbers(_)));
}

#[test]
fn test_describe_command_rejects_empty_input() {
    let config = P4Config::new("//depot/myproj/...");
    let err = p4::describe_command(&config, "").unwrap_err();
    assert!(matches!(err, CommandError::EmptyChangeNumbers));

    let err = p4::describe_command(&config, "   ").unwrap_err();
    assert!(matches!(err, CommandError::EmptyChangeNumbers));
}

#[test]
fn test_validate_change_numbers_accepts_digit_lists() {
    assert!(p4::validate_change_numbers("3327").is_ok());
    assert!(p4::validate_change_numbers("3327 3328 332").is_ok());
}

#[test]
fn test_validate_change_numbers_rejects_other_characters() {
    for input in ["3327\t3328", "3327\n", "-1", "3327a", "$(id)"] {
        assert!(
            matches!(
                p4::validate_change_numbers(input),
                Err(CommandError::InvalidChangeNumbers(_))
            ),
            "expected {input:?} to be rejected"
        );
    }
}

#[test]
fn test_label_and_sync_commands() {
    let config = P4Config::new("//depot/myproject/...");

    assert_eq!(p4::label_spec_command(&config).arguments, "label -i");
    assert_eq!(
        p4::label_sync_command(&config, "foo-123").arguments,
        "labelsync -l foo-123"
    );
    assert_eq!(p4::sync_command(&config).arguments, "sync");
    assert_eq!(p4::client_spec_command(&config).arguments, "client -i");
}

#[test]
fn test_label_spec_body_layout() {
    let config = P4Config::new("//depot/myproject/...");
    assert_eq!(
        p4::label_spec_body(&config, "foo-123"),
        "Label:\tfoo-123\n\nDescription:\n\tCreated by p4ci\n\nOptions:\tunlocked\n\nView:\n\t//depot/myproject/...\n"
    );
}

#[test]
fn test_client_spec_body_layout() {
    let config = P4Config::new("//depot/myproject/...");
    assert_eq!(
        p4::client_spec_body(&config, "myclient", "myProject", "/builds/myproject"),
        "Client:\tmyclient\n\nDescription:\n\tCreated by p4ci for myProject\n\nRoot:\t/builds/myproject\n\nView:\n\t//depot/myproject/... //myclient/...\n"
    );
}

#[test]
fn test_working_directory_is_attached_when_configured() {
    let mut config = P4Config::new("//depot/myproj/...");
    config.working_directory = Some("/builds/myproj".to_string());

    let info = p4::sync_command(&config);
    assert_eq!(info.working_dir.as_deref(), Some(std::path::Path::new("/builds/myproj")));

    let mut config = P4Config::new("//depot/myproj/...");
    config.working_directory = Some(String::new());
    assert!(p4::sync_command(&config).working_dir.is_none());
}
