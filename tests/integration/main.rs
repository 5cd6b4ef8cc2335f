//! Integration tests for the p4ci CLI
//!
//! These drive the compiled binary end-to-end against a stub `p4`
//! executable that replays canned tool output, so no Perforce server,
//! client, or depot is needed.


use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo;
use predicates::prelude::*;

/// Helper function to create a p4ci command
fn p4ci() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("p4ci"))
}

/// A `changes` listing with two submitted change lists
const STUB_CHANGES: &str = "info: Change 3328 on 2002/10/31 by someone@somewhere 'Something important '
info: Change 3327 on 2002/10/31 by someone@somewhere 'Joe's test '
exit: 0
";

/// The matching describe log with three affected files
const STUB_DESCRIBE: &str = "text: Change 3328 by someone@somewhere on 2002/10/31 18:20:59
text:
text: \tSomething important
text:
text: Affected files ...
text:
info1: //depot/myproject/docs/readme.txt#3 edit
info1: //depot/myproject/src/build.bat#2 edit
text:
text: Change 3327 by someone@somewhere on 2002/10/31 14:20:59
text:
text: \tJoe's test
text:
text: Affected files ...
text:
info1: //depot/myproject/src/server.cs#1 add
exit: 0
";

/// Write a stub `p4` that replays the canned listings
#[cfg(unix)]
fn write_stub_p4(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let changes_path = dir.join("changes.txt");
    fs::write(&changes_path, STUB_CHANGES).unwrap();
    let describe_path = dir.join("describe.txt");
    fs::write(&describe_path, STUB_DESCRIBE).unwrap();

    let script = dir.join("p4");
    fs::write(
        &script,
        format!(
            "#!/bin/sh\n\
             case \"$*\" in\n\
             \t*describe*) cat '{}' ;;\n\
             \t*changes*) cat '{}' ;;\n\
             \t\"label -i\"|\"client -i\") cat > /dev/null ;;\n\
             \t*) : ;;\n\
             esac\n",
            describe_path.display(),
            changes_path.display()
        ),
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script
}

/// Write a stub `p4` that always fails with the given stderr message
#[cfg(unix)]
fn write_failing_p4(dir: &Path, message: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("p4");
    fs::write(&script, format!("#!/bin/sh\necho '{message}' >&2\nexit 1\n")).unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script
}

/// Write a configuration pointing at the given executable
fn write_config(dir: &Path, executable: &Path, extra: &str) -> PathBuf {
    let path = dir.join("p4ci.toml");
    fs::write(
        &path,
        format!(
            "executable = \"{}\"\nview = \"//depot/myproject/...\"\n{extra}",
            executable.display()
        ),
    )
    .unwrap();
    path
}

#[test]
fn test_version() {
    p4ci()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("p4ci v"));
}

#[test]
fn test_missing_config_is_an_error() {
    p4ci()
        .args(["--config", "/nonexistent/p4ci.toml", "sync"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_config_without_view_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("p4ci.toml");
    fs::write(&path, "client = \"myclient\"\n").unwrap();

    p4ci()
        .args(["--config", path.to_str().unwrap(), "sync"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("view"));
}
