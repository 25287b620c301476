use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn ll() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ll"))
}

#[test]
fn directory_listing_has_header_rows_and_footer() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("README.md"), "0123456789").unwrap();
    fs::write(dir.path().join("Makefile"), "all:\n").unwrap();
    fs::write(dir.path().join("file.JS"), "x").unwrap();
    fs::create_dir(dir.path().join("bin")).unwrap();

    let output = ll().arg(dir.path()).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("\x1b[0;33m\u{f07c}\x1b[0;34m  /"));
    // rows come back sorted by name
    assert!(lines[1].contains("\u{e20f}   Makefile"));
    assert!(lines[2].contains("\u{f06e}   README.md"));
    assert!(lines[3].contains("\u{f07b}\x1b[0m   bin"));
    assert!(lines[4].contains("\u{f036}   file.JS"));
    assert!(lines[5].contains("Total:      4"));
}

#[test]
fn file_target_prints_one_row() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("notes.md");
    fs::write(&file, "# notes\n").unwrap();

    ll().arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{e609}   notes.md"))
        .stdout(predicate::str::contains("8 B"))
        .stdout(predicate::str::contains("Total:").not())
        .stdout(predicate::function(|s: &str| s.lines().count() == 1));
}

#[test]
fn empty_directory_reports_zero() {
    let dir = tempfile::tempdir().unwrap();
    ll().arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total:      0   Size:        0 B"));
}

#[test]
fn missing_path_fails_with_message_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    ll().arg(dir.path().join("does-not-exist"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("\u{e231} stat "))
        .stderr(predicate::str::contains("does-not-exist"));
}

#[cfg(unix)]
#[test]
fn executables_and_symlinks_are_colored() {
    use std::os::unix::fs::{PermissionsExt, symlink};

    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("run.sh");
    fs::write(&script, vec![b'#'; 200]).unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    symlink(&script, dir.path().join("Makefile")).unwrap();

    ll().arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[0;33m\u{f0c1}\x1b[0m   Makefile"))
        .stdout(predicate::str::contains("\x1b[0;31m\u{f120}\x1b[0m   run.sh"));
}
