use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_ll"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pretty icons"));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_ll"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn lists_the_working_directory_by_default() {
    Command::new(env!("CARGO_BIN_EXE_ll"))
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Cargo.toml"))
        .stdout(predicate::str::contains("Total:"));
}

#[test]
fn rejects_unknown_flags() {
    Command::new(env!("CARGO_BIN_EXE_ll")).arg("--all").assert().failure();
}
