use crate::utils::file_names;
use clap::Parser;
use fsplit::{cli, command, command::split::SplitError};
use std::ffi::OsStr;

/// Precondition: The source path does not exist.
/// Action: Run `fsplit` on it.
/// Expectation: A not-found error is printed, nothing is created and the command
/// still exits successfully.
#[cfg(not(target_family = "wasm"))]
#[test]
fn missing_source_reports_not_found() {
    use assert_cmd::cargo::cargo_bin_cmd;
    use predicates::prelude::*;

    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("nope.bin");

    let mut cmd = cargo_bin_cmd!("fsplit");
    cmd.arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "error: File not found at '{}'",
            source.display()
        )));

    assert!(file_names(dir.path()).unwrap().is_empty());
}

/// Precondition: The source path is a directory.
/// Action: Split it in process through `command::entry`.
/// Expectation: The error is `SplitError::NotFound` and nothing is created.
#[test]
fn directory_source_is_not_found() {
    let dir = tempfile::tempdir().unwrap();

    let err = command::entry(cli::Cli::parse_from([
        OsStr::new("fsplit"),
        dir.path().as_os_str(),
    ]))
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SplitError>(),
        Some(SplitError::NotFound(_))
    ));
    assert!(file_names(dir.path()).unwrap().is_empty());
}
