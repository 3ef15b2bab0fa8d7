mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn setup() -> Command {
    Command::cargo_bin("collapse_setup").unwrap()
}

#[test]
fn test_wrong_argument_count() {
    let work = tempfile::tempdir().unwrap();
    setup()
        .current_dir(work.path())
        .args(["publish", "Stable"])
        .assert()
        .code(255)
        .stdout(predicate::str::contains("[Stable/Preview]"));
    assert!(!work.path().join("app").exists());
}

#[test]
fn test_no_arguments() {
    setup()
        .assert()
        .code(255)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_invalid_channel() {
    let work = tempfile::tempdir().unwrap();
    setup()
        .current_dir(work.path())
        .args(["publish", "Nightly", "true"])
        .assert()
        .code(254)
        .stdout(predicate::str::contains("Nightly"));
    assert!(!work.path().join("app").exists());
}

#[test]
fn test_invalid_flag() {
    let work = tempfile::tempdir().unwrap();
    setup()
        .current_dir(work.path())
        .args(["publish", "stable", "yes"])
        .assert()
        .code(253)
        .stdout(predicate::str::contains("Usage"));
    assert!(!work.path().join("app").exists());
}

#[test]
fn test_processing_failure_is_not_success() {
    let work = tempfile::tempdir().unwrap();
    let missing = work.path().join("no-such-publish-dir");
    setup()
        .current_dir(work.path())
        .args([missing.to_str().unwrap(), "Stable", "true"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("resolve version failed"));
}

#[test]
fn test_lone_help_is_wrong_argument_count() {
    setup()
        .arg("--help")
        .assert()
        .code(255)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_hyphen_leading_flag_is_invalid_flag() {
    let work = tempfile::tempdir().unwrap();
    setup()
        .current_dir(work.path())
        .args(["publish", "Stable", "-1"])
        .assert()
        .code(253)
        .stdout(predicate::str::contains("-1"));
    assert!(!work.path().join("app").exists());
}

#[test]
fn test_wsx_only_run() {
    let source = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    common::publish_tree(source.path(), "Preview", [2, 0, 1, 0]);

    setup()
        .current_dir(work.path())
        .args([source.path().to_str().unwrap(), "PREVIEW", " True "])
        .assert()
        .success()
        .stdout(predicate::str::contains("CL-Preview-2.0.1_InstallerScript.wsx"));

    assert!(work.path().join("CL-Preview-2.0.1_InstallerScript.wsx").is_file());
    assert_eq!(common::count_files(&work.path().join("app/app-2.0.1")), 5);
}
