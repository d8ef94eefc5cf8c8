//! Integration tests for `orbit check`

mod common;

use common::TestProject;
use predicates::prelude::*;
use std::process::Command;

fn run_check(project: &TestProject) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_orbit"))
        .arg("check")
        .arg(project.path())
        .output()
        .expect("Failed to execute orbit check")
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_check_valid_project() {
    let project = TestProject::new();
    project.create_unit("core");
    project.create_unit("alpha");
    project.write_manifest("core", &["alpha"]);

    let output = run_check(&project);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(predicate::str::contains("manifest ok: test-project").eval(&stdout));
    assert!(predicate::str::contains("2 unit(s) ready to build").eval(&stdout));
}

#[test]
fn test_check_missing_unit_directory() {
    let project = TestProject::new();
    project.create_unit("core");
    project.write_manifest("core", &["ghost"]);

    let output = run_check(&project);
    assert!(!output.status.success());
    assert!(stdout_of(&output).contains("✗ ghost: directory missing"));
}

#[test]
fn test_check_missing_descriptor() {
    let project = TestProject::new();
    project.create_unit("core");
    project.create_bare_unit("alpha");
    project.write_manifest("core", &["alpha"]);

    let output = run_check(&project);
    assert!(!output.status.success());
    assert!(stdout_of(&output).contains("✗ alpha: no package.json found"));
}

#[test]
fn test_check_unknown_build_command() {
    let project = TestProject::new();
    project.create_unit("core");
    project.create_file(
        "orbit.toml",
        r#"
[project]
name = "test-project"
core = "core"

[build]
command = "orbit-no-such-tool"
"#,
    );

    let output = run_check(&project);
    assert!(!output.status.success());
    assert!(stdout_of(&output).contains("not found in PATH"));
}

#[test]
fn test_check_without_manifest() {
    let project = TestProject::new();
    let output = run_check(&project);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Manifest not found"));
}
