//! CLI behavior tests for the `props` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A project directory plus an isolated home directory, so tests never
/// read the real user's property files.
fn setup() -> (TempDir, String, String) {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    let home = temp.path().join("home");
    fs::create_dir_all(&project).unwrap();
    fs::create_dir_all(home.join(".gradle")).unwrap();
    let project_s = project.to_string_lossy().into_owned();
    let home_s = home.to_string_lossy().into_owned();
    (temp, project_s, home_s)
}

fn props() -> Command {
    Command::cargo_bin("props").unwrap()
}

#[test]
fn prints_resolved_properties_sorted() {
    let (temp, project, home) = setup();
    fs::write(
        temp.path().join("project/gradle.properties"),
        "b=2\na=1\n",
    )
    .unwrap();

    props()
        .args([&project, "--home-dir", &home])
        .assert()
        .success()
        .stdout(predicate::str::contains("a=1\nb=2\n"));
}

#[test]
fn project_prop_override_wins_over_file() {
    let (temp, project, home) = setup();
    fs::write(temp.path().join("project/gradle.properties"), "c=Y\n").unwrap();

    props()
        .args([&project, "--home-dir", &home, "-P", "c=Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("c=Z"));
}

#[test]
fn define_seeds_a_project_system_property() {
    let (_temp, project, home) = setup();

    props()
        .args([
            &project,
            "--home-dir",
            &home,
            "-D",
            "org.gradle.project.q=V",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("q=V"));
}

#[test]
fn environment_file_overrides_base_file() {
    let (temp, project, home) = setup();
    fs::write(
        temp.path().join("project/gradle.properties"),
        "mode=default\n",
    )
    .unwrap();
    fs::write(
        temp.path().join("project/gradle-staging.properties"),
        "mode=staged\n",
    )
    .unwrap();

    props()
        .args([&project, "--home-dir", &home, "--environment", "staging"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=staged"));
}

#[test]
fn prefixed_environment_variable_becomes_a_property() {
    let (_temp, project, home) = setup();

    props()
        .args([&project, "--home-dir", &home])
        .env("ORG_GRADLE_PROJECT_b", "X")
        .assert()
        .success()
        .stdout(predicate::str::contains("b=X"));
}

#[test]
fn tokens_exclude_system_prop_keys() {
    let (temp, project, home) = setup();
    fs::write(
        temp.path().join("project/gradle.properties"),
        "name=demo\nsystemProp.d=5\n",
    )
    .unwrap();

    props()
        .args([&project, "--home-dir", &home, "--tokens"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name=demo"))
        .stdout(predicate::str::contains("systemProp.d").not());
}

#[test]
fn json_output_is_a_parseable_object() {
    let (temp, project, home) = setup();
    fs::write(temp.path().join("project/gradle.properties"), "a=1\n").unwrap();

    let output = props()
        .args([&project, "--home-dir", &home, "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["a"], "1");
}

#[test]
fn require_fails_fast_naming_the_missing_key() {
    let (_temp, project, home) = setup();

    props()
        .args([&project, "--home-dir", &home, "--require", "missingKey"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missingKey"));
}

#[test]
fn malformed_file_aborts_with_file_and_line() {
    let (temp, project, home) = setup();
    fs::write(
        temp.path().join("project/gradle.properties"),
        "ok=1\nbroken line\n",
    )
    .unwrap();

    props()
        .args([&project, "--home-dir", &home])
        .assert()
        .failure()
        .stderr(predicate::str::contains("gradle.properties"))
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn invalid_pair_argument_is_rejected() {
    let (_temp, project, home) = setup();

    props()
        .args([&project, "--home-dir", &home, "-P", "no-separator"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("KEY=VALUE"));
}
