use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("brief")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("inquire"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_config_help_shows_subcommands() {
    cargo_bin_cmd!("brief")
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("show"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("brief")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}

#[test]
fn test_generate_rejects_empty_prompt() {
    let home = tempfile::tempdir().unwrap();
    cargo_bin_cmd!("brief")
        .env("BRIEF_HOME", home.path())
        .args(["generate", "--prompt", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("prompt is empty"));
}

#[test]
fn test_config_path_honors_brief_home() {
    let home = tempfile::tempdir().unwrap();
    cargo_bin_cmd!("brief")
        .env("BRIEF_HOME", home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_then_show() {
    let home = tempfile::tempdir().unwrap();
    cargo_bin_cmd!("brief")
        .env("BRIEF_HOME", home.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config"));

    cargo_bin_cmd!("brief")
        .env("BRIEF_HOME", home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gemini-2.5-flash"));

    // Second init must refuse to overwrite.
    cargo_bin_cmd!("brief")
        .env("BRIEF_HOME", home.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
