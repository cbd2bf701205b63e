//! Integration tests for the nodekit binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A `nodekit` command isolated from the caller's config and environment.
fn nodekit(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("nodekit").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("NODEKIT_SETUP__HOOKS_DIR")
        .env_remove("NODEKIT_SETUP__ESLINT_EXTENSION")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_flag() {
    let dir = TempDir::new().unwrap();
    nodekit(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("nodekit"))
        .stdout(predicate::str::contains("node"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_flag() {
    let dir = TempDir::new().unwrap();
    nodekit(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_setup_help_lists_overrides() {
    let dir = TempDir::new().unwrap();
    nodekit(&dir)
        .args(["setup", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--dir"))
        .stdout(predicate::str::contains("--eslint-ext"))
        .stdout(predicate::str::contains("--skip-husky-init"));
}

#[test]
fn test_completions_bash() {
    let dir = TempDir::new().unwrap();
    nodekit(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nodekit"));
}

// ── config ───────────────────────────────────────────────────────────────────

#[test]
fn test_config_get_default() {
    let dir = TempDir::new().unwrap();
    nodekit(&dir)
        .args(["config", "get", "setup.hooks_dir"])
        .assert()
        .success()
        .stdout(".husky\n");
}

#[test]
fn test_config_get_from_env() {
    let dir = TempDir::new().unwrap();
    nodekit(&dir)
        .env("NODEKIT_SETUP__HOOKS_DIR", ".githooks")
        .args(["config", "get", "setup.hooks_dir"])
        .assert()
        .success()
        .stdout(".githooks\n");
}

#[test]
fn test_config_get_from_local_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".nodekit.toml"),
        "[setup]\neslint_extension = \"js\"\n",
    )
    .unwrap();

    nodekit(&dir)
        .args(["config", "get", "setup.eslint_extension"])
        .assert()
        .success()
        .stdout("js\n");
}

#[test]
fn test_config_file_flag_wins_over_local_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".nodekit.toml"),
        "[setup]\neslint_extension = \"js\"\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("custom.toml"),
        "[setup]\neslint_extension = \"cjs\"\n",
    )
    .unwrap();

    nodekit(&dir)
        .args(["--config", "custom.toml", "config", "get", "setup.eslint_extension"])
        .assert()
        .success()
        .stdout("cjs\n");
}

#[test]
fn test_config_path_prints_a_path() {
    let dir = TempDir::new().unwrap();
    nodekit(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml").or(predicate::str::contains(".nodekit.toml")));
}

#[test]
fn test_config_init_local() {
    let dir = TempDir::new().unwrap();
    nodekit(&dir)
        .args(["config", "init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));

    let written = fs::read_to_string(dir.path().join(".nodekit.toml")).unwrap();
    assert!(written.contains("[setup]"));
    assert!(written.contains("eslint_extension = \"mjs\""));

    nodekit(&dir)
        .args(["config", "init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

// ── node preset ──────────────────────────────────────────────────────────────

#[test]
fn test_node_preset_writes_tsconfig_before_requiring_package_json() {
    let dir = TempDir::new().unwrap();

    nodekit(&dir).arg("node").assert().code(3);

    let tsconfig = fs::read_to_string(dir.path().join("tsconfig.json")).unwrap();
    assert!(tsconfig.contains("\"module\": \"NodeNext\""));
    assert!(tsconfig.ends_with("}\n"));
}
