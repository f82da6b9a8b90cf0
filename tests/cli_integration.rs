use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn repo_tree() -> Command {
    let mut cmd = Command::cargo_bin("repo-tree").unwrap();
    cmd.env_remove("REPO_TREE_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn shows_help() {
    repo_tree()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tracked file tree"))
        .stdout(predicate::str::contains("--all"))
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn short_help_exits_zero() {
    repo_tree()
        .arg("-h")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn shows_version() {
    repo_tree()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unrecognized_flag_exits_one_with_usage() {
    repo_tree()
        .arg("--bogus")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--bogus"))
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn unexpected_positional_exits_one() {
    repo_tree().arg("stray").assert().code(1);
}

#[test]
fn outside_repository_exits_one() {
    let dir = TempDir::new().unwrap();
    let parent = dir.path().parent().unwrap().to_path_buf();

    repo_tree()
        .env("GIT_CEILING_DIRECTORIES", parent)
        .arg("--no-clipboard")
        .arg("-C")
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Not inside a git working tree"));
}

#[test]
fn missing_directory_exits_one() {
    let dir = TempDir::new().unwrap();

    repo_tree()
        .args(["--no-clipboard", "-C"])
        .arg(dir.path().join("nope"))
        .assert()
        .code(1);
}

#[test]
fn invalid_config_path_fails() {
    repo_tree()
        .args(["--config", "/nonexistent/path.toml", "--no-clipboard"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config"));
}

#[test]
fn error_causes_are_printed_once() {
    let output = repo_tree()
        .args(["--config", "/nonexistent/path.toml", "--no-clipboard"])
        .output()
        .unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr.matches("Failed to read config file").count(), 1, "{stderr}");
    assert_eq!(stderr.matches("os error").count(), 1, "{stderr}");
}

#[test]
fn invalid_clipboard_backend_fails() {
    repo_tree()
        .args(["--clipboard", "carrier-pigeon"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown clipboard backend"));
}

#[test]
fn generates_completions() {
    repo_tree()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("repo-tree"));
}
