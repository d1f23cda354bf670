use assert_cmd::Command;
use tempfile::TempDir;

/// Script-mode CLI command with an isolated config directory.
///
/// The returned `TempDir` must outlive the command run.
pub fn script_cli() -> (Command, TempDir) {
    let home = TempDir::new().expect("create temp home");
    let mut cmd = Command::cargo_bin("budget_tracker_cli").expect("binary builds");
    cmd.env("BUDGET_TRACKER_CLI_SCRIPT", "1")
        .env("BUDGET_TRACKER_HOME", home.path())
        .env_remove("RUST_LOG");
    (cmd, home)
}
