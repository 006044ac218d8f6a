//! Shell command execution tool.

use std::path::Path;
use std::process::Stdio;

use serde_json::json;
use tokio::process::Command;

/// Run a shell command in the workspace root.
///
/// Captures stdout, stderr, and the exit code into a JSON text payload. No
/// timeout is applied; a slow command blocks its request until it returns.
/// Spawn failures are encoded as `{"error": "..."}`.
pub async fn run_command(workspace: &Path, command: &str) -> String {
    tracing::info!("Executing command: {}", command);

    match exec(workspace, command).await {
        Ok(payload) => payload,
        Err(e) => json!({ "error": e.to_string() }).to_string(),
    }
}

async fn exec(workspace: &Path, command: &str) -> anyhow::Result<String> {
    // Determine shell based on OS
    let (shell, shell_arg) = if cfg!(target_os = "windows") {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    };

    let output = Command::new(shell)
        .arg(shell_arg)
        .arg(command)
        .current_dir(workspace)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await?;

    let payload = json!({
        "stdout": String::from_utf8_lossy(&output.stdout),
        "stderr": String::from_utf8_lossy(&output.stderr),
        "exit_code": output.status.code().unwrap_or(-1),
    });

    Ok(payload.to_string())
}
