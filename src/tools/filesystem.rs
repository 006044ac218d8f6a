//! File read/write tools.
//!
//! Paths are resolved by joining onto the workspace root. An absolute path
//! argument replaces the root entirely, and relative paths are not contained
//! against traversal; the workspace is a trust boundary, not a sandbox.

use std::path::Path;

/// Write a file under the workspace root, creating parent directories and
/// overwriting any existing file.
pub async fn write_file(workspace: &Path, path: &str, content: &str) -> String {
    match write(workspace, path, content).await {
        Ok(()) => format!("Successfully wrote to {}", path),
        Err(e) => format!("Error writing file: {}", e),
    }
}

async fn write(workspace: &Path, path: &str, content: &str) -> anyhow::Result<()> {
    let full_path = workspace.join(path);
    if let Some(parent) = full_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&full_path, content).await?;
    Ok(())
}

/// Read a file under the workspace root.
pub async fn read_file(workspace: &Path, path: &str) -> String {
    match tokio::fs::read_to_string(workspace.join(path)).await {
        Ok(contents) => contents,
        Err(e) => format!("Error reading file: {}", e),
    }
}
