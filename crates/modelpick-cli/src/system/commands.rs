//! Command version extraction.

use tokio::process::Command;

/// Run `cmd version_flag` and return the first line it prints.
///
/// Returns `None` when the command cannot be spawned or exits unsuccessfully.
pub async fn get_command_version(cmd: &str, version_flag: &str) -> Option<String> {
    let output = Command::new(cmd).arg(version_flag).output().await.ok()?;

    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    // Some tools print their version to stderr
    let text = if stdout.trim().is_empty() {
        stderr
    } else {
        stdout
    };

    Some(
        text.lines()
            .next()
            .map(|line| line.trim().to_string())
            .unwrap_or_default(),
    )
}
