use std::process::Command;

use anyhow::{Context, Result, bail};

/// Verify that Docker Compose is usable before the sequence starts.
///
/// `compose ls` has to talk to the daemon, so this catches both a missing
/// compose plugin and an unreachable daemon; `compose version` would answer
/// from the client binary alone.
pub fn ensure_available() -> Result<()> {
    let status = Command::new("docker")
        .args(["compose", "ls", "--quiet"])
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .context("failed to invoke `docker` — is it installed and on PATH?")?;

    if !status.success() {
        bail!("docker daemon is not reachable (exit {})", status);
    }
    Ok(())
}
