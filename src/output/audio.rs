use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use tracing::info;

/// Extract `[start, start + duration]` from `input` into `output` using the
/// external sox tool. Skips the invocation when the output already exists.
pub fn extract_segment(input: &Path, output: &Path, start: f64, duration: f64) -> Result<()> {
    if output.exists() {
        info!(path = %output.display(), "waveform exists, skipping extraction");
        return Ok(());
    }

    let status = Command::new("sox")
        .arg(input)
        .arg(output)
        .arg("trim")
        .arg(start.to_string())
        .arg(duration.to_string())
        .status()
        .context("failed to launch sox")?;
    if !status.success() {
        bail!("sox exited with {} while writing {:?}", status, output);
    }
    info!(path = %output.display(), "wrote audio segment");
    Ok(())
}
