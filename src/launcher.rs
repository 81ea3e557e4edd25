use crate::error::LaunchError;
use crate::resolver::ExecutablePath;
use log::{debug, error, info};
use std::process::{Command, Stdio};
use std::thread;

/// Starts Ente Auth without waiting for it. Each call is one spawn attempt.
pub fn launch(path: &ExecutablePath) -> Result<(), LaunchError> {
    let mut child = Command::new(path.as_path())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| LaunchError {
            path: path.as_path().to_path_buf(),
            source,
        })?;

    // Reap the child in the background so it never lingers as a zombie.
    let pid = child.id();
    thread::spawn(move || match child.wait() {
        Ok(status) => debug!("Ente Auth (pid {}) exited: {}", pid, status),
        Err(e) => debug!("Failed to wait for Ente Auth (pid {}): {}", pid, e),
    });

    Ok(())
}

/// Like [`launch`], but the outcome is logged here so callers may ignore it.
pub fn launch_logged(path: &ExecutablePath) -> Result<(), LaunchError> {
    match launch(path) {
        Ok(()) => {
            info!("Ente Auth launched.");
            Ok(())
        }
        Err(e) => {
            error!("{}", e);
            Err(e)
        }
    }
}
