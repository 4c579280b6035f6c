use std::path::Path;
use std::process::{Command, Output};

use crate::error::Error;

/// Clone `url` into `target_dir`.
///
/// This uses the system git command, which automatically handles:
/// - SSH keys from ~/.ssh/
/// - Git credential helpers
/// - Personal access tokens
/// - Any authentication configured in ~/.gitconfig
///
/// The parent of `target_dir` must exist. Git itself refuses to clone into a
/// non-empty directory.
pub fn clone(url: &str, target_dir: &Path) -> Result<(), Error> {
    let output = Command::new("git")
        .arg("clone")
        .arg(url)
        .arg(target_dir)
        .output();

    let output = check("clone", target_dir, output)?;
    log::debug!("{}", String::from_utf8_lossy(&output.stderr).trim());
    Ok(())
}

/// Initialize an empty repository in `dir`, creating it if needed.
pub fn init(dir: &Path) -> Result<(), Error> {
    let output = Command::new("git").arg("init").arg(dir).output();
    check("init", dir, output)?;
    Ok(())
}

/// Pull upstream changes into the repository at `repo_dir`.
///
/// Runs `git -C <repo_dir> pull` so the process working directory is never
/// changed.
pub fn pull(repo_dir: &Path) -> Result<(), Error> {
    let output = Command::new("git")
        .arg("-C")
        .arg(repo_dir)
        .arg("pull")
        .output();

    let output = check("pull", repo_dir, output)?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.trim().is_empty() {
        log::info!("{}", stdout.trim());
    }
    Ok(())
}

/// Turn a spawn failure or a non-zero exit into [`Error::GitCommand`].
fn check(command: &str, path: &Path, output: std::io::Result<Output>) -> Result<Output, Error> {
    let output = output.map_err(|e| Error::GitCommand {
        command: command.to_string(),
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = if stderr.trim().is_empty() {
            output.status.to_string()
        } else {
            stderr.trim().to_string()
        };

        return Err(Error::GitCommand {
            command: command.to_string(),
            path: path.to_path_buf(),
            message,
        });
    }

    Ok(output)
}
