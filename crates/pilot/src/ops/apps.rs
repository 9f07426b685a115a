//! Launching local applications and opening files with their default app.

use pilot_common::catalog::LocalApp;
use pilot_common::PilotError;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::debug;

/// Launch a configured local application for the current OS.
pub fn launch(app: &LocalApp) -> Result<String, PilotError> {
    match std::env::consts::OS {
        "windows" => {
            let cmd = app
                .windows
                .ok_or_else(|| PilotError::Launch(format!("No command for '{}' on windows", app.key)))?;
            spawn(cmd)?;
            Ok(format!("Attempting launch: {} ('{}')", app.key, cmd))
        }
        "macos" => {
            let name = app
                .macos
                .ok_or_else(|| PilotError::Launch(format!("No command for '{}' on macos", app.key)))?;
            Command::new("open")
                .args(["-a", name])
                .spawn()
                .map_err(|e| PilotError::Launch(e.to_string()))?;
            Ok(format!("Attempting launch: {} ('open -a {}')", app.key, name))
        }
        "linux" => {
            for candidate in app.linux {
                if command_exists(candidate) {
                    spawn(candidate)?;
                    return Ok(format!("Attempting launch: {} ('{}')", app.key, candidate));
                }
            }
            Err(PilotError::Launch(format!(
                "No Linux command found for '{}'",
                app.key
            )))
        }
        other => Err(PilotError::Launch(format!("Unsupported OS: {}", other))),
    }
}

/// Open a file with the desktop's default application.
pub fn open_file(path: &PathBuf) -> Result<String, PilotError> {
    let expanded = expand(path);
    if !expanded.exists() {
        return Err(PilotError::FileNotFound(expanded.display().to_string()));
    }
    debug!(path = %expanded.display(), "opening file");
    open::that(&expanded).map_err(|e| PilotError::Launch(e.to_string()))?;
    Ok(format!("Attempting to open: {}", expanded.display()))
}

fn expand(path: &PathBuf) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.clone()
}

fn spawn(cmd: &str) -> Result<(), PilotError> {
    Command::new(cmd)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| PilotError::Launch(format!("{}: {}", cmd, e)))?;
    Ok(())
}

fn command_exists(cmd: &str) -> bool {
    Command::new("which")
        .arg(cmd)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_reported() {
        let err = open_file(&PathBuf::from("/definitely/not/here.txt"));
        assert!(matches!(err, Err(PilotError::FileNotFound(_))));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn which_detects_standard_tools() {
        assert!(command_exists("sh"));
        assert!(!command_exists("no-such-binary-anywhere"));
    }
}
