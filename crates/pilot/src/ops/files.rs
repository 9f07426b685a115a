//! Internal working-directory navigation and listing.
//!
//! The session keeps its own notion of a current directory, independent of
//! the process CWD, so `cd` never touches the real process state.

use pilot_common::display::symbols;
use pilot_common::PilotError;
use std::path::{Component, Path, PathBuf};

/// Resolve a `cd` target against the current internal directory.
///
/// `~` is the home directory, `..` the parent of the current directory;
/// anything else is joined when relative. The result must name an
/// existing directory or the current directory stays as it was.
pub fn resolve_cd(cwd: &Path, input: &str) -> Result<PathBuf, PilotError> {
    let target = if input == "~" {
        dirs::home_dir().ok_or_else(|| PilotError::NotADirectory("~".to_string()))?
    } else if input == ".." {
        cwd.parent().unwrap_or(cwd).to_path_buf()
    } else if Path::new(input).is_absolute() {
        PathBuf::from(input)
    } else {
        cwd.join(input)
    };

    let normalized = normalize(&target);
    if normalized.is_dir() {
        Ok(normalized)
    } else {
        Err(PilotError::NotADirectory(normalized.display().to_string()))
    }
}

/// Resolve an `ls` target: optional path, `~`-expanded, joined against the
/// internal directory when relative.
pub fn resolve_ls(cwd: &Path, input: Option<&str>) -> PathBuf {
    let Some(input) = input else {
        return cwd.to_path_buf();
    };
    let expanded = expand_home(input);
    let target = if expanded.is_absolute() {
        expanded
    } else {
        cwd.join(expanded)
    };
    normalize(&target)
}

/// List a directory: directories first, then files, both sorted.
pub fn list_directory(path: &Path) -> Result<String, PilotError> {
    if !path.is_dir() {
        return Err(PilotError::NotADirectory(path.display().to_string()));
    }

    let mut dirs_found = Vec::new();
    let mut files_found = Vec::new();
    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if entry.path().is_dir() {
            dirs_found.push(name);
        } else {
            files_found.push(name);
        }
    }
    dirs_found.sort();
    files_found.sort();

    let mut lines = vec![format!("Contents of '{}':", path.display())];
    if dirs_found.is_empty() && files_found.is_empty() {
        lines.push("  (empty directory)".to_string());
    }
    for name in &dirs_found {
        lines.push(format!("  {}  {}", symbols::DIR_TAG, name));
    }
    for name in &files_found {
        lines.push(format!("         {}", name));
    }
    Ok(lines.join("\n"))
}

fn expand_home(input: &str) -> PathBuf {
    if input == "~" {
        return dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }
    if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(input)
}

/// Lexical normalization: fold `.` and `..` components without touching
/// the filesystem, like `os.path.normpath`.
fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !result.pop() {
                    result.push(Component::ParentDir);
                }
            }
            other => result.push(other),
        }
    }
    if result.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cd_dotdot_goes_to_parent() {
        let tmp = tempfile::tempdir().unwrap();
        let sub = tmp.path().join("a").join("b");
        std::fs::create_dir_all(&sub).unwrap();
        let parent = resolve_cd(&sub, "..").unwrap();
        assert_eq!(parent, tmp.path().join("a"));
    }

    #[test]
    fn cd_tilde_goes_home() {
        if let Some(home) = dirs::home_dir() {
            let tmp = tempfile::tempdir().unwrap();
            assert_eq!(resolve_cd(tmp.path(), "~").unwrap(), home);
        }
    }

    #[test]
    fn cd_nonexistent_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = resolve_cd(tmp.path(), "no-such-dir");
        assert!(err.is_err());
    }

    #[test]
    fn cd_relative_joins_current_directory() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("sub")).unwrap();
        assert_eq!(
            resolve_cd(tmp.path(), "sub").unwrap(),
            normalize(&tmp.path().join("sub"))
        );
    }

    #[test]
    fn listing_orders_directories_before_files() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("zdir")).unwrap();
        std::fs::write(tmp.path().join("afile.txt"), b"x").unwrap();
        let listing = list_directory(tmp.path()).unwrap();
        let dir_pos = listing.find("zdir").unwrap();
        let file_pos = listing.find("afile.txt").unwrap();
        assert!(dir_pos < file_pos);
        assert!(listing.contains(symbols::DIR_TAG));
    }

    #[test]
    fn listing_empty_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let listing = list_directory(tmp.path()).unwrap();
        assert!(listing.contains("(empty directory)"));
    }

    #[test]
    fn normalize_folds_components() {
        assert_eq!(
            normalize(Path::new("/a/b/../c/./d")),
            PathBuf::from("/a/c/d")
        );
    }
}
