//! Pre-flight checks run before anything touches the filesystem
//!
//! The program name ends up as the executable of a child process, so the
//! forbidden character set here is the only guard against a preference value
//! smuggling shell syntax into the launch.

use std::path::Path;

use crate::consts::FORBIDDEN_PROGRAM_CHARS;
use crate::error::{AppError, ConfigError};

/// Reject program names that are empty, carry shell metacharacters, or try to pass arguments
pub(crate) fn validate_program_name(name: &str) -> Result<(), ConfigError> {
    if name.trim().is_empty() {
        return Err(ConfigError::EmptyProgram);
    }
    if name.contains(FORBIDDEN_PROGRAM_CHARS) {
        return Err(ConfigError::ForbiddenCharacters);
    }
    if name.trim().contains(char::is_whitespace) {
        return Err(ConfigError::MultipleWords);
    }
    Ok(())
}

/// Check that `path`, or failing that its parent, is writable.
///
/// Advisory only: nothing is created here.
pub(crate) fn validate_base_path(path: &Path) -> Result<(), AppError> {
    if is_writable(path) {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "base path not writable, checking parent");
    match path.parent() {
        Some(parent) if is_writable(parent) => Ok(()),
        _ => Err(AppError::PathNotWritable {
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(unix)]
fn is_writable(path: &Path) -> bool {
    use rustix::fs::{Access, access};

    // an empty parent (relative single-component path) means the working directory
    let path = if path.as_os_str().is_empty() {
        Path::new(".")
    } else {
        path
    };
    access(path, Access::WRITE_OK).is_ok()
}

#[cfg(not(unix))]
fn is_writable(path: &Path) -> bool {
    let path = if path.as_os_str().is_empty() {
        Path::new(".")
    } else {
        path
    };
    std::fs::metadata(path)
        .map(|m| !m.permissions().readonly())
        .unwrap_or(false)
}
