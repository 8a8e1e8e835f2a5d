use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use crate::core::state::ShellState;
use crate::error::ShellError;

/// Locates the executable for a command name. A name containing `/` is
/// checked directly, relative to the shell's working directory; anything else
/// is searched for in the `PATH` directories in order, first match wins.
pub fn resolve_command(name: &str, state: &ShellState) -> Result<PathBuf, ShellError> {
    if name.contains('/') {
        let candidate = state.cwd().join(name);
        if is_executable(&candidate) {
            return Ok(candidate);
        }
        return Err(ShellError::CommandNotFound(name.to_string()));
    }

    for dir in state.env().search_path() {
        let dir = if dir.is_relative() {
            state.cwd().join(dir)
        } else {
            dir
        };
        let candidate = dir.join(name);
        if is_executable(&candidate) {
            return Ok(candidate);
        }
    }

    Err(ShellError::CommandNotFound(name.to_string()))
}

fn is_executable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}
