use std::env;
use std::path::{Path, PathBuf};

use crate::core::commands::CommandError;
use crate::core::env::Environment;

/// Process-wide shell state: the working directory and the environment
/// snapshot, passed by reference into every component that needs them.
#[derive(Clone, Debug)]
pub struct ShellState {
    cwd: PathBuf,
    previous: Option<PathBuf>,
    env: Environment,
}

impl ShellState {
    pub fn new() -> Result<Self, std::io::Error> {
        Ok(Self {
            cwd: env::current_dir()?,
            previous: None,
            env: Environment::from_process(),
        })
    }

    pub fn with_env(cwd: PathBuf, env: Environment) -> Self {
        Self {
            cwd,
            previous: None,
            env,
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn previous_dir(&self) -> Option<&Path> {
        self.previous.as_deref()
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    /// Moves the working directory to `target`, resolving relative paths
    /// against the current directory. On failure the state is unchanged.
    pub fn change_dir(&mut self, target: &Path) -> Result<(), CommandError> {
        let joined = if target.is_relative() {
            self.cwd.join(target)
        } else {
            target.to_path_buf()
        };

        let resolved = joined
            .canonicalize()
            .map_err(|source| CommandError::DirectoryChange {
                path: target.display().to_string(),
                source,
            })?;

        if !resolved.is_dir() {
            return Err(CommandError::NotADirectory(target.display().to_string()));
        }

        self.previous = Some(std::mem::replace(&mut self.cwd, resolved));
        Ok(())
    }
}
