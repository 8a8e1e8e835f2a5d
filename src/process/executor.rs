use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::path::Path;
use std::process::{Command, Stdio};

use super::{signal, ProcessError, ProcessStatus};
use crate::core::state::ShellState;

#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Spawns `path` with the full argument vector (the typed command name
    /// stays argument zero), the environment snapshot copied in at spawn
    /// time, and the shell's working directory. Blocks until the child
    /// terminates; the shell does no other work while a foreground child
    /// runs.
    pub fn spawn(
        &self,
        path: &Path,
        argv: &[String],
        state: &ShellState,
    ) -> Result<ProcessStatus, ProcessError> {
        let mut command = Command::new(path);
        command
            .args(&argv[1..])
            .arg0(&argv[0])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .env_clear()
            .envs(state.env().iter())
            .current_dir(state.cwd());

        let mut child = command.spawn().map_err(|source| ProcessError::Launch {
            program: argv[0].clone(),
            source,
        })?;

        signal::install_foreground_handler()?;

        let status = child.wait().map_err(ProcessError::Wait)?;
        Ok(match status.code() {
            Some(code) => ProcessStatus::Exited(code),
            None => ProcessStatus::Signaled(status.signal().unwrap_or_default()),
        })
    }
}
