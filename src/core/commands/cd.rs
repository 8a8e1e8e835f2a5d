use std::path::PathBuf;

use super::{BuiltinCommand, BuiltinOutcome, CommandError};
use crate::core::state::ShellState;

#[derive(Clone, Debug, Default)]
pub struct CdCommand;

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl BuiltinCommand for CdCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
    ) -> Result<BuiltinOutcome, CommandError> {
        if args.len() > 1 {
            return Err(CommandError::InvalidArguments(
                "cd: too many arguments".to_string(),
            ));
        }

        let target = match args.first().map(String::as_str) {
            None => state.env().home_dir().ok_or(CommandError::HomeDirNotFound)?,
            Some("-") => state.previous_dir().unwrap_or(state.cwd()).to_path_buf(),
            Some(path) => PathBuf::from(path),
        };

        state.change_dir(&target)?;
        Ok(BuiltinOutcome::Continue)
    }
}
