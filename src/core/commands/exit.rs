use super::{BuiltinCommand, BuiltinOutcome, CommandError};
use crate::core::state::ShellState;

#[derive(Clone, Debug, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl BuiltinCommand for ExitCommand {
    fn execute(
        &self,
        args: &[String],
        _state: &mut ShellState,
    ) -> Result<BuiltinOutcome, CommandError> {
        if args.len() > 1 {
            return Err(CommandError::InvalidArguments(
                "exit: too many arguments".to_string(),
            ));
        }

        match args.first() {
            None => Ok(BuiltinOutcome::Exit(0)),
            Some(arg) => match arg.parse::<i32>() {
                Ok(code) => Ok(BuiltinOutcome::Exit(code)),
                Err(_) => Err(CommandError::InvalidArguments(
                    "exit: numeric argument required".to_string(),
                )),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::Environment;
    use std::env;

    fn test_state() -> ShellState {
        ShellState::with_env(env::temp_dir(), Environment::new())
    }

    #[test]
    fn test_exit_defaults_to_zero() -> Result<(), CommandError> {
        let mut state = test_state();
        let outcome = ExitCommand::new().execute(&[], &mut state)?;
        assert_eq!(outcome, BuiltinOutcome::Exit(0));
        Ok(())
    }

    #[test]
    fn test_exit_with_code() -> Result<(), CommandError> {
        let mut state = test_state();
        let outcome = ExitCommand::new().execute(&["3".to_string()], &mut state)?;
        assert_eq!(outcome, BuiltinOutcome::Exit(3));
        Ok(())
    }

    #[test]
    fn test_exit_non_numeric_does_not_exit() {
        let mut state = test_state();
        assert!(matches!(
            ExitCommand::new().execute(&["soon".to_string()], &mut state),
            Err(CommandError::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_exit_too_many_arguments() {
        let mut state = test_state();
        assert!(matches!(
            ExitCommand::new().execute(&["1".to_string(), "2".to_string()], &mut state),
            Err(CommandError::InvalidArguments(_))
        ));
    }
}
