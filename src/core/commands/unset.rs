use super::{BuiltinCommand, BuiltinOutcome, CommandError};
use crate::core::state::ShellState;

#[derive(Clone, Debug, Default)]
pub struct UnsetCommand;

impl UnsetCommand {
    pub fn new() -> Self {
        Self
    }
}

impl BuiltinCommand for UnsetCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
    ) -> Result<BuiltinOutcome, CommandError> {
        if args.is_empty() {
            return Err(CommandError::InvalidArguments(
                "unset: expected a variable name".to_string(),
            ));
        }

        // Removing an absent name is not an error.
        for name in args {
            state.env_mut().unset(name);
        }
        Ok(BuiltinOutcome::Continue)
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
    fn test_unset_removes_variable() -> Result<(), CommandError> {
        let mut state = test_state();
        state.env_mut().set("TEST_VAR", "value")?;
        UnsetCommand::new().execute(&["TEST_VAR".to_string()], &mut state)?;
        assert_eq!(state.env().get("TEST_VAR"), None);
        Ok(())
    }

    #[test]
    fn test_unset_absent_name_is_ok() -> Result<(), CommandError> {
        let mut state = test_state();
        UnsetCommand::new().execute(&["NEVER_SET".to_string()], &mut state)?;
        Ok(())
    }

    #[test]
    fn test_unset_multiple_names() -> Result<(), CommandError> {
        let mut state = test_state();
        state.env_mut().set("A", "1")?;
        state.env_mut().set("B", "2")?;
        UnsetCommand::new().execute(&["A".to_string(), "B".to_string()], &mut state)?;
        assert_eq!(state.env().get("A"), None);
        assert_eq!(state.env().get("B"), None);
        Ok(())
    }

    #[test]
    fn test_unset_no_args() {
        let mut state = test_state();
        assert!(matches!(
            UnsetCommand::new().execute(&[], &mut state),
            Err(CommandError::InvalidArguments(_))
        ));
    }
}
