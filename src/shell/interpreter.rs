use std::path::Path;

use crate::core::commands::{classify, BuiltinCommand, BuiltinOutcome, Invocation};
use crate::core::state::ShellState;
use crate::error::ShellError;
use crate::parse::{self, expander};
use crate::process::{ProcessExecutor, ProcessStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cycle {
    Empty,
    Status(ProcessStatus),
    Exit(i32),
}

/// Runs one read-expand-classify-execute cycle per input line and owns the
/// process-wide state across cycles.
pub struct Interpreter {
    state: ShellState,
    executor: ProcessExecutor,
}

impl Interpreter {
    pub fn new() -> Result<Self, ShellError> {
        Ok(Self {
            state: ShellState::new()?,
            executor: ProcessExecutor::new(),
        })
    }

    pub fn with_state(state: ShellState) -> Self {
        Self {
            state,
            executor: ProcessExecutor::new(),
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn cwd(&self) -> &Path {
        self.state.cwd()
    }

    pub fn interpret(&mut self, line: &str) -> Result<Cycle, ShellError> {
        let tokens = parse::tokenize(line);
        let argv: Vec<String> = tokens
            .iter()
            .map(|token| expander::expand(token, self.state.env()))
            .collect();

        match classify(argv, &self.state)? {
            Invocation::Empty => Ok(Cycle::Empty),
            Invocation::Builtin(builtin, argv) => {
                match builtin.execute(&argv[1..], &mut self.state)? {
                    BuiltinOutcome::Continue => Ok(Cycle::Status(ProcessStatus::Exited(0))),
                    BuiltinOutcome::Exit(code) => Ok(Cycle::Exit(code)),
                }
            }
            Invocation::External(path, argv) => {
                let status = self.executor.spawn(&path, &argv, &self.state)?;
                Ok(Cycle::Status(status))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::CommandError;
    use crate::core::env::Environment;
    use std::env;
    use std::path::PathBuf;

    fn test_interpreter() -> Interpreter {
        let mut env = Environment::new();
        env.set("PATH", "/bin:/usr/bin").expect("failed seeding PATH");
        let home = env::temp_dir();
        env.set("HOME", &home.to_string_lossy())
            .expect("failed seeding HOME");
        Interpreter::with_state(ShellState::with_env(env::temp_dir(), env))
    }

    #[test]
    fn test_blank_line_is_a_no_op() -> Result<(), ShellError> {
        let mut interpreter = test_interpreter();
        assert_eq!(interpreter.interpret("")?, Cycle::Empty);
        assert_eq!(interpreter.interpret("   \t ")?, Cycle::Empty);
        Ok(())
    }

    #[test]
    fn test_external_command_reports_exit_status() -> Result<(), ShellError> {
        let mut interpreter = test_interpreter();
        assert_eq!(
            interpreter.interpret("echo hi")?,
            Cycle::Status(ProcessStatus::Exited(0))
        );
        Ok(())
    }

    #[test]
    fn test_exit_with_code_terminates_loop() -> Result<(), ShellError> {
        let mut interpreter = test_interpreter();
        assert_eq!(interpreter.interpret("exit 3")?, Cycle::Exit(3));
        Ok(())
    }

    #[test]
    fn test_exit_without_code() -> Result<(), ShellError> {
        let mut interpreter = test_interpreter();
        assert_eq!(interpreter.interpret("exit")?, Cycle::Exit(0));
        Ok(())
    }

    #[test]
    fn test_exit_non_numeric_keeps_looping() {
        let mut interpreter = test_interpreter();
        assert!(matches!(
            interpreter.interpret("exit soon"),
            Err(ShellError::Command(CommandError::InvalidArguments(_)))
        ));
    }

    #[test]
    fn test_unknown_command() {
        let mut interpreter = test_interpreter();
        assert!(matches!(
            interpreter.interpret("rill_no_such_command_xyz"),
            Err(ShellError::CommandNotFound(_))
        ));
    }

    #[test]
    fn test_cd_updates_state() -> Result<(), ShellError> {
        let mut interpreter = test_interpreter();
        let target = env::temp_dir()
            .canonicalize()
            .map_err(ShellError::Io)?;
        interpreter.interpret(&format!("cd {}", target.display()))?;
        assert_eq!(interpreter.cwd(), target);
        Ok(())
    }

    #[test]
    fn test_export_then_expand_round_trip() -> Result<(), ShellError> {
        let mut interpreter = test_interpreter();
        interpreter.interpret("export RILL_CYCLE_X=1")?;
        assert_eq!(
            expander::expand("$RILL_CYCLE_X", interpreter.state().env()),
            "1"
        );
        interpreter.interpret("unset RILL_CYCLE_X")?;
        assert_eq!(
            expander::expand("$RILL_CYCLE_X", interpreter.state().env()),
            ""
        );
        Ok(())
    }

    #[test]
    fn test_command_name_goes_through_expansion() -> Result<(), ShellError> {
        let mut interpreter = test_interpreter();
        interpreter.interpret("export RILL_CYCLE_CMD=echo")?;
        assert_eq!(
            interpreter.interpret("$RILL_CYCLE_CMD hi")?,
            Cycle::Status(ProcessStatus::Exited(0))
        );
        Ok(())
    }

    #[test]
    fn test_expanded_empty_command_is_not_found() {
        // "$UNSET" expands to an empty token, which is kept, not dropped.
        let mut interpreter = test_interpreter();
        assert!(matches!(
            interpreter.interpret("$RILL_CYCLE_UNSET"),
            Err(ShellError::CommandNotFound(_))
        ));
    }

    #[test]
    fn test_failed_cycle_leaves_state_usable() -> Result<(), ShellError> {
        let mut interpreter = test_interpreter();
        let before = PathBuf::from(interpreter.cwd());
        assert!(interpreter.interpret("cd /rill/nowhere").is_err());
        assert_eq!(interpreter.cwd(), before);
        assert_eq!(
            interpreter.interpret("echo still-alive")?,
            Cycle::Status(ProcessStatus::Exited(0))
        );
        Ok(())
    }
}
