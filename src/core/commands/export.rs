use super::{BuiltinCommand, BuiltinOutcome, CommandError};
use crate::core::env;
use crate::core::state::ShellState;

#[derive(Clone, Debug, Default)]
pub struct ExportCommand;

impl ExportCommand {
    pub fn new() -> Self {
        Self
    }
}

impl BuiltinCommand for ExportCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
    ) -> Result<BuiltinOutcome, CommandError> {
        if args.is_empty() {
            return Err(CommandError::InvalidArguments(
                "export: expected NAME=VALUE".to_string(),
            ));
        }

        // Validate every assignment before applying any, so a malformed
        // argument leaves the snapshot untouched.
        let pairs = args
            .iter()
            .map(|arg| parse_assignment(arg))
            .collect::<Result<Vec<_>, _>>()?;

        for (name, value) in pairs {
            state.env_mut().set(name, value)?;
        }
        Ok(BuiltinOutcome::Continue)
    }
}

fn parse_assignment(arg: &str) -> Result<(&str, &str), CommandError> {
    let Some((name, value)) = arg.split_once('=') else {
        return Err(CommandError::InvalidArguments(format!(
            "export: expected NAME=VALUE, got '{arg}'"
        )));
    };
    if !env::is_valid_name(name) {
        return Err(CommandError::InvalidArguments(format!(
            "export: invalid variable name: '{name}'"
        )));
    }
    Ok((name, strip_quotes(value)))
}

fn strip_quotes(value: &str) -> &str {
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if quoted {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
