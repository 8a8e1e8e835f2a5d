use std::io::BufRead;
use std::path::PathBuf;

use rustyline::{config::Configurer, error::ReadlineError, DefaultEditor};

mod interpreter;

pub use interpreter::{Cycle, Interpreter};

use crate::error::ShellError;
use crate::flags::Flags;
use crate::highlight::OutputStyle;
use crate::process::ProcessStatus;

pub struct Shell {
    editor: DefaultEditor,
    interpreter: Interpreter,
    style: OutputStyle,
    flags: Flags,
    history_file: Option<PathBuf>,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let mut editor = DefaultEditor::new()?;
        editor.set_auto_add_history(true);

        let history_file = dirs::home_dir().map(|home| home.join(".rill_history"));
        if let Some(path) = &history_file {
            // Missing on first run.
            let _ = editor.load_history(path);
        }

        ctrlc::set_handler(|| {
            println!("\nUse 'exit' to leave the shell");
        })?;

        Ok(Shell {
            editor,
            interpreter: Interpreter::new()?,
            style: OutputStyle::new(),
            flags,
            history_file,
        })
    }

    pub fn run(&mut self) -> Result<i32, ShellError> {
        loop {
            let prompt = format!("{} > ", self.interpreter.cwd().display());
            match self.editor.readline(&prompt) {
                Ok(line) => match self.interpreter.interpret(&line) {
                    Ok(Cycle::Empty) => {}
                    Ok(Cycle::Status(status)) => self.report(status),
                    Ok(Cycle::Exit(code)) => {
                        self.save_history();
                        return Ok(code);
                    }
                    Err(e) => eprintln!("{}", self.style.error(&e.to_string())),
                },
                Err(ReadlineError::Interrupted) => {
                    if !self.flags.is_set("quiet") {
                        println!("CTRL-C");
                    }
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    // End of input is a deliberate termination, same as `exit 0`.
                    self.save_history();
                    return Ok(0);
                }
                Err(e) => {
                    eprintln!("{}", self.style.error(&format!("Error: {}", e)));
                    continue;
                }
            }
        }
    }

    fn report(&self, status: ProcessStatus) {
        if status.is_success() || self.flags.is_set("quiet") {
            return;
        }
        println!("{}", self.style.warning(&status.to_string()));
    }

    fn save_history(&mut self) {
        if let Some(path) = &self.history_file {
            if let Err(e) = self.editor.save_history(path) {
                if !self.flags.is_set("quiet") {
                    eprintln!("Warning: couldn't save history: {}", e);
                }
            }
        }
    }
}

/// Runs commands from a non-interactive source (a script file or piped
/// stdin), one line per cycle. Blank lines and `#` comments are skipped; the
/// first shell error stops execution; `exit` ends the run with its code.
pub fn run_batch<R: BufRead>(reader: R, flags: &Flags) -> Result<i32, ShellError> {
    let mut interpreter = Interpreter::new()?;
    let style = OutputStyle::new();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match interpreter.interpret(trimmed)? {
            Cycle::Exit(code) => return Ok(code),
            Cycle::Status(status) if !status.is_success() && !flags.is_set("quiet") => {
                println!("{}", style.warning(&status.to_string()));
            }
            _ => {}
        }
    }

    Ok(0)
}
