use std::fmt;

pub mod executor;
pub mod signal;

pub use executor::ProcessExecutor;

#[derive(Debug)]
pub enum ProcessError {
    Launch {
        program: String,
        source: std::io::Error,
    },
    Wait(std::io::Error),
    Signal(String),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Launch { program, source } => {
                write!(f, "failed to launch {}: {}", program, source)
            }
            ProcessError::Wait(e) => write!(f, "failed waiting for child: {}", e),
            ProcessError::Signal(msg) => write!(f, "Signal error: {}", msg),
        }
    }
}

/// How a spawned child ended. A signal termination is a reportable status,
/// not a shell error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessStatus {
    Exited(i32),
    Signaled(i32),
}

impl ProcessStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, ProcessStatus::Exited(0))
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessStatus::Exited(code) => write!(f, "process exited with status: {}", code),
            ProcessStatus::Signaled(sig) => write!(f, "process terminated by signal: {}", sig),
        }
    }
}
