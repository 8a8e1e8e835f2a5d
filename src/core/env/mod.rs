mod vars;

pub use vars::{is_valid_name, Environment};

#[derive(Debug)]
pub enum EnvError {
    EmptyName,
    InvalidName(String),
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::EmptyName => write!(f, "empty variable name"),
            EnvError::InvalidName(name) => write!(f, "invalid variable name: {}", name),
        }
    }
}

impl std::error::Error for EnvError {}
