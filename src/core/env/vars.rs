use super::EnvError;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

/// The shell's environment snapshot. Seeded from the process environment at
/// startup, mutated only by the `export`/`unset` builtins, and copied into
/// children when they are spawned.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    pub fn from_process() -> Self {
        Self {
            vars: env::vars().collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        if name.is_empty() {
            return Err(EnvError::EmptyName);
        }
        if name.contains('=') {
            return Err(EnvError::InvalidName(name.to_string()));
        }
        self.vars.insert(name.to_string(), value.to_string());
        Ok(())
    }

    pub fn unset(&mut self, name: &str) -> bool {
        self.vars.remove(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.vars.iter()
    }

    /// The snapshot's `HOME` wins; the OS account database is the fallback.
    pub fn home_dir(&self) -> Option<PathBuf> {
        self.get("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
    }

    /// Directories to search for a bare command name. `PATH` is re-split on
    /// every call so an `export PATH=...` is visible to the next lookup.
    pub fn search_path(&self) -> Vec<PathBuf> {
        match self.get("PATH") {
            Some(path) => env::split_paths(path)
                .filter(|dir| !dir.as_os_str().is_empty())
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Whether `name` is usable as a variable name in an assignment.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
