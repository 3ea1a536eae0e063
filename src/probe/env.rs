//! Process environment snapshot
//!
//! Probes read environment variables and a few well-known files through the
//! [`Environment`] trait so tests can supply their own values.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Read-only view of environment variables and files
pub trait Environment {
    /// Whether the variable is set at all (an empty value counts)
    fn contains(&self, key: &str) -> bool;

    /// Raw value of a variable, empty strings included
    fn raw(&self, key: &str) -> Option<&str>;

    /// Read a whole file as text
    fn read_file(&self, path: &Path) -> Option<String>;

    /// Value of a variable, treating an empty value as unset
    fn var(&self, key: &str) -> Option<String> {
        self.raw(key)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(ToOwned::to_owned)
    }
}

/// Variables captured once at startup; files are read from disk on demand
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars_os()
                .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
                .collect(),
        }
    }
}

impl Environment for EnvSnapshot {
    fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    fn raw(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    fn read_file(&self, path: &Path) -> Option<String> {
        fs::read_to_string(path).ok()
    }
}
