//! Explicit environment maps for child processes

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::{MkenvError, Result};

/// Environment variables handed to a child process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildEnv {
    vars: BTreeMap<OsString, OsString>,
}

// Windows treats variable names case-insensitively ("Path" vs "PATH").
#[cfg(windows)]
fn normalize_key(key: &OsStr) -> OsString {
    key.to_string_lossy().to_uppercase().into()
}

#[cfg(not(windows))]
fn normalize_key(key: &OsStr) -> OsString {
    key.to_os_string()
}

impl ChildEnv {
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<OsStr>,
        V: AsRef<OsStr>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (normalize_key(k.as_ref()), v.as_ref().to_os_string()))
                .collect(),
        }
    }

    /// Snapshot of this process's environment
    pub fn from_process() -> Self {
        Self::from_vars(std::env::vars_os())
    }

    pub fn get(&self, key: &str) -> Option<&OsStr> {
        self.vars
            .get(&normalize_key(OsStr::new(key)))
            .map(OsString::as_os_str)
    }

    /// Value of `key` if set and non-empty
    pub fn get_non_empty(&self, key: &str) -> Option<&OsStr> {
        self.get(key).filter(|v| !v.is_empty())
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: impl AsRef<OsStr>) -> Self {
        self.vars
            .insert(normalize_key(OsStr::new(key)), value.as_ref().to_os_string());
        self
    }

    #[must_use]
    pub fn without(mut self, key: &str) -> Self {
        self.vars.remove(&normalize_key(OsStr::new(key)));
        self
    }

    /// Put `dir` in front of the `PATH` entries
    pub fn with_path_prepended(self, dir: &Path) -> Result<Self> {
        let mut entries = vec![dir.to_path_buf()];
        if let Some(path) = self.get("PATH") {
            entries.extend(std::env::split_paths(path));
        }
        let joined = std::env::join_paths(entries).map_err(|e| MkenvError::IoError {
            message: format!("Cannot add {} to PATH: {e}", dir.display()),
        })?;
        Ok(self.with("PATH", joined))
    }

    /// First match for a bare program name on this environment's `PATH`
    pub fn lookup_program(&self, name: &Path) -> Option<PathBuf> {
        let path = self.get("PATH")?;
        std::env::split_paths(path)
            .filter(|dir| !dir.as_os_str().is_empty())
            .flat_map(|dir| candidates(&dir, name))
            .find(|candidate| candidate.is_file())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsString, &OsString)> {
        self.vars.iter()
    }
}

#[cfg(windows)]
fn candidates(dir: &Path, name: &Path) -> Vec<PathBuf> {
    vec![dir.join(name), dir.join(name).with_extension("exe")]
}

#[cfg(not(windows))]
fn candidates(dir: &Path, name: &Path) -> Vec<PathBuf> {
    vec![dir.join(name)]
}
