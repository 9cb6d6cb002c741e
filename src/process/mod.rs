//! External command invocation
//!
//! Every child process gets an explicit environment map ([`ChildEnv`]) instead
//! of inheriting ours, so stripping `VIRTUAL_ENV` or activating the new
//! environment never touches process-wide state.

mod env;

pub use env::ChildEnv;

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::Result;
use crate::error::pipeline::spawn_failed;

/// A program and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl CommandSpec {
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Append `flag path` when `path` is set
    #[must_use]
    pub fn opt_path(self, flag: &str, path: Option<&Path>) -> Self {
        match path {
            Some(path) => self.arg(flag).arg(path),
            None => self,
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Exit status and captured output of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external commands to completion
///
/// A non-zero exit is reported through [`CommandOutput`]; `Err` means the
/// program could not be started at all.
pub trait CommandRunner {
    fn run(&mut self, command: &CommandSpec, env: &ChildEnv) -> Result<CommandOutput>;
}

/// Runs commands with `std::process`, blocking until they exit
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, command: &CommandSpec, env: &ChildEnv) -> Result<CommandOutput> {
        debug!("Executing command: {command}");

        let output = Command::new(&command.program)
            .args(&command.args)
            .env_clear()
            .envs(env.iter())
            .output()
            .map_err(|e| spawn_failed(&command.program.to_string_lossy(), &e))?;

        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        debug!(code = ?result.code, "{}", result.stdout.trim_end());
        if !result.stderr.trim().is_empty() {
            debug!("{}", result.stderr.trim_end());
        }

        Ok(result)
    }
}
