//! Test fixtures and fakes for reducing test setup duplication.
//!
//! The pipeline talks to the outside world through three seams: the
//! [`CommandRunner`], the [`Fetcher`] and the [`Reporter`]. This module has
//! scripted stand-ins for each so builder, installer and pipeline tests run
//! without Python or network access.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, RecordingReporter, ScriptedRunner};
//!
//! #[test]
//! fn my_test() {
//!     let temp = create_temp_dir();
//!     let mut runner = ScriptedRunner::with_exit_codes([1, 0]);
//!     let reporter = RecordingReporter::default();
//! }
//! ```

#![allow(clippy::expect_used)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;

use tempfile::TempDir;

use crate::cache::Fetcher;
use crate::error::Result;
use crate::error::pipeline::download_failed;
use crate::process::{ChildEnv, CommandOutput, CommandRunner, CommandSpec};
use crate::ui::{Reporter, Tone};

/// Directory for test temp dirs; never relative, so a `TMPDIR=tmp` setting
/// cannot put them under the current working directory.
fn temp_dir_base() -> PathBuf {
    let t = std::env::temp_dir();
    if t.is_absolute() {
        t
    } else if cfg!(windows) {
        std::env::var("TEMP")
            .or_else(|_| std::env::var("TMP"))
            .map_or_else(|_| PathBuf::from("C:\\Windows\\Temp"), PathBuf::from)
    } else {
        PathBuf::from("/tmp")
    }
}

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(temp_dir_base()).expect("Failed to create temp directory")
}

/// Create test files in a directory.
///
/// Takes a list of (path, content) tuples and creates those files.
/// Paths are relative to the provided base directory.
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn create_test_files(temp: &TempDir, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = temp.path().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&full_path, content).expect("Failed to write test file");
    }
}

/// Reporter that keeps every line for later assertions
#[derive(Default)]
pub struct RecordingReporter {
    lines: RefCell<Vec<(Tone, String)>>,
}

impl RecordingReporter {
    pub fn lines(&self) -> Vec<(Tone, String)> {
        self.lines.borrow().clone()
    }

    /// True if any line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|(_, l)| l.contains(needle))
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, tone: Tone, message: &str) {
        self.lines.borrow_mut().push((tone, message.to_string()));
    }
}

type RunHook = Box<dyn FnMut(&CommandSpec, i32)>;

/// Command runner answering with a queue of exit codes
///
/// Once the queue is empty every further command exits 0. Each call is
/// recorded along with the environment it was given.
#[derive(Default)]
pub struct ScriptedRunner {
    pub calls: Vec<(CommandSpec, ChildEnv)>,
    codes: VecDeque<i32>,
    hook: Option<RunHook>,
}

impl ScriptedRunner {
    pub fn with_exit_codes(codes: impl IntoIterator<Item = i32>) -> Self {
        Self {
            codes: codes.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Run `hook` after each command with the exit code it was given
    #[must_use]
    pub fn on_run(mut self, hook: impl FnMut(&CommandSpec, i32) + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    /// Rendered command lines, in call order
    pub fn command_lines(&self) -> Vec<String> {
        self.calls.iter().map(|(c, _)| c.to_string()).collect()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&mut self, command: &CommandSpec, env: &ChildEnv) -> Result<CommandOutput> {
        let code = self.codes.pop_front().unwrap_or(0);
        self.calls.push((command.clone(), env.clone()));
        if let Some(hook) = self.hook.as_mut() {
            hook(command, code);
        }
        Ok(CommandOutput {
            code: Some(code),
            ..CommandOutput::default()
        })
    }
}

/// Fetcher serving canned bodies by URL
#[derive(Default)]
pub struct FakeFetcher {
    bodies: HashMap<String, Vec<u8>>,
    pub requests: Vec<String>,
}

impl FakeFetcher {
    #[must_use]
    pub fn serving(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.bodies.insert(url.to_string(), body.into());
        self
    }
}

impl Fetcher for FakeFetcher {
    fn fetch(&mut self, url: &str) -> Result<Vec<u8>> {
        self.requests.push(url.to_string());
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| download_failed(url, "404 Not Found"))
    }
}

/// Hook for [`ScriptedRunner`] that mimics virtualenv populating the target.
///
/// For every successful `-m virtualenv <target>` call, creates
/// `<target>/bin/activate` so the directory looks freshly built.
pub fn virtualenv_populates_target() -> impl FnMut(&CommandSpec, i32) {
    |command, code| {
        if code != 0 {
            return;
        }
        let args: Vec<_> = command.args.iter().collect();
        if let Some(pos) = args.iter().position(|a| a.as_os_str() == "virtualenv") {
            if let Some(target) = args.get(pos + 1) {
                let bin = PathBuf::from(target.as_os_str()).join(crate::activate::BIN_DIR);
                std::fs::create_dir_all(&bin).expect("Failed to create env bin dir");
                std::fs::write(bin.join("activate"), "# activate\n")
                    .expect("Failed to write activate script");
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
    }

    #[test]
    fn test_create_test_files() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[("requirements.txt", "requests\n"), ("sub/a.txt", "")]);
        assert!(temp.path().join("requirements.txt").is_file());
        assert!(temp.path().join("sub/a.txt").is_file());
    }

    #[test]
    fn test_scripted_runner_codes_then_zero() {
        let mut runner = ScriptedRunner::with_exit_codes([1]);
        let env = ChildEnv::default();
        let cmd = CommandSpec::new("true");
        assert_eq!(runner.run(&cmd, &env).unwrap().code, Some(1));
        assert_eq!(runner.run(&cmd, &env).unwrap().code, Some(0));
        assert_eq!(runner.calls.len(), 2);
    }

    #[test]
    fn test_fake_fetcher_unknown_url_fails() {
        let mut fetcher = FakeFetcher::default().serving("http://a", b"body".to_vec());
        assert_eq!(fetcher.fetch("http://a").unwrap(), b"body");
        assert!(fetcher.fetch("http://b").is_err());
        assert_eq!(fetcher.requests, vec!["http://a", "http://b"]);
    }
}
