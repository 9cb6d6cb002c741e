//! Environment creation with virtualenv
//!
//! The target directory is always rebuilt from scratch. virtualenv is pointed
//! at the wheels directory for its pip/setuptools seed; when it fails (most
//! likely because those wheels are missing) the pinned bootstrap wheels are
//! downloaded and virtualenv is run exactly once more.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::artifact::{BOOTSTRAP, BootstrapArtifact};
use crate::cache::{self, DownloadOutcome, Fetcher};
use crate::error::Result;
use crate::error::fs::remove_failed;
use crate::error::pipeline::build_failed;
use crate::process::{ChildEnv, CommandRunner, CommandSpec};
use crate::ui::Reporter;

/// Builds a virtualenv through an external interpreter
pub struct EnvironmentBuilder<'a> {
    runner: &'a mut dyn CommandRunner,
    fetcher: &'a mut dyn Fetcher,
    reporter: &'a dyn Reporter,
    env: &'a ChildEnv,
    python: PathBuf,
    artifacts: &'a [BootstrapArtifact],
}

impl<'a> EnvironmentBuilder<'a> {
    pub fn new(
        runner: &'a mut dyn CommandRunner,
        fetcher: &'a mut dyn Fetcher,
        reporter: &'a dyn Reporter,
        env: &'a ChildEnv,
        python: &Path,
    ) -> Self {
        Self {
            runner,
            fetcher,
            reporter,
            env,
            python: python.to_path_buf(),
            artifacts: &BOOTSTRAP,
        }
    }

    /// Use a different set of bootstrap wheels
    #[cfg(test)]
    #[must_use]
    pub fn with_artifacts(mut self, artifacts: &'a [BootstrapArtifact]) -> Self {
        self.artifacts = artifacts;
        self
    }

    /// The virtualenv invocation for `target`
    pub fn command(&self, target: &Path, wheels_dir: &Path, always_copy: bool) -> CommandSpec {
        let cmd = CommandSpec::new(&self.python)
            .args(["-m", "virtualenv"])
            .arg(target)
            .arg("--no-wheel")
            .arg("--extra-search-dir")
            .arg(wheels_dir);
        if always_copy {
            cmd.arg("--always-copy")
        } else {
            cmd
        }
    }

    /// Delete `target` if present and create a fresh environment in it.
    pub fn build(&mut self, target: &Path, wheels_dir: &Path, always_copy: bool) -> Result<()> {
        if target.is_dir() {
            std::fs::remove_dir_all(target).map_err(|e| remove_failed(target, &e))?;
            self.reporter
                .success(&format!("Deleted old env in {}", target.display()));
        }

        for artifact in self.artifacts {
            cache::remove_stale(artifact, wheels_dir, self.reporter)?;
        }

        let cmd = self.command(target, wheels_dir, always_copy);
        if !self.runner.run(&cmd, self.env)?.success() {
            info!("virtualenv failed, fetching bootstrap wheels and retrying");
            self.reporter
                .note("virtualenv failed, downloading pip and setuptools wheels");
            for artifact in self.artifacts {
                match cache::download(artifact, wheels_dir, self.fetcher, self.reporter)? {
                    DownloadOutcome::Downloaded(path) => {
                        debug!(path = %path.display(), "bootstrap wheel stored");
                    }
                    DownloadOutcome::AlreadyPresent(path) => {
                        debug!(path = %path.display(), "bootstrap wheel already cached");
                    }
                }
            }
            if !self.runner.run(&cmd, self.env)?.success() {
                return Err(build_failed(target));
            }
        }

        self.reporter
            .success(&format!("Created virtualenv in {}", target.display()));
        Ok(())
    }
}
