//! Requirement installation into an activated environment
//!
//! Two modes:
//! - [`InstallMode::LiveIndex`]: plain `pip install -r` against the package index
//! - [`InstallMode::FromCache`]: `pip install --no-index --find-links <wheels>`;
//!   when that fails the wheels for the file are built with `pip wheel` and the
//!   restricted install is retried once

use std::path::{Path, PathBuf};

use tracing::info;

use crate::activate::Activation;
use crate::error::Result;
use crate::error::pipeline::install_failed;
use crate::process::{CommandRunner, CommandSpec};
use crate::ui::Reporter;

/// Where pip may fetch packages from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstallMode {
    #[default]
    LiveIndex,
    FromCache,
}

/// Installs requirement files with the environment's pip
pub struct DependencyInstaller<'a> {
    runner: &'a mut dyn CommandRunner,
    reporter: &'a dyn Reporter,
    activation: &'a Activation,
    constraints: Option<PathBuf>,
}

impl<'a> DependencyInstaller<'a> {
    pub fn new(
        runner: &'a mut dyn CommandRunner,
        reporter: &'a dyn Reporter,
        activation: &'a Activation,
        constraints: Option<&Path>,
    ) -> Self {
        Self {
            runner,
            reporter,
            activation,
            constraints: constraints.map(Path::to_path_buf),
        }
    }

    /// Install every file in order, stopping at the first failure.
    pub fn install_all(
        &mut self,
        requirement_files: &[PathBuf],
        wheels_dir: &Path,
        mode: InstallMode,
    ) -> Result<()> {
        for file in requirement_files {
            match mode {
                InstallMode::LiveIndex => self.install_live(file)?,
                InstallMode::FromCache => self.install_cached(file, wheels_dir)?,
            }
        }
        Ok(())
    }

    fn pip(&self) -> CommandSpec {
        CommandSpec::new(self.activation.pip())
    }

    pub fn live_command(&self, file: &Path) -> CommandSpec {
        self.pip()
            .args(["install", "-r"])
            .arg(file)
            .opt_path("-c", self.constraints.as_deref())
    }

    pub fn cached_command(&self, file: &Path, wheels_dir: &Path) -> CommandSpec {
        self.pip()
            .args(["install", "--no-index", "--find-links"])
            .arg(wheels_dir)
            .arg("-r")
            .arg(file)
            .opt_path("-c", self.constraints.as_deref())
    }

    pub fn wheel_command(&self, file: &Path, wheels_dir: &Path) -> CommandSpec {
        self.pip()
            .args(["wheel", "--wheel-dir"])
            .arg(wheels_dir)
            .arg("-r")
            .arg(file)
            .opt_path("-c", self.constraints.as_deref())
    }

    fn run_ok(&mut self, cmd: &CommandSpec) -> Result<bool> {
        Ok(self.runner.run(cmd, &self.activation.env)?.success())
    }

    fn install_live(&mut self, file: &Path) -> Result<()> {
        self.reporter.success(&format!(
            "Installing requirements from {}",
            file.display()
        ));
        let cmd = self.live_command(file);
        if !self.run_ok(&cmd)? {
            return Err(install_failed(file));
        }
        self.reporter
            .success(&format!("Installed requirements from {}", file.display()));
        Ok(())
    }

    fn install_cached(&mut self, file: &Path, wheels_dir: &Path) -> Result<()> {
        self.reporter.success(&format!(
            "Installing requirements from {} using wheels",
            file.display()
        ));
        let cmd = self.cached_command(file, wheels_dir);
        if self.run_ok(&cmd)? {
            self.reporter.success(&format!(
                "Installed requirements from {} using wheels",
                file.display()
            ));
            return Ok(());
        }

        info!(file = %file.display(), "install from wheels failed, building wheels");
        self.reporter.warn(&format!(
            "Installation from wheels failed, building wheels for {}",
            file.display()
        ));
        let build = self.wheel_command(file, wheels_dir);
        if !self.run_ok(&build)? {
            self.reporter.failure(&format!(
                "Building wheels for {} failed",
                file.display()
            ));
            return Err(install_failed(file));
        }

        self.reporter.note(&format!(
            "Retrying installation of {} using wheels",
            file.display()
        ));
        if !self.run_ok(&cmd)? {
            return Err(install_failed(file));
        }
        self.reporter.success(&format!(
            "Installed requirements from {} using wheels",
            file.display()
        ));
        Ok(())
    }
}
