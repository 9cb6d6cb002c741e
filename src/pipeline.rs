//! The setup pipeline: preflight, build, activate, install
//!
//! Strictly sequential and fail-fast. The only loops back are the single
//! retries inside the builder and the wheels-mode installer.

use tracing::info;

use crate::activate::Activation;
use crate::builder::EnvironmentBuilder;
use crate::cache::{self, Fetcher};
use crate::config::RunConfig;
use crate::error::Result;
use crate::installer::DependencyInstaller;
use crate::preflight;
use crate::process::{ChildEnv, CommandRunner};
use crate::ui::Reporter;

/// Run the whole setup for `config`.
///
/// `process_env` is the environment inherited by mkenv; child processes get
/// a copy of it adjusted by preflight and activation.
pub fn run(
    config: &RunConfig,
    process_env: &ChildEnv,
    runner: &mut dyn CommandRunner,
    fetcher: &mut dyn Fetcher,
    reporter: &dyn Reporter,
) -> Result<()> {
    info!(
        project = %config.project_root.display(),
        dev = config.dev,
        debug = config.debug,
        "starting environment setup"
    );
    let child_env = preflight::ensure_no_active_environment(process_env, &config.python)?;

    reporter.success(&format!(
        "Using wheels dir {}",
        config.wheels_dir.display()
    ));
    cache::ensure_dir(&config.wheels_dir)?;

    preflight::ensure_requirement_files_exist(&config.requirement_files, reporter)?;

    EnvironmentBuilder::new(runner, fetcher, reporter, &child_env, &config.python).build(
        &config.target,
        &config.wheels_dir,
        config.always_copy,
    )?;

    let activation = Activation::new(&config.target, &child_env)?;
    info!(env = %config.target.display(), "activated environment for installs");

    DependencyInstaller::new(runner, reporter, &activation, config.constraints.as_deref())
        .install_all(&config.requirement_files, &config.wheels_dir, config.mode)?;

    let files: Vec<String> = config
        .requirement_files
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    reporter.success(&format!(
        "Successfully installed all requirements from {}",
        files.join(", ")
    ));
    Ok(())
}
