//! Run configuration
//!
//! Settings are layered, highest first:
//! 1. command-line flags
//! 2. `MKENV_*` environment variables (via clap's `env`)
//! 3. the project's `mkenv.yaml`
//! 4. built-in defaults

pub mod project;

pub use project::ProjectConfig;

use std::path::{Path, PathBuf};

use crate::cache::default_wheels_dir;
use crate::cli::Cli;
use crate::error::Result;
use crate::error::config::usage;
use crate::error::fs::missing_file;
use crate::installer::InstallMode;

pub const DEFAULT_TARGET: &str = "env";
pub const DEFAULT_PYTHON: &str = "python3";
pub const REQUIREMENTS_FILE: &str = "requirements.txt";
pub const DEV_REQUIREMENTS_FILE: &str = "requirements-dev.txt";
pub const CONSTRAINTS_FILE: &str = "constraints.txt";

/// Everything one run needs, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub project_root: PathBuf,
    /// Absolute path of the environment directory
    pub target: PathBuf,
    pub dev: bool,
    pub wheels_dir: PathBuf,
    pub debug: bool,
    pub always_copy: bool,
    pub mode: InstallMode,
    pub requirement_files: Vec<PathBuf>,
    /// Constraints file, only set when it exists
    pub constraints: Option<PathBuf>,
    pub python: PathBuf,
}

impl RunConfig {
    /// Resolve against the process's working directory and home directory
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::resolve(cli, &cwd, dirs::home_dir().as_deref())
    }

    /// Build the configuration from parsed flags.
    ///
    /// `cwd` anchors relative `--project`, `--wheels-dir` and `--python`
    /// paths; `home` provides the default wheels directory and `~/` expansion.
    pub fn resolve(cli: Cli, cwd: &Path, home: Option<&Path>) -> Result<Self> {
        let project_root = cli
            .project
            .map_or_else(|| cwd.to_path_buf(), |p| cwd.join(p));
        let project = ProjectConfig::load(&project_root)?;

        let target_name = cli
            .target
            .or(project.target)
            .unwrap_or_else(|| DEFAULT_TARGET.to_string());
        if target_name.trim().is_empty() {
            return Err(usage("--target must not be empty"));
        }
        let target = project_root.join(target_name);

        let wheels_dir = match (cli.wheels_dir, project.wheels_dir) {
            (Some(dir), _) => cwd.join(dir),
            (None, Some(dir)) => project_root.join(expand_home(&dir, home)?),
            (None, None) => default_wheels_dir(
                home.ok_or_else(|| usage("Cannot determine home directory; pass --wheels-dir"))?,
            ),
        };

        // Bare names are looked up on PATH; anything with a directory is
        // anchored where it was given: cwd for flags, the project for mkenv.yaml
        let python = match (cli.python, project.python) {
            (Some(python), _) => anchor_interpreter(python, cwd),
            (None, Some(python)) => anchor_interpreter(python, &project_root),
            (None, None) => PathBuf::from(DEFAULT_PYTHON),
        };

        let mut requirement_files = vec![project_root.join(
            project
                .requirements
                .unwrap_or_else(|| PathBuf::from(REQUIREMENTS_FILE)),
        )];
        if cli.dev {
            requirement_files.push(project_root.join(
                project
                    .dev_requirements
                    .unwrap_or_else(|| PathBuf::from(DEV_REQUIREMENTS_FILE)),
            ));
        }

        let constraints = match project.constraints {
            Some(path) => {
                let path = project_root.join(path);
                if !path.is_file() {
                    return Err(missing_file(&path));
                }
                Some(path)
            }
            None => Some(project_root.join(CONSTRAINTS_FILE)).filter(|p| p.is_file()),
        };

        Ok(Self {
            project_root,
            target,
            dev: cli.dev,
            wheels_dir,
            debug: cli.debug,
            always_copy: cli.always_copy || project.always_copy,
            mode: if cli.wheels {
                InstallMode::FromCache
            } else {
                InstallMode::LiveIndex
            },
            requirement_files,
            constraints,
            python,
        })
    }
}

fn anchor_interpreter(python: PathBuf, base: &Path) -> PathBuf {
    if python.components().count() > 1 {
        base.join(python)
    } else {
        python
    }
}

/// Expand a leading `~` to the home directory
fn expand_home(path: &Path, home: Option<&Path>) -> Result<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => {
            let home = home.ok_or_else(|| {
                usage(format!(
                    "Cannot expand {} without a home directory",
                    path.display()
                ))
            })?;
            Ok(home.join(rest))
        }
        Err(_) => Ok(path.to_path_buf()),
    }
}
