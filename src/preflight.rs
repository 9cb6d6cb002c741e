//! Checks run before anything on disk is touched

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::fs::missing_file;
use crate::error::{MkenvError, Result};
use crate::process::ChildEnv;
use crate::ui::Reporter;

/// Refuse to run from inside an active virtualenv.
///
/// An environment counts as active when `VIRTUAL_ENV` is set and the
/// interpreter we would run lives inside it: either `python` is a path under
/// `$VIRTUAL_ENV`, or it is a bare name whose first `PATH` hit is. A leftover
/// `VIRTUAL_ENV` with nothing of it on `PATH` is only stripped.
///
/// Returns the environment for child processes: `env` without `VIRTUAL_ENV`
/// and `PYTHONHOME`.
pub fn ensure_no_active_environment(env: &ChildEnv, python: &Path) -> Result<ChildEnv> {
    if let Some(virtual_env) = env.get_non_empty("VIRTUAL_ENV") {
        let virtual_env = PathBuf::from(virtual_env);
        let interpreter = if python.components().count() > 1 {
            Some(python.to_path_buf())
        } else {
            env.lookup_program(python)
        };
        debug!(
            virtual_env = %virtual_env.display(),
            interpreter = ?interpreter,
            "VIRTUAL_ENV is set"
        );

        if interpreter.is_some_and(|i| i.starts_with(&virtual_env)) {
            return Err(MkenvError::EnvironmentAlreadyActive {
                virtual_env: virtual_env.display().to_string(),
                python: python.display().to_string(),
            });
        }
    }

    Ok(env.clone().without("VIRTUAL_ENV").without("PYTHONHOME"))
}

/// Check that every requirement file exists, reporting each one found.
///
/// Fails on the first missing file; later files are not checked.
pub fn ensure_requirement_files_exist(paths: &[PathBuf], reporter: &dyn Reporter) -> Result<()> {
    for path in paths {
        if !path.is_file() {
            return Err(missing_file(path));
        }
        reporter.success(&format!("Using requirements file {}", path.display()));
    }
    Ok(())
}
