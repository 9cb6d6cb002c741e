//! Stale bootstrap wheel removal

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::artifact::BootstrapArtifact;
use crate::error::Result;
use crate::error::fs::{io_error, remove_failed};
use crate::ui::Reporter;

/// Remove every file in `dir` whose distribution name (the part before the
/// first `-`) is the artifact's package but is not the artifact's exact file
/// name.
///
/// Keeps the wheels directory at one version per bootstrap package. Wheels of
/// other distributions, including ones whose names merely start with the
/// package (`setuptools_scm`, `pipenv`), are left alone. Returns the removed
/// paths.
pub fn remove_stale(
    artifact: &BootstrapArtifact,
    dir: &Path,
    reporter: &dyn Reporter,
) -> Result<Vec<PathBuf>> {
    let package = artifact.package_name();
    let keep = artifact.filename();
    let mut removed = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| io_error("Failed to list", dir, &e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_error("Failed to list", dir, &e))?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.split('-').next() != Some(package) || name == keep {
            continue;
        }

        let path = entry.path();
        if !path.is_file() {
            debug!("Skipping non-file cache entry {}", path.display());
            continue;
        }

        reporter.success(&format!("Removing old version of {package}: {name}"));
        std::fs::remove_file(&path).map_err(|e| remove_failed(&path, &e))?;
        removed.push(path);
    }

    removed.sort();
    Ok(removed)
}
