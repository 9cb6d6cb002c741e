//! Cache path utilities and constants

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::error::fs::io_error;

/// Default wheels directory, relative to the user's home directory
const WHEELS_DIR: &str = ".cache/mkenv";

/// Get the default wheels directory path (`~/.cache/mkenv`)
pub fn default_wheels_dir(home: &Path) -> PathBuf {
    home.join(WHEELS_DIR)
}

/// Create the wheels directory if it does not exist yet
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| io_error("Failed to create", path, &e))
}
