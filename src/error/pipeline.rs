//! Environment build and install errors

use std::path::Path;

use super::MkenvError;

/// Creates a build failed error
pub fn build_failed(target: &Path) -> MkenvError {
    MkenvError::BuildFailed {
        target: target.display().to_string(),
    }
}

/// Creates an install failed error naming the requirement file
pub fn install_failed(file: &Path) -> MkenvError {
    MkenvError::InstallFailed {
        file: file.display().to_string(),
    }
}

/// Creates a download failed error
pub fn download_failed(url: &str, reason: impl Into<String>) -> MkenvError {
    MkenvError::Download {
        url: url.to_string(),
        reason: reason.into(),
    }
}

/// Creates a spawn failed error
pub fn spawn_failed(program: &str, err: &std::io::Error) -> MkenvError {
    MkenvError::Spawn {
        program: program.to_string(),
        reason: err.to_string(),
    }
}
