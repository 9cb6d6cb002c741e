//! File system errors

use std::path::Path;

use super::MkenvError;

/// Creates a remove failed error
pub fn remove_failed(path: &Path, err: &std::io::Error) -> MkenvError {
    MkenvError::RemoveFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a write failed error
pub fn write_failed(path: &Path, err: &std::io::Error) -> MkenvError {
    MkenvError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates an IO error with operation context
pub fn io_error(operation: &str, path: &Path, err: &std::io::Error) -> MkenvError {
    MkenvError::IoError {
        message: format!("{operation} {}: {err}", path.display()),
    }
}

/// Creates a missing requirement file error
pub fn missing_file(path: &Path) -> MkenvError {
    MkenvError::MissingFile {
        path: path.display().to_string(),
    }
}
