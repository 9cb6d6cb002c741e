//! Configuration errors

use std::path::Path;

use super::MkenvError;

/// Creates a config parse failed error
pub fn parse_failed(path: &Path, reason: impl Into<String>) -> MkenvError {
    MkenvError::ConfigParseFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: &Path, reason: impl Into<String>) -> MkenvError {
    MkenvError::ConfigReadFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates a usage error
pub fn usage(message: impl Into<String>) -> MkenvError {
    MkenvError::Usage {
        message: message.into(),
    }
}
