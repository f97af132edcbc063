//! Configuration errors

use std::path::Path;

use super::BootstrapError;

pub fn read_failed(path: &Path, reason: impl ToString) -> BootstrapError {
    BootstrapError::ConfigReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

pub fn parse_failed(path: &Path, reason: impl ToString) -> BootstrapError {
    BootstrapError::ConfigParseFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an invalid configuration error
pub fn invalid(message: impl Into<String>) -> BootstrapError {
    BootstrapError::ConfigInvalid {
        message: message.into(),
    }
}
