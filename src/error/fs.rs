//! File system errors

use std::path::Path;

use super::BootstrapError;

/// Creates a read failure error for `path`
pub fn read_failed(path: &Path, reason: impl ToString) -> BootstrapError {
    BootstrapError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a write failure error for `path`
pub fn write_failed(path: &Path, reason: impl ToString) -> BootstrapError {
    BootstrapError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

pub fn directory_not_found(path: &Path) -> BootstrapError {
    BootstrapError::DirectoryNotFound {
        path: path.display().to_string(),
    }
}
