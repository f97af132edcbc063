//! External command errors

use std::path::Path;
use std::process::ExitStatus;

use super::BootstrapError;

/// Creates an error for a command that could not be spawned
pub fn start_failed(command: impl Into<String>, reason: impl ToString) -> BootstrapError {
    BootstrapError::CommandStartFailed {
        command: command.into(),
        reason: reason.to_string(),
    }
}

/// Creates an error for a build command that exited unsuccessfully
pub fn build_failed(command: impl Into<String>, status: ExitStatus) -> BootstrapError {
    BootstrapError::BuildFailed {
        command: command.into(),
        status: status.to_string(),
    }
}

/// Creates an error for a supervised process that exited unsuccessfully
pub fn exited(command: impl Into<String>, status: ExitStatus) -> BootstrapError {
    BootstrapError::ProcessFailed {
        command: command.into(),
        status: status.to_string(),
    }
}

pub fn executable_not_found(path: &Path) -> BootstrapError {
    BootstrapError::ExecutableNotFound {
        path: path.display().to_string(),
    }
}
