//! Running the external build tool

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

use crate::common::fs::require_dir;
use crate::config::BuildCommand;
use crate::error::{self, Result};

/// Result of a successful build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOutcome {
    pub status: ExitStatus,
}

/// Run `command` with `working_dir` as its current directory and wait for it.
///
/// Standard output and standard error are inherited. There is no timeout.
pub fn build(command: &BuildCommand, working_dir: &Path) -> Result<BuildOutcome> {
    require_dir(working_dir)?;

    debug!(command = %command, cwd = %working_dir.display(), "running build");
    let status = Command::new(&command.program)
        .args(&command.args)
        .current_dir(working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| error::process::start_failed(command.to_string(), e))?;

    if !status.success() {
        return Err(error::process::build_failed(command.to_string(), status));
    }

    debug!(%status, "build finished");
    Ok(BuildOutcome { status })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BootstrapError;
    use tempfile::TempDir;

    #[cfg(unix)]
    #[test]
    fn test_build_runs_in_working_dir() {
        let temp = TempDir::new().unwrap();
        let command = BuildCommand::new("sh").arg("-c").arg("echo built > marker");

        let outcome = build(&command, temp.path()).unwrap();

        assert!(outcome.status.success());
        assert_eq!(
            std::fs::read_to_string(temp.path().join("marker")).unwrap(),
            "built\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_build_failed() {
        let temp = TempDir::new().unwrap();
        let command = BuildCommand::new("sh").arg("-c").arg("exit 3");

        let err = build(&command, temp.path()).unwrap_err();

        match err {
            BootstrapError::BuildFailed { command, status } => {
                assert_eq!(command, "sh -c exit 3");
                assert!(status.contains('3'));
            }
            other => panic!("Expected BuildFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_make_without_makefile_is_build_failed() {
        let make_available = Command::new("make")
            .arg("--version")
            .stdout(Stdio::null())
            .status()
            .is_ok_and(|s| s.success());
        if !make_available {
            return;
        }

        let temp = TempDir::new().unwrap();
        let err = build(&BuildCommand::new("make"), temp.path()).unwrap_err();
        assert!(matches!(err, BootstrapError::BuildFailed { .. }));
    }

    #[test]
    fn test_missing_program_is_start_failure() {
        let temp = TempDir::new().unwrap();
        let command = BuildCommand::new("redis-bootstrap-no-such-build-tool");

        let err = build(&command, temp.path()).unwrap_err();
        assert!(matches!(err, BootstrapError::CommandStartFailed { .. }));
    }

    #[test]
    fn test_missing_working_dir() {
        let temp = TempDir::new().unwrap();
        let command = BuildCommand::new("make");

        let err = build(&command, &temp.path().join("missing")).unwrap_err();
        assert!(matches!(err, BootstrapError::DirectoryNotFound { .. }));
    }
}
