//! Starting the built executable
//!
//! In [`LaunchMode::Detached`] the child is spawned and its handle dropped
//! without waiting, so the process outlives this program. Nothing that
//! happens to it after a successful spawn is observed.

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, info};

use crate::config::LaunchMode;
use crate::error::{self, Result};

/// How the launched process ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Started and left running
    Detached { pid: u32 },
    /// Waited on until it exited successfully
    Exited { status: ExitStatus },
}

/// Start `executable` with `args`, inheriting stdout and stderr.
///
/// The process keeps the caller's working directory.
#[allow(clippy::zombie_processes)]
pub fn launch(executable: &Path, args: &[String], mode: LaunchMode) -> Result<LaunchOutcome> {
    if !executable.is_file() {
        return Err(error::process::executable_not_found(executable));
    }

    let shown = executable.display().to_string();
    debug!(executable = %shown, ?args, %mode, "launching");

    let mut child = Command::new(executable)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| error::process::start_failed(&shown, e))?;

    match mode {
        LaunchMode::Detached => {
            let pid = child.id();
            info!(pid, executable = %shown, "left running detached");
            Ok(LaunchOutcome::Detached { pid })
        }
        LaunchMode::Supervised => {
            let status = child
                .wait()
                .map_err(|e| error::process::start_failed(&shown, e))?;
            if !status.success() {
                return Err(error::process::exited(shown, status));
            }
            Ok(LaunchOutcome::Exited { status })
        }
    }
}
