//! Common file system operations with unified error handling

use std::fs;
use std::path::Path;

use crate::error::{self, Result};

/// Create `path` and any missing ancestors; an existing directory is fine.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| error::fs::write_failed(path, e))
}

/// Fail with `DirectoryNotFound` unless `path` is an existing directory.
pub fn require_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(error::fs::directory_not_found(path))
    }
}
