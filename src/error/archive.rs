//! Archive decoding errors

use std::path::Path;

use super::BootstrapError;

/// Creates an error for a gzip or tar stream that cannot be decoded
pub fn malformed(path: &Path, reason: impl ToString) -> BootstrapError {
    BootstrapError::MalformedArchive {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

pub fn unsafe_entry(entry: &Path) -> BootstrapError {
    BootstrapError::UnsafeArchiveEntry {
        entry: entry.display().to_string(),
    }
}

/// Creates an error for a regular file whose whole name is removed by
/// `--strip-components`
pub fn stripped_file(entry: &Path, strip_components: usize) -> BootstrapError {
    BootstrapError::StrippedArchiveEntry {
        entry: entry.display().to_string(),
        strip_components,
    }
}
