//! Default filesystem locations
//!
//! The download and extraction paths default to fixed names under the system
//! temp directory. The base is always absolute so a relative `TMPDIR`
//! (e.g. `TMPDIR=tmp`) never lands the source tree under the current directory.

use std::env;
use std::path::PathBuf;

/// File name of the downloaded archive
pub const ARCHIVE_FILE: &str = "redis.tar.gz";

/// Directory name of the extraction root
pub const EXTRACT_DIR: &str = "redis";

/// Executable produced by the build, relative to the extraction root
pub const EXECUTABLE: &str = "src/redis-server";

/// Used when the system temp directory comes back relative
#[cfg(windows)]
const FALLBACK_TEMP: &str = r"C:\Windows\Temp";
#[cfg(not(windows))]
const FALLBACK_TEMP: &str = "/tmp";

/// Absolute directory under which the default paths live
pub fn base_dir() -> PathBuf {
    Some(env::temp_dir())
        .filter(|dir| dir.is_absolute())
        .unwrap_or_else(|| PathBuf::from(FALLBACK_TEMP))
}

pub fn download_path() -> PathBuf {
    base_dir().join(ARCHIVE_FILE)
}

pub fn extract_dir() -> PathBuf {
    base_dir().join(EXTRACT_DIR)
}
