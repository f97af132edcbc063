//! Error types and handling for redis-bootstrap
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Convenience constructors live in sub-modules by error domain:
//! - [`fetch`]: HTTP download errors
//! - [`fs`]: File system errors
//! - [`archive`]: Archive decoding errors
//! - [`process`]: External command errors
//! - [`config`]: Configuration errors

pub mod archive;
pub mod config;
pub mod fetch;
pub mod fs;
pub mod process;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bootstrap operations
#[derive(Error, Diagnostic, Debug)]
pub enum BootstrapError {
    // Network errors
    #[error("Failed to download {url}: {reason}")]
    #[diagnostic(
        code(redis_bootstrap::fetch::failed),
        help("Check that the URL is correct and the host is reachable")
    )]
    FetchFailed { url: String, reason: String },

    #[error("Server answered {status} for {url}")]
    #[diagnostic(
        code(redis_bootstrap::fetch::http_status),
        help("Pass --accept-error-status to keep the response body anyway")
    )]
    HttpStatus { url: String, status: u16 },

    #[error("Invalid URL '{url}': {reason}")]
    #[diagnostic(
        code(redis_bootstrap::fetch::invalid_url),
        help("Only http:// and https:// URLs are supported")
    )]
    InvalidUrl { url: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(redis_bootstrap::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(redis_bootstrap::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Directory not found: {path}")]
    #[diagnostic(
        code(redis_bootstrap::fs::directory_not_found),
        help("Run 'redis-bootstrap extract' first to populate the source tree")
    )]
    DirectoryNotFound { path: String },

    // Archive errors
    #[error("Malformed archive {path}: {reason}")]
    #[diagnostic(
        code(redis_bootstrap::archive::malformed),
        help("The download may be an error page instead of a .tar.gz; fetch it again")
    )]
    MalformedArchive { path: String, reason: String },

    #[error("Archive entry escapes the extraction root: {entry}")]
    #[diagnostic(
        code(redis_bootstrap::archive::unsafe_entry),
        help("Entries with absolute paths or '..' segments are never extracted")
    )]
    UnsafeArchiveEntry { entry: String },

    #[error("Archive file {entry} has no path left after stripping {strip_components} leading components")]
    #[diagnostic(
        code(redis_bootstrap::archive::stripped_entry),
        help("The archive has no single top-level directory; rerun with --strip-components 0")
    )]
    StrippedArchiveEntry {
        entry: String,
        strip_components: usize,
    },

    // Process errors
    #[error("Failed to start '{command}': {reason}")]
    #[diagnostic(code(redis_bootstrap::process::start_failed))]
    CommandStartFailed { command: String, reason: String },

    #[error("Build command '{command}' failed with {status}")]
    #[diagnostic(
        code(redis_bootstrap::process::build_failed),
        help("See the build output above for details")
    )]
    BuildFailed { command: String, status: String },

    #[error("'{command}' exited with {status}")]
    #[diagnostic(code(redis_bootstrap::process::exited))]
    ProcessFailed { command: String, status: String },

    #[error("Executable not found: {path}")]
    #[diagnostic(
        code(redis_bootstrap::process::executable_not_found),
        help("Run 'redis-bootstrap build' first to produce it")
    )]
    ExecutableNotFound { path: String },

    #[error("Invalid command: {message}")]
    #[diagnostic(code(redis_bootstrap::process::invalid_command))]
    InvalidCommand { message: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(redis_bootstrap::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(redis_bootstrap::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(redis_bootstrap::config::invalid))]
    ConfigInvalid { message: String },
}

impl From<serde_yaml::Error> for BootstrapError {
    fn from(err: serde_yaml::Error) -> Self {
        BootstrapError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BootstrapError>;

#[cfg(test)]
mod tests;
