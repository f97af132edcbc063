//! Error type tests
//!
//! Tests for BootstrapError enum and its conversions.

#![allow(clippy::unwrap_used)]

use std::path::Path;

use miette::Diagnostic;

use crate::error::{BootstrapError, archive, config, fetch, fs, process};

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

#[test]
fn test_error_display() {
    let err = BootstrapError::ExecutableNotFound {
        path: "/tmp/redis/src/redis-server".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Executable not found: /tmp/redis/src/redis-server"
    );
}

#[test]
fn test_error_code() {
    let err = archive::unsafe_entry(Path::new("../etc/passwd"));
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("redis_bootstrap::archive::unsafe_entry".to_string())
    );
}

#[test]
fn test_http_status_has_help() {
    let err = fetch::http_status("http://example.com/a.tar.gz", 404);
    let help = err.help().map(|h| h.to_string()).unwrap();
    assert!(help.contains("--accept-error-status"));
}

#[test]
fn test_yaml_error_conversion() {
    let parse_result: std::result::Result<serde_yaml::Value, _> =
        serde_yaml::from_str("invalid: yaml: content: [unclosed");
    let err: BootstrapError = parse_result.unwrap_err().into();
    assert!(matches!(err, BootstrapError::ConfigParseFailed { .. }));
}

#[test]
fn test_stripped_entry_points_at_flag() {
    let err = archive::stripped_file(Path::new("README"), 1);
    let help = err.help().map(|h| h.to_string()).unwrap();
    assert!(help.contains("--strip-components 0"));
}

test_error_contains!(
    test_fetch_failed,
    fetch::failed("http://127.0.0.1:1/x", "connection refused"),
    "Failed to download",
    "127.0.0.1:1",
    "connection refused"
);

test_error_contains!(
    test_http_status,
    fetch::http_status("http://example.com/a.tar.gz", 404),
    "404",
    "http://example.com/a.tar.gz"
);

test_error_contains!(
    test_write_failed,
    fs::write_failed(Path::new("/nonexistent/redis.tar.gz"), "No such file"),
    "Failed to write file",
    "/nonexistent/redis.tar.gz"
);

test_error_contains!(
    test_malformed_archive,
    archive::malformed(Path::new("/tmp/redis.tar.gz"), "invalid gzip header"),
    "Malformed archive",
    "invalid gzip header"
);

test_error_contains!(
    test_stripped_file,
    archive::stripped_file(Path::new("README"), 1),
    "README",
    "stripping 1 leading"
);

test_error_contains!(
    test_start_failed,
    process::start_failed("make", "No such file or directory"),
    "Failed to start 'make'"
);

test_error_contains!(
    test_config_invalid,
    config::invalid("build command is empty"),
    "Invalid configuration",
    "build command is empty"
);

test_error_contains!(
    test_directory_not_found,
    fs::directory_not_found(Path::new("/tmp/redis")),
    "Directory not found",
    "/tmp/redis"
);
