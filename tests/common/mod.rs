//! Common test utilities for redis-bootstrap integration tests

#![allow(dead_code)]

pub mod server;

use std::path::PathBuf;

use assert_cmd::Command;
use flate2::Compression;
use flate2::write::GzEncoder;
use tar::{Builder, EntryType, Header};
use tempfile::TempDir;

pub use server::ArchiveServer;

/// Environment variables that would leak host configuration into a test run
const BOOTSTRAP_ENV: &[&str] = &[
    "REDIS_BOOTSTRAP_CONFIG",
    "REDIS_BOOTSTRAP_URL",
    "REDIS_BOOTSTRAP_ARCHIVE",
    "REDIS_BOOTSTRAP_DEST",
    "REDIS_BOOTSTRAP_STRIP_COMPONENTS",
    "REDIS_BOOTSTRAP_BUILD_CMD",
    "RUST_LOG",
];

/// A scratch directory holding the archive and extraction root of one test
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Where the archive is downloaded to / read from
    pub fn archive_path(&self) -> PathBuf {
        self.path.join("redis.tar.gz")
    }

    /// Extraction root
    pub fn dest_path(&self) -> PathBuf {
        self.path.join("redis")
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: impl AsRef<[u8]>) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Place `archive` where the extract stage expects it
    pub fn write_archive(&self, archive: &[u8]) {
        std::fs::write(self.archive_path(), archive).expect("Failed to write archive");
    }

    /// Command running inside the workspace with archive and destination
    /// pointing into it
    pub fn cmd(&self) -> Command {
        let mut cmd = bootstrap_cmd();
        cmd.current_dir(&self.path)
            .arg("--archive")
            .arg(self.archive_path())
            .arg("--dest")
            .arg(self.dest_path());
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// The real redis-bootstrap binary with a clean environment
#[allow(deprecated)]
pub fn bootstrap_cmd() -> Command {
    let mut cmd = Command::cargo_bin("redis-bootstrap").expect("binary is built");
    for var in BOOTSTRAP_ENV {
        cmd.env_remove(var);
    }
    cmd
}

/// Builder for in-memory `.tar.gz` archives
pub struct ArchiveBuilder {
    builder: Builder<GzEncoder<Vec<u8>>>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self {
            builder: Builder::new(GzEncoder::new(Vec::new(), Compression::default())),
        }
    }

    pub fn dir(mut self, path: &str) -> Self {
        let mut header = header(EntryType::Directory, 0, 0o755);
        self.builder
            .append_data(&mut header, path, std::io::empty())
            .expect("append dir");
        self
    }

    pub fn file(self, path: &str, content: &[u8]) -> Self {
        self.file_with_mode(path, content, 0o644)
    }

    pub fn executable(self, path: &str, content: &[u8]) -> Self {
        self.file_with_mode(path, content, 0o755)
    }

    fn file_with_mode(mut self, path: &str, content: &[u8], mode: u32) -> Self {
        let mut header = header(EntryType::Regular, content.len() as u64, mode);
        self.builder
            .append_data(&mut header, path, content)
            .expect("append file");
        self
    }

    pub fn symlink(mut self, path: &str, target: &str) -> Self {
        let mut header = header(EntryType::Symlink, 0, 0o777);
        self.builder
            .append_link(&mut header, path, target)
            .expect("append symlink");
        self
    }

    /// Regular file whose raw name bypasses `tar`'s path validation
    pub fn raw_file(mut self, name: &str, content: &[u8]) -> Self {
        let mut header = header(EntryType::Regular, content.len() as u64, 0o644);
        header.as_old_mut().name[..name.len()].copy_from_slice(name.as_bytes());
        header.set_cksum();
        self.builder.append(&header, content).expect("append raw");
        self
    }

    pub fn finish(self) -> Vec<u8> {
        self.builder
            .into_inner()
            .expect("finish tar")
            .finish()
            .expect("finish gzip")
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn header(entry_type: EntryType, size: u64, mode: u32) -> Header {
    let mut header = Header::new_gnu();
    header.set_entry_type(entry_type);
    header.set_size(size);
    header.set_mode(mode);
    header
}

/// A release tarball laid out like `redis-6.2.6.tar.gz`: a single top-level
/// directory with a build script that produces `src/redis-server`.
///
/// The produced server writes its arguments to `server-ran.txt` in its
/// working directory and exits.
pub fn release_archive() -> Vec<u8> {
    ArchiveBuilder::new()
        .dir("redis-6.2.6/")
        .file("redis-6.2.6/README.md", b"This is the Redis source tree.\n")
        .executable(
            "redis-6.2.6/build.sh",
            b"#!/bin/sh\n\
              set -e\n\
              mkdir -p src\n\
              printf '#!/bin/sh\\necho \"ran $*\" > server-ran.txt\\n' > src/redis-server\n\
              chmod +x src/redis-server\n\
              echo build-finished\n",
        )
        .finish()
}
