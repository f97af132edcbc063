//! CLI definitions using clap derive API
//!
//! Global options override the configuration of every stage; see
//! [`crate::config`] for the layering.

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{ConfigOverrides, LaunchMode};

pub mod completions;

pub use completions::CompletionsArgs;

/// redis-bootstrap - fetch, build and start a Redis source release
///
/// Downloads the release tarball, unpacks it, runs the build and launches the server.
#[derive(Parser, Debug)]
#[command(
    name = "redis-bootstrap",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Download, extract, build and launch a Redis source release",
    long_about = "redis-bootstrap downloads a source tarball over HTTP, extracts it, runs the \
                  build command inside the extracted tree and starts the produced server. \
                  Without a subcommand all four stages run in order.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  redis-bootstrap                              \x1b[90m# Run every stage\x1b[0m\n   \
                  redis-bootstrap fetch                        \x1b[90m# Only download the tarball\x1b[0m\n   \
                  redis-bootstrap build --build-cmd 'make -j8' \x1b[90m# Rebuild the extracted tree\x1b[0m\n   \
                  redis-bootstrap extract --strip-components 0 \x1b[90m# Keep archive paths as stored\x1b[0m\n   \
                  redis-bootstrap launch --wait                \x1b[90m# Run the server in the foreground\x1b[0m\n   \
                  redis-bootstrap -c bootstrap.yaml config     \x1b[90m# Show the effective configuration\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// YAML configuration file
    #[arg(long, short = 'c', global = true, env = "REDIS_BOOTSTRAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Source tarball URL
    #[arg(long, global = true, env = "REDIS_BOOTSTRAP_URL")]
    pub url: Option<String>,

    /// Path the tarball is downloaded to
    #[arg(long, global = true, value_name = "PATH", env = "REDIS_BOOTSTRAP_ARCHIVE")]
    pub archive: Option<PathBuf>,

    /// Extraction root, also the build directory
    #[arg(long, global = true, value_name = "DIR", env = "REDIS_BOOTSTRAP_DEST")]
    pub dest: Option<PathBuf>,

    /// Leading path components removed from archive entries (default: 1)
    #[arg(long, global = true, value_name = "N", env = "REDIS_BOOTSTRAP_STRIP_COMPONENTS")]
    pub strip_components: Option<usize>,

    /// Build command, split on whitespace (default: make)
    #[arg(long, global = true, value_name = "CMD", env = "REDIS_BOOTSTRAP_BUILD_CMD")]
    pub build_cmd: Option<String>,

    /// Keep the response body even when the server answers with an error status
    #[arg(long, global = true)]
    pub accept_error_status: bool,

    /// Wait for the launched server to exit instead of leaving it running
    #[arg(long, global = true)]
    pub wait: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Configuration values given on the command line or in the environment
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            url: self.url.clone(),
            download_path: self.archive.clone(),
            extract_dir: self.dest.clone(),
            strip_components: self.strip_components,
            build_command: self.build_cmd.clone(),
            launch_mode: self.wait.then_some(LaunchMode::Supervised),
            accept_error_status: self.accept_error_status,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run every stage: fetch, extract, build, launch (default)
    Run,

    /// Download the source tarball
    Fetch,

    /// Extract the downloaded tarball
    Extract,

    /// Run the build command in the extracted tree
    Build,

    /// Start the built server
    Launch,

    /// Print the effective configuration as YAML
    Config,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
