//! Bootstrap configuration
//!
//! Every stage reads its inputs from a [`BootstrapConfig`]. The defaults
//! reproduce the fixed Redis 6.2.6 setup; a YAML file and command line flags
//! can override individual fields, in that order.
//!
//! ```yaml
//! url: http://download.redis.io/releases/redis-6.2.6.tar.gz
//! download_path: /tmp/redis.tar.gz
//! extract_dir: /tmp/redis
//! strip_components: 1
//! build_command: make
//! executable: src/redis-server
//! launch_mode: detached
//! ```

pub mod paths;

use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{self, BootstrapError, Result};

/// Release fetched when no URL is configured
pub const DEFAULT_URL: &str = "http://download.redis.io/releases/redis-6.2.6.tar.gz";

/// Build command used when none is configured
pub const DEFAULT_BUILD_COMMAND: &str = "make";

/// Name shown in progress messages
pub const DEFAULT_NAME: &str = "Redis";

/// Full configuration for one bootstrap run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BootstrapConfig {
    /// Display name used in progress messages
    pub name: String,

    /// Source tarball to download
    pub url: Url,

    /// Where the downloaded archive is written
    pub download_path: PathBuf,

    /// Extraction root; also the build working directory
    pub extract_dir: PathBuf,

    /// Leading path components removed from every archive entry
    pub strip_components: usize,

    /// Command run inside the extraction root
    pub build_command: BuildCommand,

    /// Executable to launch, relative to the extraction root
    pub executable: PathBuf,

    /// Arguments passed to the launched executable
    pub launch_args: Vec<String>,

    pub launch_mode: LaunchMode,

    /// Write non-2xx response bodies to disk instead of failing the download
    pub accept_error_status: bool,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            url: default_url(),
            download_path: paths::download_path(),
            extract_dir: paths::extract_dir(),
            strip_components: 1,
            build_command: BuildCommand::new(DEFAULT_BUILD_COMMAND),
            executable: PathBuf::from(paths::EXECUTABLE),
            launch_args: Vec::new(),
            launch_mode: LaunchMode::Detached,
            accept_error_status: false,
        }
    }
}

impl BootstrapConfig {
    /// Resolve the effective configuration: defaults, then the optional
    /// YAML file, then command line overrides.
    pub fn resolve(config_file: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        overrides.apply(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| error::config::read_failed(path, e))?;
        Self::from_yaml(&content).map_err(|e| match e {
            BootstrapError::ConfigParseFailed { reason, .. } => {
                error::config::parse_failed(path, reason)
            }
            other => other,
        })
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Serialize configuration to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check the invariants the stages rely on
    pub fn validate(&self) -> Result<()> {
        ensure_http_scheme(&self.url)?;

        if self.name.trim().is_empty() {
            return Err(error::config::invalid("name must not be empty"));
        }

        let escapes = self.executable.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if escapes || self.executable.as_os_str().is_empty() {
            return Err(error::config::invalid(format!(
                "executable must be a relative path inside the extraction root, got '{}'",
                self.executable.display()
            )));
        }

        Ok(())
    }

    /// Absolute path of the executable launched after the build
    pub fn executable_path(&self) -> PathBuf {
        self.extract_dir.join(&self.executable)
    }
}

#[allow(clippy::expect_used)]
fn default_url() -> Url {
    Url::parse(DEFAULT_URL).expect("DEFAULT_URL is a valid URL")
}

fn ensure_http_scheme(url: &Url) -> Result<()> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(error::fetch::invalid_url(
            url.as_str(),
            format!("unsupported scheme '{other}'"),
        )),
    }
}

/// Values taken from the command line or environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub url: Option<String>,
    pub download_path: Option<PathBuf>,
    pub extract_dir: Option<PathBuf>,
    pub strip_components: Option<usize>,
    pub build_command: Option<String>,
    pub launch_mode: Option<LaunchMode>,
    pub accept_error_status: bool,
}

impl ConfigOverrides {
    fn apply(self, config: &mut BootstrapConfig) -> Result<()> {
        if let Some(raw) = self.url {
            config.url = Url::parse(&raw).map_err(|e| error::fetch::invalid_url(&raw, e))?;
        }
        if let Some(path) = self.download_path {
            config.download_path = path;
        }
        if let Some(dir) = self.extract_dir {
            config.extract_dir = dir;
        }
        if let Some(strip) = self.strip_components {
            config.strip_components = strip;
        }
        if let Some(command) = self.build_command {
            config.build_command = command.parse()?;
        }
        if let Some(mode) = self.launch_mode {
            config.launch_mode = mode;
        }
        if self.accept_error_status {
            config.accept_error_status = true;
        }
        Ok(())
    }
}

/// An external command: program plus arguments
///
/// Parsed from a whitespace separated string (`"make -j4"`). Quoting is not
/// supported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BuildCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl BuildCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl FromStr for BuildCommand {
    type Err = BootstrapError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| error::config::invalid("build command must not be empty"))?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl TryFrom<String> for BuildCommand {
    type Error = BootstrapError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<BuildCommand> for String {
    fn from(command: BuildCommand) -> Self {
        command.to_string()
    }
}

impl fmt::Display for BuildCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// How the launched executable relates to this process
///
/// `Detached` is fire-and-forget: the child is started and never waited on,
/// so it outlives the bootstrap run. `Supervised` blocks until it exits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchMode {
    #[default]
    Detached,
    Supervised,
}

impl fmt::Display for LaunchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchMode::Detached => f.write_str("detached"),
            LaunchMode::Supervised => f.write_str("supervised"),
        }
    }
}
