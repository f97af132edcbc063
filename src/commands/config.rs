//! `config` command: print the effective configuration

use crate::config::BootstrapConfig;
use crate::error::Result;

/// Print `config` as YAML on stdout
pub fn run(config: &BootstrapConfig) -> Result<()> {
    print!("{}", config.to_yaml()?);
    Ok(())
}
