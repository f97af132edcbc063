//! Shell completions command

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::CompletionsArgs;
use crate::error::{BootstrapError, Result};

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let shell = parse_shell(&args.shell)?;
    generate(shell, &mut std::io::stdout().lock());
    Ok(())
}

fn parse_shell(name: &str) -> Result<Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "elvish" => Ok(Shell::Elvish),
        "fish" => Ok(Shell::Fish),
        "powershell" | "pwsh" => Ok(Shell::PowerShell),
        "zsh" => Ok(Shell::Zsh),
        _ => Err(BootstrapError::InvalidCommand {
            message: format!(
                "unknown shell '{name}' (supported: bash, elvish, fish, powershell, zsh)"
            ),
        }),
    }
}

fn generate(shell: Shell, out: &mut dyn Write) {
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "redis-bootstrap", out);
}
