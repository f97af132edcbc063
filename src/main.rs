//! redis-bootstrap - Redis source release bootstrapper
//!
//! Downloads a source tarball, extracts it, builds it and starts the resulting
//! server, one stage after the other.

use clap::Parser;
use miette::Diagnostic;

mod builder;
mod cli;
mod commands;
mod common;
mod config;
mod error;
mod extract;
mod fetch;
mod launch;
mod logging;
mod pipeline;
mod ui;

use cli::{Cli, Commands};
use config::BootstrapConfig;
use error::{BootstrapError, Result};
use pipeline::Stage;

fn execute(cli: Cli) -> Result<()> {
    let overrides = cli.overrides();

    let stage = match cli.command {
        // These never run a stage
        Some(Commands::Version) => return commands::version::run(),
        Some(Commands::Completions(args)) => return commands::completions::run(args),
        Some(Commands::Config) => {
            let config = BootstrapConfig::resolve(cli.config.as_deref(), overrides)?;
            return commands::config::run(&config);
        }
        None | Some(Commands::Run) => None,
        Some(Commands::Fetch) => Some(Stage::Fetch),
        Some(Commands::Extract) => Some(Stage::Extract),
        Some(Commands::Build) => Some(Stage::Build),
        Some(Commands::Launch) => Some(Stage::Launch),
    };

    let config = BootstrapConfig::resolve(cli.config.as_deref(), overrides)?;
    tracing::debug!(?config, "configuration resolved");

    let mut reporter = ui::reporter(cli.quiet);
    match stage {
        None => commands::run::run(&config, reporter.as_mut()),
        Some(stage) => commands::stage::run(stage, &config, reporter.as_mut()),
    }
}

fn report(err: &BootstrapError) {
    eprintln!("Error: {err}");
    if let Some(help) = err.help() {
        eprintln!("  help: {help}");
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    if let Err(e) = execute(cli) {
        report(&e);
        std::process::exit(1);
    }
}
