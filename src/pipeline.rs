//! The four bootstrap stages and their fail-fast sequencing
//!
//! Fetch → Extract → Build → Launch. Each stage reads its paths from the
//! [`BootstrapConfig`] and assumes the previous stage left its artifact there.
//! The first failing stage ends the run; nothing is rolled back.

use crate::builder::{self, BuildOutcome};
use crate::config::BootstrapConfig;
use crate::error::Result;
use crate::extract::{self, ExtractSummary};
use crate::fetch::{FetchOutcome, Fetcher};
use crate::launch::{self, LaunchOutcome};
use crate::ui::ProgressReporter;

/// One step of the bootstrap sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Extract,
    Build,
    Launch,
}

impl Stage {
    /// Line printed before the stage runs
    pub fn started_message(self, name: &str) -> String {
        match self {
            Stage::Fetch => format!("Downloading {name}..."),
            Stage::Extract => format!("Extracting {name}..."),
            Stage::Build => format!("Building {name}..."),
            Stage::Launch => format!("Starting {name} server..."),
        }
    }

    /// Line printed after the stage succeeded
    pub fn finished_message(self, name: &str) -> String {
        match self {
            Stage::Fetch => "Download completed.".to_string(),
            Stage::Extract => "Extraction completed.".to_string(),
            Stage::Build => "Build completed.".to_string(),
            Stage::Launch => format!("{name} server started."),
        }
    }
}

/// Outcome of a full run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub fetch: FetchOutcome,
    pub extract: ExtractSummary,
    pub build: BuildOutcome,
    pub launch: LaunchOutcome,
}

/// Runs bootstrap stages against one configuration
pub struct Pipeline<'a> {
    config: &'a BootstrapConfig,
    reporter: &'a mut dyn ProgressReporter,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a BootstrapConfig, reporter: &'a mut dyn ProgressReporter) -> Self {
        Self { config, reporter }
    }

    /// Run all four stages in order, stopping at the first failure
    pub fn run(&mut self) -> Result<RunReport> {
        let fetch = self.fetch()?;
        let extract = self.extract()?;
        let build = self.build()?;
        let launch = self.launch()?;
        Ok(RunReport {
            fetch,
            extract,
            build,
            launch,
        })
    }

    pub fn fetch(&mut self) -> Result<FetchOutcome> {
        self.begin(Stage::Fetch);
        let fetcher = Fetcher::new(self.config.accept_error_status)?;
        let outcome = fetcher.fetch(
            &self.config.url,
            &self.config.download_path,
            &mut *self.reporter,
        )?;
        self.reporter.detail(&format!(
            "{} bytes written to {}",
            outcome.bytes,
            outcome.path.display()
        ));
        self.finish(Stage::Fetch);
        Ok(outcome)
    }

    pub fn extract(&mut self) -> Result<ExtractSummary> {
        self.begin(Stage::Extract);
        let summary = extract::extract(
            &self.config.download_path,
            &self.config.extract_dir,
            self.config.strip_components,
        )?;
        self.reporter.detail(&format!(
            "{} files, {} directories into {}",
            summary.files,
            summary.directories,
            self.config.extract_dir.display()
        ));
        if summary.skipped > 0 {
            self.reporter
                .detail(&format!("{} unsupported entries skipped", summary.skipped));
        }
        if summary.stripped > 0 {
            self.reporter.detail(&format!(
                "{} top-level directories stripped",
                summary.stripped
            ));
        }
        self.finish(Stage::Extract);
        Ok(summary)
    }

    pub fn build(&mut self) -> Result<BuildOutcome> {
        self.begin(Stage::Build);
        let outcome = builder::build(&self.config.build_command, &self.config.extract_dir)?;
        self.finish(Stage::Build);
        Ok(outcome)
    }

    pub fn launch(&mut self) -> Result<LaunchOutcome> {
        self.begin(Stage::Launch);
        let outcome = launch::launch(
            &self.config.executable_path(),
            &self.config.launch_args,
            self.config.launch_mode,
        )?;
        match outcome {
            LaunchOutcome::Detached { pid } => self.reporter.detail(&format!("pid {pid}")),
            LaunchOutcome::Exited { status } => self.reporter.detail(&format!("{status}")),
        }
        self.finish(Stage::Launch);
        Ok(outcome)
    }

    fn begin(&mut self, stage: Stage) {
        tracing::info!(?stage, "stage started");
        self.reporter.stage_started(stage, &self.config.name);
    }

    fn finish(&mut self, stage: Stage) {
        tracing::info!(?stage, "stage finished");
        self.reporter.stage_finished(stage, &self.config.name);
    }
}
