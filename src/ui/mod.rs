//! UI/Progress presentation layer
//!
//! This module handles:
//! - Status lines printed before and after each bootstrap stage
//! - Byte progress for the download using indicatif
//! - Silent progress for `--quiet`
//!
//! All progress reporting goes through the [`ProgressReporter`] trait so the
//! stages never print directly.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::pipeline::Stage;

/// Progress reporter trait for the bootstrap stages
pub trait ProgressReporter {
    /// Announce that `stage` is about to run
    fn stage_started(&mut self, stage: Stage, name: &str);

    /// Announce that `stage` completed successfully
    fn stage_finished(&mut self, stage: Stage, name: &str);

    /// Print an extra detail line for the current stage
    fn detail(&mut self, message: &str);

    /// Create a progress bar for a transfer of `total` bytes, or a spinner
    /// when the size is unknown
    fn transfer(&mut self, total: Option<u64>) -> ProgressBar;
}

/// Interactive progress reporter with status lines and progress bars
#[derive(Default)]
pub struct InteractiveProgressReporter;

impl InteractiveProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn stage_started(&mut self, stage: Stage, name: &str) {
        println!(
            "{}",
            Style::new().bold().cyan().apply_to(stage.started_message(name))
        );
    }

    fn stage_finished(&mut self, stage: Stage, name: &str) {
        println!(
            "{}",
            Style::new().green().apply_to(stage.finished_message(name))
        );
    }

    fn detail(&mut self, message: &str) {
        println!("  {}", Style::new().dim().apply_to(message));
    }

    fn transfer(&mut self, total: Option<u64>) -> ProgressBar {
        match total {
            Some(len) => {
                let pb = ProgressBar::new(len);
                if let Ok(style) = ProgressStyle::default_bar()
                    .template("  [{bar:40.cyan/blue}] {bytes}/{total_bytes} {bytes_per_sec}")
                {
                    pb.set_style(style.progress_chars("#>-"));
                }
                pb
            }
            None => {
                let pb = ProgressBar::new_spinner();
                if let Ok(style) =
                    ProgressStyle::default_spinner().template("  {spinner} {bytes} received")
                {
                    pb.set_style(
                        style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
                    );
                }
                pb.enable_steady_tick(std::time::Duration::from_millis(80));
                pb
            }
        }
    }
}

/// Silent progress reporter
///
/// No-op implementation that does not display anything.
/// Used when --quiet is specified and in tests.
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn stage_started(&mut self, _stage: Stage, _name: &str) {}

    fn stage_finished(&mut self, _stage: Stage, _name: &str) {}

    fn detail(&mut self, _message: &str) {}

    fn transfer(&mut self, _total: Option<u64>) -> ProgressBar {
        ProgressBar::hidden()
    }
}

/// Pick the reporter for the `--quiet` flag
pub fn reporter(quiet: bool) -> Box<dyn ProgressReporter> {
    if quiet {
        Box::new(SilentProgressReporter)
    } else {
        Box::new(InteractiveProgressReporter::new())
    }
}
