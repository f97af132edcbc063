//! Single-stage commands (`fetch`, `extract`, `build`, `launch`)
//!
//! Each reads the artifact the previous stage left at its configured path,
//! so a failed run can be resumed from the stage that failed.

use crate::config::BootstrapConfig;
use crate::error::Result;
use crate::pipeline::{Pipeline, Stage};
use crate::ui::ProgressReporter;

pub fn run(stage: Stage, config: &BootstrapConfig, reporter: &mut dyn ProgressReporter) -> Result<()> {
    let mut pipeline = Pipeline::new(config, reporter);
    match stage {
        Stage::Fetch => pipeline.fetch().map(drop),
        Stage::Extract => pipeline.extract().map(drop),
        Stage::Build => pipeline.build().map(drop),
        Stage::Launch => pipeline.launch().map(drop),
    }
}
