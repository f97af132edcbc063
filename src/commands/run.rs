//! Full bootstrap: fetch, extract, build, launch

use crate::config::BootstrapConfig;
use crate::error::Result;
use crate::pipeline::Pipeline;
use crate::ui::ProgressReporter;

/// Run all stages in order, stopping at the first failure
pub fn run(config: &BootstrapConfig, reporter: &mut dyn ProgressReporter) -> Result<()> {
    let report = Pipeline::new(config, reporter).run()?;
    tracing::debug!(?report, "bootstrap finished");
    Ok(())
}
