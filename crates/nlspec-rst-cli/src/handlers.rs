//! Generation handler
//!
//! Runs the generator over the configured directories.

use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use nlspec_rst::{GenerationReport, Generator};
use tracing::{info, instrument};

/// Convert every specification in the configured spec directory
#[instrument(skip(config), fields(spec_dir = %config.spec_dir.display(), output_dir = %config.output_dir.display()))]
pub fn handle_generate(config: Config) -> Result<GenerationReport> {
    let _timer = Timer::new("generate");

    let generator = Generator::new(config.into());
    let report = generator.run()?;

    for document in &report.documents {
        info!(
            spec = %document.spec.display(),
            output = %document.output.display(),
            "Generated document"
        );
    }

    Ok(report)
}
