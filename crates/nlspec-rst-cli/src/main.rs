//! nlspec-rst CLI - reStructuredText generator for netlink specifications
//!
//! Reads every `.yaml` family specification in the spec directory and
//! writes one `.rst` document per file to the output directory.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;

use cli::Cli;
use config::Config;
use error::Result;
use is_terminal::IsTerminal;
use logging::LoggingConfig;
use std::process;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Initialize logging
    if let Err(e) = init_logging(&cli) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(&cli) {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("{}", error::format_error(&e, std::io::stderr().is_terminal()));
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(cli)?;
    tracing::debug!(
        spec_dir = %config.spec_dir.display(),
        output_dir = %config.output_dir.display(),
        "Resolved configuration"
    );

    handlers::handle_generate(config)?;
    Ok(())
}

/// Initialize the logging system
fn init_logging(cli: &Cli) -> Result<()> {
    let mut logging_config = LoggingConfig::from_verbose(cli.verbose);
    logging_config.merge_with_env();
    logging::init_logging(logging_config)
}
