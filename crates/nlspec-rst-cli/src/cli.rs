//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.

use clap::Parser;
use std::path::PathBuf;

/// Netlink RST generator
///
/// Converts every `.yaml` netlink family specification in the spec
/// directory into a reStructuredText document in the output directory.
#[derive(Parser, Debug)]
#[command(name = "nlspec-rst", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the netlink YAML specifications
    /// [default: <kernel tree>/Documentation/netlink/specs]
    #[arg(short, long = "spec-dir", value_name = "DIR", env = "NLSPEC_SPEC_DIR")]
    pub spec_dir: Option<PathBuf>,

    /// Directory receiving the generated .rst files
    /// [default: <kernel tree>/Documentation/networking/netlink_spec]
    #[arg(short, long = "output-dir", value_name = "DIR", env = "NLSPEC_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Enable debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["nlspec-rst", "-s", "specs", "-o", "out", "-v"]).unwrap();
        assert_eq!(cli.spec_dir, Some(PathBuf::from("specs")));
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::try_parse_from([
            "nlspec-rst",
            "--spec-dir",
            "specs",
            "--output-dir",
            "out",
        ])
        .unwrap();
        assert_eq!(cli.spec_dir, Some(PathBuf::from("specs")));
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["nlspec-rst", "--strict"]).is_err());
    }
}
