//! Configuration resolution for the CLI
//!
//! Directory settings come from, in order of precedence:
//! - Command-line arguments
//! - Environment variables (`NLSPEC_SPEC_DIR`, `NLSPEC_OUTPUT_DIR`)
//! - Defaults relative to the tool's own location in the kernel tree

use crate::cli::Cli;
use crate::error::{Error, Result};
use nlspec_rst::GeneratorConfig;
use std::path::{Component, Path, PathBuf};

/// Location of the .yaml specs, relative to the tool's path
pub const DEFAULT_SPEC_DIR: &str = "../../../../Documentation/netlink/specs";

/// Location of the generated .rst files, relative to the tool's path
pub const DEFAULT_OUTPUT_DIR: &str = "../../../../Documentation/networking/netlink_spec";

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the specifications
    pub spec_dir: PathBuf,

    /// Directory receiving the generated documents
    pub output_dir: PathBuf,
}

impl Config {
    /// Resolve configuration using the running executable as the tool path
    pub fn load(cli: &Cli) -> Result<Self> {
        let tool_path = std::env::current_exe()
            .map_err(|e| Error::config(format!("Cannot locate the running executable: {}", e)))?;
        Ok(Self::resolve(cli, &tool_path))
    }

    /// Resolve configuration against an explicit tool path
    pub fn resolve(cli: &Cli, tool_path: &Path) -> Self {
        Self {
            spec_dir: cli
                .spec_dir
                .clone()
                .unwrap_or_else(|| relative_to_tool(tool_path, DEFAULT_SPEC_DIR)),
            output_dir: cli
                .output_dir
                .clone()
                .unwrap_or_else(|| relative_to_tool(tool_path, DEFAULT_OUTPUT_DIR)),
        }
    }
}

impl From<Config> for GeneratorConfig {
    fn from(config: Config) -> Self {
        GeneratorConfig::new(config.spec_dir, config.output_dir)
    }
}

/// Join `relative` onto the tool path and fold `..` components lexically.
///
/// The tool path itself counts as a component, so the first `..` steps
/// out of the file name.
fn relative_to_tool(tool_path: &Path, relative: &str) -> PathBuf {
    normalize(&tool_path.join(relative))
}

fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !result.pop() {
                    result.push(component);
                }
            }
            other => result.push(other),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(spec_dir: Option<&str>, output_dir: Option<&str>) -> Cli {
        Cli {
            spec_dir: spec_dir.map(PathBuf::from),
            output_dir: output_dir.map(PathBuf::from),
            verbose: false,
        }
    }

    #[test]
    fn test_defaults_relative_to_tool() {
        let config = Config::resolve(&cli(None, None), Path::new("/src/linux/tools/net/ynl/nlspec-rst"));
        assert_eq!(config.spec_dir, PathBuf::from("/src/linux/Documentation/netlink/specs"));
        assert_eq!(
            config.output_dir,
            PathBuf::from("/src/linux/Documentation/networking/netlink_spec")
        );
    }

    #[test]
    fn test_explicit_dirs_win() {
        let config = Config::resolve(
            &cli(Some("specs"), Some("out")),
            Path::new("/src/linux/tools/net/ynl/nlspec-rst"),
        );
        assert_eq!(config.spec_dir, PathBuf::from("specs"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("/a/b/./c/../d")), PathBuf::from("/a/b/d"));
        assert_eq!(normalize(Path::new("a/../../b")), PathBuf::from("../b"));
    }

    #[test]
    fn test_into_generator_config() {
        let generator: GeneratorConfig = Config {
            spec_dir: PathBuf::from("specs"),
            output_dir: PathBuf::from("out"),
        }
        .into();
        assert_eq!(generator, GeneratorConfig::new("specs", "out"));
    }
}
