//! Batch generation of a directory of specifications
//!
//! Copyright (c) 2025 nlspec-rst contributors
//! Licensed under the Apache-2.0 license

use crate::error::{DocError, DocResult};
use crate::loader;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Extension of specification files picked up from the spec directory
pub const SPEC_EXTENSION: &str = "yaml";

/// Extension given to generated documents
pub const OUTPUT_EXTENSION: &str = "rst";

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory holding the `.yaml` specifications
    pub spec_dir: PathBuf,
    /// Directory receiving the `.rst` documents
    pub output_dir: PathBuf,
}

impl GeneratorConfig {
    pub fn new(spec_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            spec_dir: spec_dir.into(),
            output_dir: output_dir.into(),
        }
    }
}

/// A document produced by a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub spec: PathBuf,
    pub output: PathBuf,
}

/// Outcome of a successful run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub documents: Vec<GeneratedDocument>,
}

impl GenerationReport {
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Converts every specification in a directory, one document at a time
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// List specification files, sorted by file name.
    ///
    /// Only regular files whose extension is exactly `yaml` are returned.
    pub fn discover(&self) -> DocResult<Vec<PathBuf>> {
        let spec_dir = &self.config.spec_dir;
        debug!("spec path = {}", spec_dir.display());

        if spec_dir.exists() && !spec_dir.is_dir() {
            return Err(DocError::not_a_directory(spec_dir));
        }

        let mut specs = Vec::new();
        for entry in fs::read_dir(spec_dir).map_err(|e| DocError::io(spec_dir, e))? {
            let path = entry.map_err(|e| DocError::io(spec_dir, e))?.path();
            if path.is_file() && has_spec_extension(&path) {
                specs.push(path);
            }
        }
        specs.sort();

        Ok(specs)
    }

    /// Output path for a specification: same stem, `.rst` extension
    pub fn output_path(&self, spec: &Path) -> PathBuf {
        let file_name = spec.file_name().map(PathBuf::from).unwrap_or_default();
        self.config
            .output_dir
            .join(file_name)
            .with_extension(OUTPUT_EXTENSION)
    }

    /// Convert every discovered specification.
    ///
    /// The first failure aborts the run; documents already written stay
    /// on disk.
    pub fn run(&self) -> DocResult<GenerationReport> {
        let specs = self.discover()?;

        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir).map_err(|e| DocError::io(output_dir, e))?;

        let mut report = GenerationReport::default();
        for spec in specs {
            let output = self.process_spec(&spec)?;
            report.documents.push(GeneratedDocument { spec, output });
        }

        info!(documents = report.len(), "Generation complete");
        Ok(report)
    }

    #[instrument(skip_all, fields(spec = %spec.display()))]
    fn process_spec(&self, spec: &Path) -> DocResult<PathBuf> {
        let content = loader::render_file(spec)?;
        let output = self.output_path(spec);
        write_document(&content, &output)?;
        Ok(output)
    }
}

/// Write a generated document in a single call
pub fn write_document(content: &str, path: &Path) -> DocResult<()> {
    debug!("Saving RST file to {}", path.display());
    fs::write(path, content).map_err(|e| DocError::io(path, e))
}

fn has_spec_extension(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(SPEC_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path() {
        let generator = Generator::new(GeneratorConfig::new("specs", "out"));
        assert_eq!(
            generator.output_path(Path::new("specs/netdev.yaml")),
            PathBuf::from("out/netdev.rst")
        );
        assert_eq!(
            generator.output_path(Path::new("specs/rt-link.yaml")),
            PathBuf::from("out/rt-link.rst")
        );
    }

    #[test]
    fn test_spec_extension() {
        assert!(has_spec_extension(Path::new("a/netdev.yaml")));
        assert!(!has_spec_extension(Path::new("a/netdev.yml")));
        assert!(!has_spec_extension(Path::new("a/README")));
        assert!(!has_spec_extension(Path::new("a/netdev.yaml.orig")));
    }

    #[test]
    fn test_missing_spec_dir() {
        let generator = Generator::new(GeneratorConfig::new("/nonexistent/specs", "/tmp/out"));
        assert!(matches!(generator.discover(), Err(DocError::Io { .. })));
    }
}
