//! Error types for loading, rendering and writing specification documents
//!
//! Copyright (c) 2025 nlspec-rst contributors
//! Licensed under the Apache-2.0 license

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for document operations
pub type DocResult<T> = Result<T, DocError>;

/// Failures that abort processing of a specification document
#[derive(Error, Debug)]
pub enum DocError {
    /// File or directory I/O errors
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML syntax errors and documents missing a required key
    #[error("Failed to parse YAML file '{path}': {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// The spec directory exists but is something else
    #[error("'{path}' is not a directory")]
    NotADirectory { path: PathBuf },
}

impl DocError {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source: error,
        }
    }

    /// Create a YAML parsing error with path context
    pub fn yaml_parse(path: impl Into<PathBuf>, error: serde_yaml::Error) -> Self {
        Self::YamlParse {
            path: path.into(),
            source: error,
        }
    }

    /// Create a not-a-directory error
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    /// Get the path associated with this error
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::YamlParse { path, .. } | Self::NotADirectory { path } => {
                path
            }
        }
    }
}
