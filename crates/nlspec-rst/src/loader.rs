//! Reading specification files into the typed model
//!
//! Copyright (c) 2025 nlspec-rst contributors
//! Licensed under the Apache-2.0 license

use crate::error::{DocError, DocResult};
use crate::model::Family;
use crate::walker;
use std::path::Path;
use tracing::debug;

/// Parse specification content; `path` is only used for error context
pub fn parse_str(content: &str, path: &Path) -> DocResult<Family> {
    serde_yaml::from_str(content).map_err(|e| DocError::yaml_parse(path, e))
}

/// Read and parse a specification file
pub fn load_file(path: &Path) -> DocResult<Family> {
    debug!("Parsing {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| DocError::io(path, e))?;
    parse_str(&content, path)
}

/// Transform the specification at `path` into a reStructuredText document
pub fn render_file(path: &Path) -> DocResult<String> {
    let family = load_file(path)?;
    Ok(walker::render_family(&family))
}
