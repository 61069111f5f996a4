//! nlspec-rst - reStructuredText documentation for netlink specifications
//!
//! This crate turns netlink family specifications (YAML documents describing
//! a family's operations, multicast groups, definitions and attribute sets)
//! into reStructuredText documents for the kernel documentation tree.
//!
//! ## Layers
//!
//! - **[`rst`]**: stateless markup primitives (titles, bullets, field lists,
//!   inline literals)
//! - **[`model`]**: typed, read-only views over a parsed family
//! - **[`walker`]**: renders a family section by section in a fixed order
//! - **[`loader`]** and **[`generator`]**: file and directory plumbing
//!
//! ## Quick Start
//!
//! ```rust
//! use nlspec_rst::{parse_str, render_family};
//! use std::path::Path;
//!
//! let yaml = "name: foo\ndoc: bar\noperations:\n  list:\n    - name: op1\n      doc: d1\n";
//! let family = parse_str(yaml, Path::new("foo.yaml")).unwrap();
//! let rst = render_family(&family);
//!
//! assert!(rst.contains("Family ``foo`` netlink specification"));
//! ```
//!
//! Copyright (c) 2025 nlspec-rst contributors
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod generator;
pub mod loader;
pub mod model;
pub mod rst;
pub mod walker;

// Re-export commonly used types for convenience
pub use error::{DocError, DocResult};
pub use generator::{GeneratedDocument, GenerationReport, Generator, GeneratorConfig};
pub use loader::{load_file, parse_str, render_file};
pub use model::{
    Attribute, AttributeSet, Definition, DefinitionEntry, Family, McastGroup, Operation,
    OperationAction, OperationBlock,
};
pub use walker::render_family;
