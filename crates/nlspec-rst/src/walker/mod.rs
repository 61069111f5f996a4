//! Rendering a family specification into one reStructuredText document
//!
//! Sections are always emitted in the same order: header, operations,
//! multicast groups, definitions, attribute sets. Optional sections are
//! skipped when the family lacks them. Each pass returns its fragments
//! joined with newlines and the caller joins the passes the same way.
//!
//! Copyright (c) 2025 nlspec-rst contributors
//! Licensed under the Apache-2.0 license

mod attribute_sets;
mod definitions;
mod operations;

pub use attribute_sets::render_attribute_sets;
pub use definitions::{render_definitions, render_entries};
pub use operations::{render_operation_block, render_operations};

use crate::model::{Family, McastGroup};
use crate::rst;

/// License stamp placed on the first line of every generated document
pub const SPDX_STAMP: &str = ".. SPDX-License-Identifier: GPL-2.0";

/// Render a whole family document
pub fn render_family(family: &Family) -> String {
    let mut lines = render_header(family);

    lines.push(rst::subtitle("Operations", 0));
    lines.push(render_operations(&family.operations.list));

    if let Some(groups) = &family.mcast_groups {
        lines.push(rst::subtitle("Multicast groups", 0));
        lines.push(render_mcast_groups(&groups.list));
    }

    if let Some(definitions) = &family.definitions {
        lines.push(rst::subtitle("Definitions", 0));
        lines.push(render_definitions(definitions));
    }

    if let Some(sets) = &family.attribute_sets {
        lines.push(rst::subtitle("Attribute sets", 0));
        lines.push(render_attribute_sets(sets));
    }

    lines.join("\n")
}

/// Document title
pub fn family_title(name: &str) -> String {
    format!("Family ``{}`` netlink specification", name)
}

fn render_header(family: &Family) -> Vec<String> {
    vec![
        rst::paragraph(SPDX_STAMP, 0),
        rst::title(&family_title(&family.name)),
        rst::paragraph("\n.. contents::\n", 0),
        rst::subtitle("Summary", 0),
        rst::paragraph(&family.doc, 1),
    ]
}

/// Multicast groups are listed by name only
pub fn render_mcast_groups(groups: &[McastGroup]) -> String {
    groups
        .iter()
        .map(|group| rst::paragraph(&group.name, 1))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_str;
    use std::path::Path;

    fn family(yaml: &str) -> Family {
        parse_str(yaml, Path::new("test.yaml")).unwrap()
    }

    const MINIMAL: &str = "name: foo\ndoc: bar\noperations:\n  list:\n    - name: op1\n      doc: d1\n";

    #[test]
    fn test_minimal_document() {
        let expected = concat!(
            ".. SPDX-License-Identifier: GPL-2.0\n",
            "====================================\n",
            "Family ``foo`` netlink specification\n",
            "====================================\n",
            "\n",
            ".. contents::\n",
            "\n",
            "\n",
            "Summary\n",
            "-------\n",
            "    bar\n",
            "\n",
            "Operations\n",
            "----------\n",
            "op1\n",
            "~~~\n",
            "d1\n",
            "\n",
            "\n",
        );

        assert_eq!(render_family(&family(MINIMAL)), expected);
    }

    #[test]
    fn test_optional_sections_are_skipped() {
        let output = render_family(&family(MINIMAL));
        assert!(!output.contains("Multicast groups"));
        assert!(!output.contains("Definitions"));
        assert!(!output.contains("Attribute sets"));
    }

    #[test]
    fn test_section_order() {
        let output = render_family(&family(concat!(
            "name: foo\n",
            "doc: bar\n",
            "attribute-sets:\n",
            "  - name: set1\n",
            "    attributes: []\n",
            "definitions:\n",
            "  - name: def1\n",
            "mcast-groups:\n",
            "  list:\n",
            "    - name: monitor\n",
            "operations:\n",
            "  list: []\n",
        )));

        let positions: Vec<usize> = ["\nOperations\n", "\nMulticast groups\n", "\nDefinitions\n", "\nAttribute sets\n"]
            .iter()
            .map(|section| output.find(section).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_mcast_groups_render_names_only() {
        let output = render_family(&family(concat!(
            "name: foo\n",
            "doc: bar\n",
            "operations:\n",
            "  list: []\n",
            "mcast-groups:\n",
            "  list:\n",
            "    - name: mgmt\n",
            "      flags: [admin-perm]\n",
            "    - name: monitor\n",
        )));

        assert!(output.ends_with("\nMulticast groups\n----------------\n    mgmt\n    monitor"));
        assert!(!output.contains("admin-perm"));
    }
}
