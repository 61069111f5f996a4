//! Definitions pass

use crate::model::{value_text, Definition, DefinitionEntry};
use crate::rst;

/// Render every definition as a sub-subsection with its fields and entries
pub fn render_definitions(definitions: &[Definition]) -> String {
    let mut lines = Vec::new();

    for definition in definitions {
        lines.push(rst::subsubtitle(&definition.name));
        for (key, value) in definition.generic_fields() {
            lines.push(rst::field(key, &rst::sanitize(&value_text(value)), 1));
        }

        // Field list needs to finish with a new line
        lines.push("\n".to_string());

        if let Some(entries) = &definition.entries {
            lines.push(rst::paragraph(&rst::bold("Entries"), 1));
            lines.push(render_entries(entries, 2));
        }
        if let Some(members) = &definition.members {
            lines.push(rst::paragraph(&rst::bold("members"), 1));
            lines.push(render_entries(members, 2));
        }
    }

    lines.join("\n")
}

/// Render an `entries`/`members` list, one line per item
pub fn render_entries(entries: &[DefinitionEntry], level: usize) -> String {
    let mut lines: Vec<String> = entries
        .iter()
        .map(|entry| match entry {
            DefinitionEntry::NamedDoc { name, doc } => rst::field(name, &rst::sanitize(doc), level),
            DefinitionEntry::InlineList(items) => rst::list_inline(items, level),
            DefinitionEntry::ScalarBullet(value) => {
                rst::bullet(&rst::inline(&rst::sanitize(value)), level)
            }
        })
        .collect();

    lines.push("\n".to_string());
    lines.join("\n")
}
