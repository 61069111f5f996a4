//! Attribute-sets pass

use crate::model::{value_text, Attribute, AttributeSet};
use crate::rst;

/// Render each set as a bullet with a nested bullet per attribute
pub fn render_attribute_sets(sets: &[AttributeSet]) -> String {
    let mut lines = Vec::new();

    for set in sets {
        lines.push(rst::bullet(&rst::bold(&set.name), 0));
        for attr in &set.attributes {
            lines.push(rst::bullet(&attribute_line(attr), 2));
            for (key, value) in attr.generic_fields() {
                lines.push(rst::field(key, &rst::sanitize(&value_text(value)), 3));
            }
            lines.push("\n".to_string());
        }
    }

    lines.join("\n")
}

/// Bold attribute name, with its type inline when it has one
fn attribute_line(attr: &Attribute) -> String {
    let name = rst::bold(&attr.name);
    match attr.attr_type.as_deref() {
        Some(attr_type) if !attr_type.is_empty() => {
            format!("{} ({})", name, rst::inline(attr_type))
        }
        _ => name,
    }
}
