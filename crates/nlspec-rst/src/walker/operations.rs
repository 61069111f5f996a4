//! Operations pass

use crate::model::{value_text, Operation, OperationAction, OperationBlock};
use crate::rst;

/// Render every operation as a sub-subsection
pub fn render_operations(operations: &[Operation]) -> String {
    let mut lines = Vec::new();

    for operation in operations {
        lines.push(rst::subsubtitle(&operation.name));
        lines.push(rst::paragraph(&operation.doc, 0) + "\n");

        if let Some(block) = &operation.do_block {
            lines.push(rst::paragraph(&rst::bold("do"), 1));
            lines.push(render_operation_block(block, 1));
        }
        if let Some(block) = &operation.dump {
            lines.push(rst::paragraph(&rst::bold("dump"), 1));
            lines.push(render_operation_block(block, 1));
        }

        for (key, value) in operation.generic_fields() {
            lines.push(rst::field(key, &value_text(value), 1));
        }

        // blank line closes the field list
        lines.push("\n".to_string());
    }

    lines.join("\n")
}

/// Render a `do`/`dump` block as a bullet per action
pub fn render_operation_block(block: &OperationBlock, level: usize) -> String {
    let mut lines = Vec::new();

    for action in &block.actions {
        lines.push(rst::bullet(&rst::bold(&action.name), level + 1));
        lines.push(render_action_attributes(action, level + 1) + "\n");
    }

    lines.join("\n")
}

fn render_action_attributes(action: &OperationAction, level: usize) -> String {
    match &action.attributes {
        Some(attributes) => rst::field("attributes", &rst::list_inline(attributes, 0), level + 1),
        None => String::new(),
    }
}
