//! Typed views over a parsed netlink family specification
//!
//! Each entity keeps the keys the walker renders specially as struct fields
//! and carries every other key, in source order, in an extension map. The
//! walker renders extension keys as generic fields, skipping the entity's
//! exclusion set.
//!
//! Copyright (c) 2025 nlspec-rst contributors
//! Licensed under the Apache-2.0 license

use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::Value;

/// Keys of an entity not covered by its known fields, in document order
pub type ExtensionFields = IndexMap<String, Value>;

/// Root of a specification document
#[derive(Debug, Clone, Deserialize)]
pub struct Family {
    pub name: String,
    pub doc: String,
    pub operations: Operations,
    #[serde(rename = "mcast-groups")]
    pub mcast_groups: Option<McastGroups>,
    pub definitions: Option<Vec<Definition>>,
    #[serde(rename = "attribute-sets")]
    pub attribute_sets: Option<Vec<AttributeSet>>,
}

/// The `operations` section
#[derive(Debug, Clone, Deserialize)]
pub struct Operations {
    pub list: Vec<Operation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Operation {
    pub name: String,
    pub doc: String,
    #[serde(rename = "do")]
    pub do_block: Option<OperationBlock>,
    pub dump: Option<OperationBlock>,
    #[serde(flatten)]
    pub extra: ExtensionFields,
}

impl Operation {
    /// Keys rendered by the operations pass itself
    pub const EXCLUDED_FIELDS: &'static [&'static str] = &["name", "doc", "title", "do", "dump"];

    /// Extension fields rendered as generic field list entries
    pub fn generic_fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        filter_fields(&self.extra, Self::EXCLUDED_FIELDS)
    }
}

/// A `do` or `dump` block: action name to action body, in document order
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "IndexMap<String, Value>")]
pub struct OperationBlock {
    pub actions: Vec<OperationAction>,
}

/// One action of an operation block (`request`, `reply`, `pre`, ...)
#[derive(Debug, Clone, PartialEq)]
pub struct OperationAction {
    pub name: String,
    /// Attribute names, when the body is a mapping carrying `attributes`
    pub attributes: Option<Vec<String>>,
}

impl From<IndexMap<String, Value>> for OperationBlock {
    fn from(raw: IndexMap<String, Value>) -> Self {
        let actions = raw
            .into_iter()
            .map(|(name, body)| OperationAction {
                name,
                attributes: body.get("attributes").map(text_items),
            })
            .collect();
        Self { actions }
    }
}

/// The `mcast-groups` section
#[derive(Debug, Clone, Deserialize)]
pub struct McastGroups {
    pub list: Vec<McastGroup>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct McastGroup {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Definition {
    pub name: String,
    pub entries: Option<Vec<DefinitionEntry>>,
    pub members: Option<Vec<DefinitionEntry>>,
    #[serde(flatten)]
    pub extra: ExtensionFields,
}

impl Definition {
    /// Keys rendered by the definitions pass itself, plus `render-max`
    /// which is never shown
    pub const EXCLUDED_FIELDS: &'static [&'static str] =
        &["name", "entries", "members", "render-max"];

    pub fn generic_fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        filter_fields(&self.extra, Self::EXCLUDED_FIELDS)
    }
}

/// An item of a definition's `entries` or `members`, classified by shape
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum DefinitionEntry {
    /// A mapping; only its `name` and `doc` are shown
    NamedDoc { name: String, doc: String },
    /// A sequence, shown as an inline list
    InlineList(Vec<String>),
    /// Any other scalar
    ScalarBullet(String),
}

impl From<Value> for DefinitionEntry {
    fn from(value: Value) -> Self {
        match value {
            Value::Mapping(map) => Self::NamedDoc {
                name: map.get("name").map(value_text).unwrap_or_default(),
                doc: map.get("doc").map(value_text).unwrap_or_default(),
            },
            Value::Sequence(items) => Self::InlineList(items.iter().map(value_text).collect()),
            Value::Tagged(tagged) => Self::from(tagged.value),
            other => Self::ScalarBullet(value_text(&other)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttributeSet {
    pub name: String,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type")]
    pub attr_type: Option<String>,
    #[serde(flatten)]
    pub extra: ExtensionFields,
}

impl Attribute {
    /// Keys rendered on the attribute's bullet line, plus `checks` which is
    /// never shown
    pub const EXCLUDED_FIELDS: &'static [&'static str] = &["name", "type", "checks"];

    pub fn generic_fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        filter_fields(&self.extra, Self::EXCLUDED_FIELDS)
    }
}

fn filter_fields<'a>(
    fields: &'a ExtensionFields,
    excluded: &'static [&'static str],
) -> impl Iterator<Item = (&'a str, &'a Value)> {
    fields
        .iter()
        .filter(move |(key, _)| !excluded.contains(&key.as_str()))
        .map(|(key, value)| (key.as_str(), value))
}

/// Text form of a YAML value.
///
/// Strings are verbatim, null is empty, sequences and mappings use a
/// compact flow style (`[a, b]`, `{k: v}`).
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => {
            let items: Vec<String> = items.iter().map(value_text).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(map) => {
            let pairs: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", value_text(k), value_text(v)))
                .collect();
            format!("{{{}}}", pairs.join(", "))
        }
        Value::Tagged(tagged) => value_text(&tagged.value),
    }
}

fn text_items(value: &Value) -> Vec<String> {
    match value {
        Value::Sequence(items) => items.iter().map(value_text).collect(),
        other => vec![value_text(other)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(yaml: &str) -> DefinitionEntry {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_entry_classification() {
        assert_eq!(
            entry("{name: x, doc: \"y\\nz\"}"),
            DefinitionEntry::NamedDoc {
                name: "x".to_string(),
                doc: "y\nz".to_string(),
            }
        );
        assert_eq!(
            entry("[1, 2]"),
            DefinitionEntry::InlineList(vec!["1".to_string(), "2".to_string()])
        );
        assert_eq!(entry("v"), DefinitionEntry::ScalarBullet("v".to_string()));
        assert_eq!(entry("42"), DefinitionEntry::ScalarBullet("42".to_string()));
    }

    #[test]
    fn test_named_entry_without_doc() {
        assert_eq!(
            entry("{name: unspec}"),
            DefinitionEntry::NamedDoc {
                name: "unspec".to_string(),
                doc: String::new(),
            }
        );
    }

    #[test]
    fn test_operation_block_actions() {
        let block: OperationBlock = serde_yaml::from_str(
            "request:\n  attributes: [ifindex, name]\nreply:\n  value: 3\npre: dev-lock\n",
        )
        .unwrap();

        assert_eq!(block.actions.len(), 3);
        assert_eq!(block.actions[0].name, "request");
        assert_eq!(
            block.actions[0].attributes,
            Some(vec!["ifindex".to_string(), "name".to_string()])
        );
        assert_eq!(block.actions[1].name, "reply");
        assert_eq!(block.actions[1].attributes, None);
        assert_eq!(block.actions[2].name, "pre");
        assert_eq!(block.actions[2].attributes, None);
    }

    #[test]
    fn test_extension_fields_keep_order_and_skip_exclusions() {
        let op: Operation = serde_yaml::from_str(
            "name: get\ndoc: Get things\ntitle: hidden\nvalue: 3\nattribute-set: dev\n",
        )
        .unwrap();

        let fields: Vec<&str> = op.generic_fields().map(|(k, _)| k).collect();
        assert_eq!(fields, vec!["value", "attribute-set"]);
    }

    #[test]
    fn test_definition_suppresses_render_max() {
        let def: Definition =
            serde_yaml::from_str("name: state\ntype: enum\nrender-max: 10\nentries: [a, b]\n")
                .unwrap();

        let fields: Vec<&str> = def.generic_fields().map(|(k, _)| k).collect();
        assert_eq!(fields, vec!["type"]);
        assert_eq!(def.entries.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_attribute_type_and_checks() {
        let attr: Attribute =
            serde_yaml::from_str("name: mtu\ntype: u32\nchecks: {min: 68}\ndoc: MTU\n").unwrap();

        assert_eq!(attr.attr_type.as_deref(), Some("u32"));
        let fields: Vec<&str> = attr.generic_fields().map(|(k, _)| k).collect();
        assert_eq!(fields, vec!["doc"]);
    }

    #[test]
    fn test_value_text() {
        let value: Value = serde_yaml::from_str("[1, true, ~, {a: b}]").unwrap();
        assert_eq!(value_text(&value), "[1, true, , {a: b}]");
    }

    #[test]
    fn test_missing_operations_is_an_error() {
        let result = serde_yaml::from_str::<Family>("name: foo\ndoc: bar\n");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("operations"));
    }
}
