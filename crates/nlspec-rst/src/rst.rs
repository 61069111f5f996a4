//! reStructuredText formatting primitives
//!
//! Every function here is total and knows nothing about netlink: it takes
//! text plus an indentation level and returns a markup fragment. Fragments
//! carry no trailing newline, callers join them.
//!
//! Copyright (c) 2025 nlspec-rst contributors
//! Licensed under the Apache-2.0 license

/// Number of spaces per indentation level
pub const SPACE_PER_LEVEL: usize = 4;

/// Leading whitespace for the given nesting level
pub fn indent(level: usize) -> String {
    " ".repeat(level * SPACE_PER_LEVEL)
}

/// A definition list item: the key, then its value one level deeper
pub fn definition(key: &str, value: &str, level: usize) -> String {
    format!("{}{}\n{}{}", indent(level), key, indent(level + 1), value)
}

/// An indented paragraph
pub fn paragraph(text: &str, level: usize) -> String {
    format!("{}{}", indent(level), text)
}

/// A bullet list item
pub fn bullet(item: &str, level: usize) -> String {
    format!("{} - {}", indent(level), item)
}

/// A field list entry (`:key: value`)
pub fn field(key: &str, value: &str, level: usize) -> String {
    format!("{}:{}: {}", indent(level), key, value)
}

/// A section title underlined with `~`
pub fn subsubtitle(title: &str) -> String {
    format!("{}\n{}", title, underline('~', title))
}

/// A section title underlined with `-`, preceded by a blank line
pub fn subtitle(title: &str, level: usize) -> String {
    format!("{}\n{}\n{}", indent(level), title, underline('-', title))
}

/// The document title, overlined and underlined with `=`
pub fn title(title: &str) -> String {
    let rule = underline('=', title);
    format!("{}\n{}\n{}", rule, title, rule)
}

/// A bracketed, comma separated list of inline literals
pub fn list_inline<S: AsRef<str>>(items: &[S], level: usize) -> String {
    let items: Vec<String> = items.iter().map(|item| inline(item.as_ref())).collect();
    format!("{}[{}]", indent(level), items.join(", "))
}

/// Strong emphasis
pub fn bold(text: &str) -> String {
    format!("**{}**", text)
}

/// Inline literal
pub fn inline(text: &str) -> String {
    format!("``{}``", text)
}

/// Collapse free text onto a single line.
///
/// Newlines are removed outright (not replaced by spaces), then surrounding
/// whitespace is trimmed.
pub fn sanitize(text: &str) -> String {
    text.replace('\n', "").trim().to_string()
}

fn underline(marker: char, title: &str) -> String {
    std::iter::repeat(marker).take(title.chars().count()).collect()
}
