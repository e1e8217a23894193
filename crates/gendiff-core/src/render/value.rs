use serde_json::Value as JsonValue;

use crate::Node;

/// Columns added per nesting level in block output.
pub const INDENT_WIDTH: usize = 4;

/// Marker replacing containers in one-line summaries.
pub const COMPLEX_VALUE: &str = "[complex value]";

/// Selects how [`render_value`] displays leaf values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueStyle {
    /// Multi-line bracketed containers, double-quoted strings.
    Block,
    /// Single line: containers collapse to `[complex value]`, strings are single-quoted.
    Summary,
}

/// Renders a value for display.
///
/// `depth` is the nesting depth of the key that owns the value. In
/// [`ValueStyle::Block`] the container entries are indented one level deeper
/// than that key and the closing bracket lines up with the key itself.
///
/// ```
/// # use gendiff_core::{render::{render_value, ValueStyle}, Node};
/// let value = Node::from_json_str("{\"key\":\"value\"}")?;
/// assert_eq!(render_value(&value, ValueStyle::Block, 1), "{\n        key: \"value\"\n    }");
/// assert_eq!(render_value(&value, ValueStyle::Summary, 1), "[complex value]");
/// # Ok::<(), gendiff_core::LoadError>(())
/// ```
#[must_use]
pub fn render_value(node: &Node, style: ValueStyle, depth: usize) -> String {
    match node {
        Node::Object(_) | Node::Array(_) if style == ValueStyle::Summary => {
            COMPLEX_VALUE.to_string()
        }
        Node::Object(map) => {
            if map.is_empty() {
                return "{}".to_string();
            }
            let indent = indent(depth + 1);
            let lines: Vec<String> = map
                .iter()
                .map(|(key, value)| format!("{indent}{key}: {}", render_value(value, style, depth + 1)))
                .collect();
            block('{', &lines, '}', depth)
        }
        Node::Array(items) => {
            if items.is_empty() {
                return "[]".to_string();
            }
            let indent = indent(depth + 1);
            let lines: Vec<String> = items
                .iter()
                .map(|item| format!("{indent}{}", render_value(item, style, depth + 1)))
                .collect();
            block('[', &lines, ']', depth)
        }
        Node::Bool(value) => value.to_string(),
        Node::Null => "null".to_string(),
        Node::String(text) => match style {
            ValueStyle::Block => JsonValue::String(text.clone()).to_string(),
            ValueStyle::Summary => format!("'{text}'"),
        },
        Node::Number(number) => number.to_string(),
    }
}

/// Returns the leading whitespace for a key at `depth`.
pub(crate) fn indent(depth: usize) -> String {
    " ".repeat(depth * INDENT_WIDTH)
}

fn block(open: char, lines: &[String], close: char, depth: usize) -> String {
    format!("{open}\n{}\n{}{close}", lines.join("\n"), indent(depth))
}
