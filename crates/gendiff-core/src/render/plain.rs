use super::value::{render_value, ValueStyle};
use crate::{diff::PropertyPath, Change, DiffNode, Node};

/// Renders one sentence per added, removed or updated property.
///
/// Unchanged properties produce no output; nested mappings contribute their
/// key to the dotted path of their children.
///
/// ```
/// # use gendiff_core::{render::render_plain, Node};
/// let lhs = Node::from_json_str("{\"a\":{\"b\":1}}")?;
/// let rhs = Node::from_json_str("{\"a\":{\"b\":2}}")?;
/// let rendered = render_plain(&lhs.diff(&rhs).unwrap());
/// assert_eq!(rendered, "Property 'a.b' was updated. From 1 to 2");
/// # Ok::<(), gendiff_core::LoadError>(())
/// ```
#[must_use]
pub fn render_plain(tree: &[DiffNode]) -> String {
    let mut lines = Vec::new();
    push_sentences(tree, &PropertyPath::root(), &mut lines);
    lines.join("\n")
}

fn push_sentences(nodes: &[DiffNode], parent: &PropertyPath, lines: &mut Vec<String>) {
    for node in nodes {
        let path = parent.with_key(node.key.as_str());
        match &node.change {
            Change::Added { value } => {
                lines.push(format!("Property '{path}' was added with value: {}", summary(value)));
            }
            Change::Removed { .. } => {
                lines.push(format!("Property '{path}' was removed"));
            }
            Change::Changed { old_value, new_value } => {
                lines.push(format!(
                    "Property '{path}' was updated. From {} to {}",
                    summary(old_value),
                    summary(new_value)
                ));
            }
            Change::Unchanged { .. } => {}
            Change::Nested { children } => push_sentences(children, &path, lines),
        }
    }
}

fn summary(value: &Node) -> String {
    render_value(value, ValueStyle::Summary, 0)
}
