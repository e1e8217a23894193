use super::value::{indent, render_value, ValueStyle, INDENT_WIDTH};
use crate::{Change, DiffNode};

/// Renders the tree as a bracketed block with `+`/`-` markers.
///
/// ```
/// # use gendiff_core::{render::render_stylish, Node};
/// let lhs = Node::from_json_str("{\"a\":1,\"b\":true}")?;
/// let rhs = Node::from_json_str("{\"a\":2,\"b\":true}")?;
/// let rendered = render_stylish(&lhs.diff(&rhs).unwrap());
/// assert_eq!(rendered, "{\n  - a: 1\n  + a: 2\n    b: true\n}");
/// # Ok::<(), gendiff_core::LoadError>(())
/// ```
#[must_use]
pub fn render_stylish(tree: &[DiffNode]) -> String {
    let mut lines = vec!["{".to_string()];
    push_nodes(tree, 1, &mut lines);
    lines.push("}".to_string());
    lines.join("\n")
}

fn push_nodes(nodes: &[DiffNode], depth: usize, lines: &mut Vec<String>) {
    // Markers occupy the last two columns of the indent unit.
    let prefix = " ".repeat(depth * INDENT_WIDTH - 2);
    for node in nodes {
        let key = &node.key;
        match &node.change {
            Change::Added { value } => {
                lines.push(format!("{prefix}+ {key}: {}", block(value, depth)));
            }
            Change::Removed { value } => {
                lines.push(format!("{prefix}- {key}: {}", block(value, depth)));
            }
            Change::Changed { old_value, new_value } => {
                lines.push(format!("{prefix}- {key}: {}", block(old_value, depth)));
                lines.push(format!("{prefix}+ {key}: {}", block(new_value, depth)));
            }
            Change::Unchanged { value } => {
                lines.push(format!("{prefix}  {key}: {}", block(value, depth)));
            }
            Change::Nested { children } => {
                lines.push(format!("{prefix}  {key}: {{"));
                push_nodes(children, depth + 1, lines);
                lines.push(format!("{}}}", indent(depth)));
            }
        }
    }
}

fn block(value: &crate::Node, depth: usize) -> String {
    render_value(value, ValueStyle::Block, depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Node;

    fn diff(lhs: &str, rhs: &str) -> Vec<DiffNode> {
        let lhs = Node::from_json_str(lhs).unwrap();
        let rhs = Node::from_json_str(rhs).unwrap();
        lhs.diff(&rhs).unwrap()
    }

    #[test]
    fn empty_tree_renders_bare_brackets() {
        assert_eq!(render_stylish(&[]), "{\n}");
    }

    #[test]
    fn flat_scenario_matches_expected_layout() {
        let tree = diff(
            r#"{"age":17,"best_friend":"Ron","faculty":"Griffindor","name":"harry","school":"hogwards"}"#,
            r#"{"age":17,"best_friend":"books","faculty":"Griffindor","hobby":"help house elfs","name":"hermione","school":"hogwards"}"#,
        );
        let expected = [
            "{",
            "    age: 17",
            "  - best_friend: \"Ron\"",
            "  + best_friend: \"books\"",
            "    faculty: \"Griffindor\"",
            "  + hobby: \"help house elfs\"",
            "  - name: \"harry\"",
            "  + name: \"hermione\"",
            "    school: \"hogwards\"",
            "}",
        ]
        .join("\n");
        assert_eq!(render_stylish(&tree), expected);
    }

    #[test]
    fn nested_children_close_at_key_indent() {
        let tree = diff(r#"{"a":{"b":{"c":1}}}"#, r#"{"a":{"b":{"c":2},"d":{"e":null}}}"#);
        let expected = [
            "{",
            "    a: {",
            "        b: {",
            "          - c: 1",
            "          + c: 2",
            "        }",
            "      + d: {",
            "            e: null",
            "        }",
            "    }",
            "}",
        ]
        .join("\n");
        assert_eq!(render_stylish(&tree), expected);
    }

    #[test]
    fn large_integers_print_exactly() {
        let tree = diff(r#"{"id":9007199254740992}"#, r#"{"id":9007199254740993}"#);
        let expected = "{\n  - id: 9007199254740992\n  + id: 9007199254740993\n}";
        assert_eq!(render_stylish(&tree), expected);
    }

    #[test]
    fn nested_with_no_children_still_closes() {
        let tree = diff(r#"{"a":{}}"#, r#"{"a":{}}"#);
        assert_eq!(render_stylish(&tree), "{\n    a: {\n    }\n}");
    }
}
