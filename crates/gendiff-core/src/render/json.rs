use crate::{DiffError, DiffNode};

/// Serializes the tree as pretty-printed JSON.
///
/// Every node keeps its key, status and status-specific payload, in tree
/// order, so the output decodes back into an equal tree.
///
/// ```
/// # use gendiff_core::{render::render_json, DiffNode, Node};
/// let lhs = Node::from_json_str("{\"a\":1}")?;
/// let rhs = Node::from_json_str("{\"a\":2}")?;
/// let tree = lhs.diff(&rhs).unwrap();
/// let rendered = render_json(&tree)?;
/// let decoded: Vec<DiffNode> = serde_json::from_str(&rendered)?;
/// assert_eq!(decoded, tree);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_json(tree: &[DiffNode]) -> Result<String, DiffError> {
    Ok(serde_json::to_string_pretty(tree)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Node;
    use serde_json::{json, Value};

    #[test]
    fn empty_tree_renders_empty_array() {
        assert_eq!(render_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn changed_entry_exposes_old_and_new_values() {
        let lhs = Node::from_json_str(r#"{"best_friend":"Ron","age":17}"#).unwrap();
        let rhs = Node::from_json_str(r#"{"best_friend":"books","age":17}"#).unwrap();
        let rendered = render_json(&lhs.diff(&rhs).unwrap()).unwrap();
        let decoded: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            decoded,
            json!([
                {"key": "age", "status": "unchanged", "value": 17},
                {"key": "best_friend", "status": "changed", "old_value": "Ron", "new_value": "books"}
            ])
        );
    }

    #[test]
    fn nested_entries_carry_children_only() {
        let lhs = Node::from_json_str(r#"{"a":{"b":1}}"#).unwrap();
        let rhs = Node::from_json_str(r#"{"a":{"b":2}}"#).unwrap();
        let rendered = render_json(&lhs.diff(&rhs).unwrap()).unwrap();
        let decoded: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            decoded,
            json!([{
                "key": "a",
                "status": "nested",
                "children": [{"key": "b", "status": "changed", "old_value": 1, "new_value": 2}]
            }])
        );
    }

    #[test]
    fn numbers_keep_their_written_kind() {
        let lhs = Node::from_json_str(r#"{"v":1.0,"x":9223372036854775807}"#).unwrap();
        let rhs = Node::from_json_str(r#"{"v":1.0,"x":9223372036854775808}"#).unwrap();
        let rendered = render_json(&lhs.diff(&rhs).unwrap()).unwrap();
        assert!(rendered.contains("\"value\": 1.0"), "{rendered}");
        assert!(rendered.contains("\"old_value\": 9223372036854775807"), "{rendered}");
        assert!(rendered.contains("\"new_value\": 9223372036854775808"), "{rendered}");
    }

    #[test]
    fn fields_keep_key_status_payload_order() {
        let lhs = Node::from_json_str(r#"{}"#).unwrap();
        let rhs = Node::from_json_str(r#"{"x":null}"#).unwrap();
        let rendered = render_json(&lhs.diff(&rhs).unwrap()).unwrap();
        assert_eq!(rendered, "[\n  {\n    \"key\": \"x\",\n    \"status\": \"added\",\n    \"value\": null\n  }\n]");
    }
}
