use std::collections::{BTreeMap, BTreeSet};

use super::{Change, DiffNode};
use crate::Node;

/// Compares two mappings and returns one [`DiffNode`] per key in their union.
///
/// Keys are emitted in ascending order at every level. A key whose value is a
/// mapping on both sides becomes [`Change::Nested`]; every other value,
/// sequences included, is compared as a whole.
///
/// ```
/// # use gendiff_core::{diff::build_diff, Node, Status};
/// let lhs = Node::from_json_str("{\"b\":1,\"a\":[1]}")?;
/// let rhs = Node::from_json_str("{\"c\":1,\"a\":[1,2]}")?;
/// let tree = build_diff(lhs.as_object().unwrap(), rhs.as_object().unwrap());
/// let keys: Vec<_> = tree.iter().map(|node| node.key.as_str()).collect();
/// assert_eq!(keys, ["a", "b", "c"]);
/// assert_eq!(tree[0].status(), Status::Changed);
/// # Ok::<(), gendiff_core::LoadError>(())
/// ```
#[must_use]
pub fn build_diff(lhs: &BTreeMap<String, Node>, rhs: &BTreeMap<String, Node>) -> Vec<DiffNode> {
    let keys: BTreeSet<&String> = lhs.keys().chain(rhs.keys()).collect();

    let mut nodes = Vec::with_capacity(keys.len());
    for key in keys {
        let change = match (lhs.get(key), rhs.get(key)) {
            (None, Some(value)) => Change::Added { value: value.clone() },
            (Some(value), None) => Change::Removed { value: value.clone() },
            (Some(Node::Object(old)), Some(Node::Object(new))) => {
                Change::Nested { children: build_diff(old, new) }
            }
            (Some(old), Some(new)) if old != new => {
                Change::Changed { old_value: old.clone(), new_value: new.clone() }
            }
            (Some(value), Some(_)) => Change::Unchanged { value: value.clone() },
            (None, None) => continue,
        };
        nodes.push(DiffNode::new(key.clone(), change));
    }
    nodes
}
