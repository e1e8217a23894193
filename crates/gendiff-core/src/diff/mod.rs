//! Diff tree data structures and the structural comparison that builds them.
//!
//! A diff tree is an ordered sequence of [`DiffNode`]s, one per key in the
//! union of both mappings, sorted ascending by key at every level.

mod object;
mod path;

pub use object::build_diff;
pub use path::PropertyPath;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Node;

/// One key of a compared mapping together with what happened to it.
///
/// Serializes as `{"key": ..., "status": ..., <payload>}`.
///
/// ```
/// # use gendiff_core::{Change, DiffNode, Node, Status};
/// let node = DiffNode::new("timeout", Change::Removed { value: Node::Null });
/// assert_eq!(node.status(), Status::Removed);
/// let json = serde_json::to_string(&node).unwrap();
/// assert_eq!(json, r#"{"key":"timeout","status":"removed","value":null}"#);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiffNode {
    /// The mapping key this node describes.
    pub key: String,
    /// Status together with its payload.
    #[serde(flatten)]
    pub change: Change,
}

/// Status-specific payload of a [`DiffNode`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Change {
    /// Present only in the second document.
    Added {
        /// Value in the second document.
        value: Node,
    },
    /// Present only in the first document.
    Removed {
        /// Value in the first document.
        value: Node,
    },
    /// Present in both with unequal values that are not both mappings.
    Changed {
        /// Value in the first document.
        old_value: Node,
        /// Value in the second document.
        new_value: Node,
    },
    /// Present in both and deeply equal.
    Unchanged {
        /// The shared value.
        value: Node,
    },
    /// Mappings on both sides, compared key by key.
    Nested {
        /// Diff of the two inner mappings.
        children: Vec<DiffNode>,
    },
}

/// Fieldless view of [`Change`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// See [`Change::Added`].
    Added,
    /// See [`Change::Removed`].
    Removed,
    /// See [`Change::Changed`].
    Changed,
    /// See [`Change::Unchanged`].
    Unchanged,
    /// See [`Change::Nested`].
    Nested,
}

impl DiffNode {
    /// Creates a node for `key`.
    #[must_use]
    pub fn new<S>(key: S, change: Change) -> Self
    where
        S: Into<String>,
    {
        Self { key: key.into(), change }
    }

    /// Returns the node's status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.change.status()
    }
}

impl Change {
    /// Returns the status tag of this payload.
    #[must_use]
    pub fn status(&self) -> Status {
        match self {
            Self::Added { .. } => Status::Added,
            Self::Removed { .. } => Status::Removed,
            Self::Changed { .. } => Status::Changed,
            Self::Unchanged { .. } => Status::Unchanged,
            Self::Nested { .. } => Status::Nested,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Added => f.write_str("added"),
            Status::Removed => f.write_str("removed"),
            Status::Changed => f.write_str("changed"),
            Status::Unchanged => f.write_str("unchanged"),
            Status::Nested => f.write_str("nested"),
        }
    }
}

/// Indicates whether any node at any depth records a difference.
///
/// ```
/// # use gendiff_core::{diff::has_changes, Node};
/// let lhs = Node::from_json_str("{\"a\":{\"b\":1}}")?;
/// let rhs = Node::from_json_str("{\"a\":{\"b\":2}}")?;
/// assert!(has_changes(&lhs.diff(&rhs).unwrap()));
/// assert!(!has_changes(&lhs.diff(&lhs).unwrap()));
/// # Ok::<(), gendiff_core::LoadError>(())
/// ```
#[must_use]
pub fn has_changes(tree: &[DiffNode]) -> bool {
    tree.iter().any(|node| match &node.change {
        Change::Unchanged { .. } => false,
        Change::Nested { children } => has_changes(children),
        _ => true,
    })
}
