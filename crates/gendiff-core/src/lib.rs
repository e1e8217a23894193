//! Structural diff of JSON and YAML configuration documents.
//!
//! `gendiff-core` compares two decoded mappings key by key, producing an
//! ordered tree of [`DiffNode`]s, and renders that tree as a bracketed
//! "stylish" block, a list of plain sentences, or JSON.
//!
//! ```
//! use gendiff_core::{generate_diff, Node};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let before = Node::from_json_str("{\"host\":\"hexlet.io\",\"timeout\":50}")?;
//!     let after = Node::from_yaml_str("host: hexlet.io\ntimeout: 20\nverbose: true\n")?;
//!
//!     let plain = generate_diff(&before, &after, "plain")?;
//!     assert_eq!(
//!         plain,
//!         "Property 'timeout' was updated. From 50 to 20\n\
//!          Property 'verbose' was added with value: true"
//!     );
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod diff;
mod error;
mod format;
pub mod load;
mod node;
mod number;
pub mod render;

use std::collections::BTreeMap;
use std::path::Path;

pub use diff::{build_diff, has_changes, Change, DiffNode, Status};
pub use error::{DiffError, Error, LoadError, Side};
pub use format::Format;
pub use node::Node;
pub use number::Number;

/// Compares two documents and renders the result with the named format.
///
/// Both roots must be mappings. The format selector is resolved before any
/// diffing takes place.
///
/// ```
/// # use gendiff_core::{generate_diff, DiffError, Node, Side};
/// let doc = Node::from_json_str("{\"a\":1}")?;
/// assert_eq!(generate_diff(&doc, &doc, "stylish")?, "{\n    a: 1\n}");
///
/// let err = generate_diff(&doc, &Node::Null, "stylish").unwrap_err();
/// assert!(matches!(err, DiffError::InvalidRootShape { side: Side::Second }));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn generate_diff(left: &Node, right: &Node, format: &str) -> Result<String, DiffError> {
    let (left, right) = root_mappings(left, right)?;
    let format: Format = format.parse()?;

    let tree = build_diff(left, right);
    tracing::debug!(nodes = tree.len(), %format, "built diff tree");
    render::render(&tree, format)
}

/// Validates both roots and builds the diff tree without rendering it.
///
/// ```
/// # use gendiff_core::{diff_documents, has_changes, Node};
/// let before = Node::from_json_str("{\"a\":[1,2]}")?;
/// let after = Node::from_json_str("{\"a\":[1,2]}")?;
/// let tree = diff_documents(&before, &after)?;
/// assert!(!has_changes(&tree));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn diff_documents(left: &Node, right: &Node) -> Result<Vec<DiffNode>, DiffError> {
    let (left, right) = root_mappings(left, right)?;
    Ok(build_diff(left, right))
}

fn root_mappings<'a>(
    left: &'a Node,
    right: &'a Node,
) -> Result<(&'a BTreeMap<String, Node>, &'a BTreeMap<String, Node>), DiffError> {
    let left = left.as_object().ok_or(DiffError::InvalidRootShape { side: Side::First })?;
    let right = right.as_object().ok_or(DiffError::InvalidRootShape { side: Side::Second })?;
    Ok((left, right))
}

/// Loads two files, compares them and renders the result.
///
/// Loader errors are returned unchanged as [`Error::Load`].
pub fn generate_diff_files(
    first: impl AsRef<Path>,
    second: impl AsRef<Path>,
    format: &str,
) -> Result<String, Error> {
    let left = load::load_document(first.as_ref())?;
    let right = load::load_document(second.as_ref())?;
    Ok(generate_diff(&left, &right, format)?)
}
