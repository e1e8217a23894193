//! Synthetic corpora for benchmarking `gendiff-core`.
//!
//! Each corpus describes a pair of generated configuration documents with a
//! fixed fan-out and nesting depth. Roughly every third leaf differs between
//! the two sides and every fifth key exists on one side only, so all node
//! statuses appear in the resulting tree.
//!
//! # Examples
//!
//! ```
//! let corpus = gendiff_benches::available_corpora()
//!     .iter()
//!     .find(|c| c.name() == "small")
//!     .expect("registered corpus");
//! let dataset = corpus.load()?;
//! assert!(!dataset.diff()?.is_empty());
//! # Ok::<(), gendiff_core::Error>(())
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

use gendiff_core::{diff_documents, DiffNode, Error, LoadError, Node};
use serde_json::{json, Map as JsonMap, Value as JsonValue};

/// Description of a generated document pair.
#[derive(Clone, Copy, Debug)]
pub struct Corpus {
    name: &'static str,
    breadth: usize,
    depth: usize,
}

static CORPORA: [Corpus; 3] = [
    Corpus { name: "small", breadth: 4, depth: 2 },
    Corpus { name: "wide", breadth: 64, depth: 1 },
    Corpus { name: "deep", breadth: 3, depth: 6 },
];

/// Returns every registered corpus.
#[must_use]
pub fn available_corpora() -> &'static [Corpus] {
    &CORPORA
}

impl Corpus {
    /// Identifier used for benchmark IDs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Generates both documents.
    pub fn load(&self) -> Result<Dataset, LoadError> {
        let before = Node::from_json_value(generate(self.breadth, self.depth, 0))?;
        let after = Node::from_json_value(generate(self.breadth, self.depth, 1))?;
        Ok(Dataset { before, after })
    }
}

/// A decoded document pair.
#[derive(Clone, Debug)]
pub struct Dataset {
    before: Node,
    after: Node,
}

impl Dataset {
    /// The first document.
    #[must_use]
    pub fn before(&self) -> &Node {
        &self.before
    }

    /// The second document.
    #[must_use]
    pub fn after(&self) -> &Node {
        &self.after
    }

    /// Builds the diff tree of the pair.
    pub fn diff(&self) -> Result<Vec<DiffNode>, Error> {
        Ok(diff_documents(&self.before, &self.after)?)
    }
}

fn generate(breadth: usize, depth: usize, side: usize) -> JsonValue {
    let mut map = JsonMap::new();
    for index in 0..breadth {
        // Every fifth key belongs to one side only.
        if index % 5 == 4 && index % 2 != side {
            continue;
        }
        let key = format!("key{index:03}");
        let value = if depth > 0 && index % 2 == 0 {
            generate(breadth, depth - 1, side)
        } else if index % 3 == 0 {
            json!({ "revision": index * 10 + side, "tags": ["a", "b"] })
        } else {
            json!(format!("value-{index}"))
        };
        map.insert(key, value);
    }
    JsonValue::Object(map)
}
