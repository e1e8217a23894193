use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading external data into [`Node`](crate::Node).
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document could not be read from disk.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file extension does not map to a known decoder.
    #[error("unsupported file format: {}", .path.display())]
    UnsupportedExtension {
        /// The offending path.
        path: PathBuf,
    },
    /// The provided JSON input was invalid.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The provided YAML input was invalid.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Encountered a number that cannot be represented as an IEEE-754 f64.
    #[error("number {value} cannot be represented as f64")]
    NumberOutOfRange {
        /// The textual representation of the offending number.
        value: String,
    },
    /// YAML maps may only contain string keys.
    #[error("unsupported YAML key type: {found}")]
    NonStringYamlKey {
        /// A description of the key that triggered the error.
        found: String,
    },
    /// YAML tags carry no meaning for configuration diffs and are rejected.
    #[error("unsupported YAML tag: {tag}")]
    UnsupportedYamlTag {
        /// The tag identifier encountered in the document.
        tag: String,
    },
    /// Attempted to construct a [`Number`](crate::Number) that is not finite.
    #[error("non-finite number encountered: {value}")]
    NotFinite {
        /// The offending numeric value.
        value: f64,
    },
}

/// Identifies one of the two documents handed to the orchestrator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The left-hand (old) document.
    First,
    /// The right-hand (new) document.
    Second,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => f.write_str("first"),
            Side::Second => f.write_str("second"),
        }
    }
}

/// Errors raised while diffing and rendering documents.
#[derive(Debug, Error)]
pub enum DiffError {
    /// A document root was not a mapping.
    #[error("{side} document must be a mapping at the top level")]
    InvalidRootShape {
        /// Which input failed validation.
        side: Side,
    },
    /// The format selector named no known renderer.
    #[error("unknown format: {name}")]
    UnknownFormat {
        /// The selector as supplied by the caller.
        name: String,
    },
    /// The machine-readable renderer failed to serialize the tree.
    #[error("failed to serialize diff: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Any error produced while diffing two files end to end.
#[derive(Debug, Error)]
pub enum Error {
    /// Loading or decoding one of the inputs failed.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// Validation, dispatch or rendering failed.
    #[error(transparent)]
    Diff(#[from] DiffError),
}
