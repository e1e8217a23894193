//! Reading configuration files from disk.
//!
//! The decoder is picked from the file extension: `.json` for JSON,
//! `.yaml` and `.yml` for YAML.

use std::fs;
use std::path::Path;

use crate::{LoadError, Node};

/// Decoders selectable by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// `.json`
    Json,
    /// `.yaml` or `.yml`
    Yaml,
}

impl SourceKind {
    /// Picks the decoder for `path` from its extension, ignoring case.
    ///
    /// ```
    /// # use gendiff_core::load::SourceKind;
    /// assert_eq!(SourceKind::from_path("conf/app.YML".as_ref()), Some(SourceKind::Yaml));
    /// assert_eq!(SourceKind::from_path("app.toml".as_ref()), None);
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Decodes `input` with this decoder.
    pub fn parse(self, input: &str) -> Result<Node, LoadError> {
        match self {
            Self::Json => Node::from_json_str(input),
            Self::Yaml => Node::from_yaml_str(input),
        }
    }
}

/// Reads and decodes the document at `path`.
///
/// The decoder is chosen by extension; see [`SourceKind::from_path`].
pub fn load_document(path: &Path) -> Result<Node, LoadError> {
    let kind = SourceKind::from_path(path)
        .ok_or_else(|| LoadError::UnsupportedExtension { path: path.to_path_buf() })?;
    let text = fs::read_to_string(path)
        .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    tracing::debug!(path = %path.display(), ?kind, bytes = text.len(), "loaded document");
    kind.parse(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_ignores_case() {
        assert_eq!(SourceKind::from_path(Path::new("a.JSON")), Some(SourceKind::Json));
        assert_eq!(SourceKind::from_path(Path::new("a.yaml")), Some(SourceKind::Yaml));
        assert_eq!(SourceKind::from_path(Path::new("a")), None);
    }

    #[test]
    fn unsupported_extension_is_reported_before_reading() {
        let err = load_document(Path::new("does/not/exist.txt")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedExtension { .. }));
        assert_eq!(err.to_string(), "unsupported file format: does/not/exist.txt");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_document(Path::new("does/not/exist.json")).unwrap_err();
        let LoadError::Io { path, .. } = &err else {
            panic!("expected io error, got {err:?}");
        };
        assert_eq!(path, Path::new("does/not/exist.json"));
    }
}
